use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde_derive::{Deserialize, Serialize};

use crate::schema::{books, chapters, verses};
use crate::DbError;

/// Canonical names of the New Testament books, matched exactly against
/// [Book::name].
pub const NEW_TESTAMENT_BOOKS: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// The three divisions of the Tanakh. This is mapped to the `testament`
/// column of the `books` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsExpression, FromSqlRow, Deserialize, Serialize)]
#[diesel(sql_type = Text)]
pub enum Testament {
    Torah,
    #[serde(rename = "Nevi'im")]
    Neviim,
    Ketuvim,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Torah => "Torah",
            Testament::Neviim => "Nevi'im",
            Testament::Ketuvim => "Ketuvim",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Testament {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Testament, Self::Err> {
        match s {
            "Torah" => Ok(Testament::Torah),
            "Nevi'im" => Ok(Testament::Neviim),
            "Ketuvim" => Ok(Testament::Ketuvim),
            _ => Err(DbError::InvalidTestament {
                testament: s.to_string(),
            }),
        }
    }
}

impl FromSql<Text, Sqlite> for Testament {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let testament = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
        Ok(testament.parse::<Testament>()?)
    }
}

impl ToSql<Text, Sqlite> for Testament {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(IsNull::No)
    }
}

/// Model representing a book of the canon.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = books)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Stored for older clients; never part of the book's projection.
    pub hebrew_name: String,
    pub paleo_name: String,
    pub phonetic_name: Option<String>,
    pub order: i32,
    pub testament: Testament,
}

impl Book {
    /// Whether the book's name is one of the 27 New Testament books.
    pub fn is_new_testament(&self) -> bool {
        NEW_TESTAMENT_BOOKS.contains(&self.name.as_str())
    }

    /// The stored phonetic name, or the lowercased English name when that
    /// is missing or blank.
    pub fn phonetic_name(&self) -> String {
        match self.phonetic_name {
            Some(ref phonetic) if !phonetic.is_empty() => phonetic.to_owned(),
            _ => self.name.to_lowercase(),
        }
    }
}

#[derive(Clone, Debug, Insertable)]
#[diesel(table_name = books)]
pub struct NewBook<'a> {
    pub name: &'a str,
    pub hebrew_name: &'a str,
    pub paleo_name: &'a str,
    pub phonetic_name: Option<&'a str>,
    pub order: i32,
    pub testament: Testament,
}

/// Edits to a book. `None` leaves a column as it is; a blank phonetic name
/// reads as missing.
#[derive(Clone, Debug, Default, AsChangeset)]
#[diesel(table_name = books)]
pub struct BookChanges<'a> {
    pub name: Option<&'a str>,
    pub hebrew_name: Option<&'a str>,
    pub paleo_name: Option<&'a str>,
    pub phonetic_name: Option<&'a str>,
    pub order: Option<i32>,
    pub testament: Option<Testament>,
}

/// Model representing a chapter of a book.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = chapters)]
#[diesel(belongs_to(Book))]
pub struct Chapter {
    pub id: i32,
    pub book_id: i32,
    pub chapter_number: i32,
}

/// Model representing a verse in all of its scripts.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = verses)]
#[diesel(belongs_to(Chapter))]
pub struct Verse {
    pub id: i32,
    pub chapter_id: i32,
    pub verse_number: i32,
    /// Pointed Hebrew.
    pub hebrew_text: String,
    /// Hebrew without niqqud.
    pub hebrew_consonantal: String,
    /// Paleo-Hebrew, punctuation included.
    pub paleo_text: String,
    pub paleo_transliteration: String,
    pub english_translation: Option<String>,
    pub strong_numbers: Option<String>,
    pub morphology: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Insertable)]
#[diesel(table_name = verses)]
pub struct NewVerse<'a> {
    pub chapter_id: i32,
    pub verse_number: i32,
    pub hebrew_text: &'a str,
    pub hebrew_consonantal: &'a str,
    pub paleo_text: &'a str,
    pub paleo_transliteration: &'a str,
    pub english_translation: Option<&'a str>,
    pub strong_numbers: Option<&'a str>,
    pub morphology: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Edits to a verse. `None` leaves a column as it is.
#[derive(Clone, Debug, Default, AsChangeset)]
#[diesel(table_name = verses)]
pub struct VerseChanges<'a> {
    pub hebrew_text: Option<&'a str>,
    pub hebrew_consonantal: Option<&'a str>,
    pub paleo_text: Option<&'a str>,
    pub paleo_transliteration: Option<&'a str>,
    pub english_translation: Option<&'a str>,
    pub strong_numbers: Option<&'a str>,
    pub morphology: Option<&'a str>,
    pub notes: Option<&'a str>,
}

mod fact;
mod lexicon;
mod strong_number;

pub use self::fact::{GodFact, NewGodFact, STATUS_DRAFT, STATUS_PUBLISHED};
pub use self::lexicon::{
    NewPaleoLetter, NewStrongsGreek, NewStrongsHebrew, NewWord, PaleoLetter, StrongsGreek,
    StrongsHebrew, Word,
};
pub use self::strong_number::{Lexicon, StrongNumber};

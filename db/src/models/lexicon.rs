use chrono::NaiveDateTime;
use serde_derive::Serialize;

use crate::schema::{paleo_letters, strongs_greek, strongs_hebrew, words};

/// Model representing one letter of the Paleo-Hebrew alphabet. Serializes
/// as-is.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = paleo_letters)]
pub struct PaleoLetter {
    pub id: i32,
    /// The modern square-script letter.
    pub letter: String,
    pub paleo_symbol: String,
    pub name: String,
    pub meaning: String,
    pub pictograph_description: String,
    pub sound: String,
    /// Gematria value.
    pub numerical_value: Option<i32>,
    /// Position in the alphabet, from 1.
    pub order: i32,
}

#[derive(Clone, Copy, Debug, Insertable)]
#[diesel(table_name = paleo_letters)]
pub struct NewPaleoLetter<'a> {
    pub letter: &'a str,
    pub paleo_symbol: &'a str,
    pub name: &'a str,
    pub meaning: &'a str,
    pub pictograph_description: &'a str,
    pub sound: &'a str,
    pub numerical_value: Option<i32>,
    pub order: i32,
}

/// Model representing a word study.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = words)]
pub struct Word {
    pub id: i32,
    pub hebrew_word: String,
    pub paleo_word: String,
    pub transliteration: String,
    pub pronunciation: String,
    pub meaning: String,
    pub root_analysis: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, Insertable)]
#[diesel(table_name = words)]
pub struct NewWord<'a> {
    pub hebrew_word: &'a str,
    pub paleo_word: &'a str,
    pub transliteration: &'a str,
    pub pronunciation: &'a str,
    pub meaning: &'a str,
    pub root_analysis: Option<&'a str>,
}

/// Model representing a Hebrew entry of Strong's concordance.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = strongs_hebrew)]
pub struct StrongsHebrew {
    pub id: i32,
    pub strong_number: String,
    pub hebrew_word: String,
    /// When missing, the Paleo form is derived from `hebrew_word` on display.
    pub paleo_word: Option<String>,
    pub transliteration: String,
    pub pronunciation: Option<String>,
    pub short_definition: String,
    pub long_definition: Option<String>,
    pub usage_count: i32,
    pub root_word: Option<String>,
    pub part_of_speech: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, Default, Insertable)]
#[diesel(table_name = strongs_hebrew)]
pub struct NewStrongsHebrew<'a> {
    pub strong_number: &'a str,
    pub hebrew_word: &'a str,
    pub paleo_word: Option<&'a str>,
    pub transliteration: &'a str,
    pub pronunciation: Option<&'a str>,
    pub short_definition: &'a str,
    pub long_definition: Option<&'a str>,
    pub root_word: Option<&'a str>,
    pub part_of_speech: Option<&'a str>,
}

/// Model representing a Greek entry of Strong's concordance.
#[derive(Clone, Debug, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = strongs_greek)]
pub struct StrongsGreek {
    pub id: i32,
    pub strong_number: String,
    pub greek_word: String,
    pub transliteration: String,
    pub pronunciation: Option<String>,
    pub short_definition: String,
    pub long_definition: Option<String>,
    pub usage_count: i32,
    pub root_word: Option<String>,
    pub part_of_speech: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, Default, Insertable)]
#[diesel(table_name = strongs_greek)]
pub struct NewStrongsGreek<'a> {
    pub strong_number: &'a str,
    pub greek_word: &'a str,
    pub transliteration: &'a str,
    pub pronunciation: Option<&'a str>,
    pub short_definition: &'a str,
    pub long_definition: Option<&'a str>,
    pub root_word: Option<&'a str>,
    pub part_of_speech: Option<&'a str>,
}

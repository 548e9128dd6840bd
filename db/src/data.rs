//! Client-facing projections of the stored models.
//!
//! Each `*Data` type is what an API response embeds for its model. Building
//! one never touches the database; anything derived (counts, URLs, the Paleo
//! form of a Strong's entry) is computed from values passed in.
use chrono::{NaiveDateTime, Timelike};
use serde_derive::Serialize;

use crate::models::{Book, Chapter, GodFact, StrongsGreek, StrongsHebrew, Testament, Verse};
use crate::paleo::{strip_ancient_punctuation, Transliterate};

/// Path that uploaded media is served from.
pub const UPLOAD_URL_PREFIX: &str = "/uploads/";

/// Projection of a [Book].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookData {
    pub id: i32,
    pub name: String,
    pub paleo_name: String,
    pub phonetic_name: String,
    pub order: i32,
    pub testament: Testament,
    pub chapter_count: usize,
}

impl BookData {
    /// Creates the projection, counting the chapters that belong to `book`.
    pub fn new(book: &Book, chapters: &[Chapter]) -> Self {
        Self {
            id: book.id,
            name: book.name.to_owned(),
            paleo_name: book.paleo_name.to_owned(),
            phonetic_name: book.phonetic_name(),
            order: book.order,
            testament: book.testament,
            chapter_count: chapters.iter().filter(|c| c.book_id == book.id).count(),
        }
    }
}

/// Projection of a [Chapter].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChapterData {
    pub id: i32,
    pub book_id: i32,
    pub chapter_number: i32,
    pub verse_count: usize,
}

impl ChapterData {
    /// Creates the projection, counting the verses that belong to `chapter`.
    pub fn new(chapter: &Chapter, verses: &[Verse]) -> Self {
        Self {
            id: chapter.id,
            book_id: chapter.book_id,
            chapter_number: chapter.chapter_number,
            verse_count: verses.iter().filter(|v| v.chapter_id == chapter.id).count(),
        }
    }
}

/// Projection of a [Verse].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerseData {
    pub id: i32,
    pub chapter_id: i32,
    pub verse_number: i32,
    /// Paleo text without the ancient punctuation marks.
    pub paleo_text: String,
    pub paleo_transliteration: String,
    pub english_translation: Option<String>,
    pub strong_numbers: Option<String>,
    pub morphology: Option<String>,
    pub notes: Option<String>,
    pub is_new_testament: bool,
}

impl VerseData {
    /// Creates the projection. `book` must be the book owning the verse's
    /// chapter.
    pub fn new(verse: &Verse, book: &Book) -> Self {
        Self {
            id: verse.id,
            chapter_id: verse.chapter_id,
            verse_number: verse.verse_number,
            paleo_text: strip_ancient_punctuation(&verse.paleo_text),
            paleo_transliteration: verse.paleo_transliteration.to_owned(),
            english_translation: verse.english_translation.to_owned(),
            strong_numbers: verse.strong_numbers.to_owned(),
            morphology: verse.morphology.to_owned(),
            notes: verse.notes.to_owned(),
            is_new_testament: book.is_new_testament(),
        }
    }
}

/// Projection of a [GodFact].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GodFactData {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub source: Option<String>,
    pub image_filename: Option<String>,
    pub video_filename: Option<String>,
    pub status: String,
    pub views: i32,
    pub featured: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl GodFactData {
    pub fn new(fact: &GodFact) -> Self {
        Self {
            id: fact.id,
            title: fact.title.to_owned(),
            content: fact.content.to_owned(),
            category: fact.category.to_owned(),
            source: fact.source.to_owned(),
            image_filename: fact.image_filename.to_owned(),
            video_filename: fact.video_filename.to_owned(),
            status: fact.status.to_owned(),
            views: fact.views,
            featured: fact.featured,
            created_at: fact.created_at.as_ref().map(isoformat),
            updated_at: fact.updated_at.as_ref().map(isoformat),
            image_url: upload_url(&fact.image_filename),
            video_url: upload_url(&fact.video_filename),
        }
    }
}

/// Projection of a [StrongsHebrew] entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrongsHebrewData {
    pub id: i32,
    pub strong_number: String,
    pub hebrew_word: String,
    /// The Paleo-Hebrew form shown in place of the Hebrew.
    pub word: String,
    pub transliteration: String,
    pub pronunciation: Option<String>,
    pub meaning: String,
    pub definition: String,
    pub usage_count: i32,
    pub root_word: Option<String>,
    pub part_of_speech: Option<String>,
}

impl StrongsHebrewData {
    /// Creates the projection. `paleo` renders the Hebrew word when the entry
    /// has no stored Paleo form.
    pub fn new<T: Transliterate + ?Sized>(entry: &StrongsHebrew, paleo: &T) -> Self {
        let word = match entry.paleo_word {
            Some(ref stored) if !stored.is_empty() => stored.to_owned(),
            _ => paleo.transliterate(&entry.hebrew_word),
        };

        Self {
            id: entry.id,
            strong_number: entry.strong_number.to_owned(),
            hebrew_word: entry.hebrew_word.to_owned(),
            word,
            transliteration: entry.transliteration.to_owned(),
            pronunciation: entry.pronunciation.to_owned(),
            meaning: entry.short_definition.to_owned(),
            definition: definition(&entry.long_definition, &entry.short_definition),
            usage_count: entry.usage_count,
            root_word: entry.root_word.to_owned(),
            part_of_speech: entry.part_of_speech.to_owned(),
        }
    }
}

/// Projection of a [StrongsGreek] entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrongsGreekData {
    pub id: i32,
    pub strong_number: String,
    pub word: String,
    pub transliteration: String,
    pub pronunciation: Option<String>,
    pub meaning: String,
    pub definition: String,
    pub usage_count: i32,
    pub root_word: Option<String>,
    pub part_of_speech: Option<String>,
}

impl StrongsGreekData {
    pub fn new(entry: &StrongsGreek) -> Self {
        Self {
            id: entry.id,
            strong_number: entry.strong_number.to_owned(),
            word: entry.greek_word.to_owned(),
            transliteration: entry.transliteration.to_owned(),
            pronunciation: entry.pronunciation.to_owned(),
            meaning: entry.short_definition.to_owned(),
            definition: definition(&entry.long_definition, &entry.short_definition),
            usage_count: entry.usage_count,
            root_word: entry.root_word.to_owned(),
            part_of_speech: entry.part_of_speech.to_owned(),
        }
    }
}

/// The long definition, or the short one when it is missing or blank.
fn definition(long: &Option<String>, short: &str) -> String {
    match long {
        Some(long) if !long.is_empty() => long.to_owned(),
        _ => short.to_owned(),
    }
}

fn upload_url(filename: &Option<String>) -> Option<String> {
    match filename {
        Some(name) if !name.is_empty() => Some(format!("{}{}", UPLOAD_URL_PREFIX, name)),
        _ => None,
    }
}

/// ISO 8601 without an offset. Microseconds are written only when non-zero.
/// A leap second shows as `:60` with its own fraction.
fn isoformat(dt: &NaiveDateTime) -> String {
    let seconds = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    match (dt.nanosecond() % 1_000_000_000) / 1_000 {
        0 => seconds,
        micros => format!("{}.{:06}", seconds, micros),
    }
}

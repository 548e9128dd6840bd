//! The Paleo alphabet, word studies and Strong's concordance.
use diesel::prelude::*;
use log::{debug, info};

use super::alphabet::ALPHABET;
use super::lookup_err;
use crate::clock::Clock;
use crate::models::*;
use crate::schema::{paleo_letters, strongs_greek, strongs_hebrew, words};
use crate::{DbConnection, DbError};

pub fn add_letter(new: &NewPaleoLetter, conn: &mut DbConnection) -> Result<PaleoLetter, DbError> {
    let letter: PaleoLetter = diesel::insert_into(paleo_letters::table)
        .values(new)
        .returning(PaleoLetter::as_returning())
        .get_result(conn)?;

    info!("Added letter {} ({})", letter.name, letter.letter);
    Ok(letter)
}

/// Gets the alphabet in order.
pub fn alphabet(conn: &mut DbConnection) -> Result<Vec<PaleoLetter>, DbError> {
    Ok(paleo_letters::table
        .order(paleo_letters::order.asc())
        .select(PaleoLetter::as_select())
        .load(conn)?)
}

pub fn letter(letter: &str, conn: &mut DbConnection) -> Result<PaleoLetter, DbError> {
    paleo_letters::table
        .filter(paleo_letters::letter.eq(letter))
        .select(PaleoLetter::as_select())
        .first(conn)
        .map_err(|e| {
            lookup_err(e, || DbError::NotFound {
                entity: "Letter",
                key: letter.to_owned(),
            })
        })
}

/// Inserts the 22 letters of the alphabet, skipping any already present.
///
/// Returns how many letters were inserted.
pub fn seed_alphabet(conn: &mut DbConnection) -> Result<usize, DbError> {
    let inserted = conn.transaction::<_, DbError, _>(|conn| {
        let mut inserted = 0;
        for letter in ALPHABET.iter() {
            inserted += diesel::insert_or_ignore_into(paleo_letters::table)
                .values(letter)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    info!("Seeded {} letters of the alphabet", inserted);
    Ok(inserted)
}

pub fn add_word(
    new: &NewWord,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<Word, DbError> {
    let word: Word = diesel::insert_into(words::table)
        .values((new, words::created_at.eq(clock.now())))
        .returning(Word::as_returning())
        .get_result(conn)?;

    info!("Added word study for {}", word.transliteration);
    Ok(word)
}

/// Gets all word studies by transliteration.
pub fn words(conn: &mut DbConnection) -> Result<Vec<Word>, DbError> {
    Ok(words::table
        .order((words::transliteration.asc(), words::id.asc()))
        .select(Word::as_select())
        .load(conn)?)
}

/// Adds a Hebrew concordance entry, storing its number in canonical form.
pub fn add_strongs_hebrew(
    new: &NewStrongsHebrew,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<StrongsHebrew, DbError> {
    let number = canonical_number(new.strong_number, Lexicon::Hebrew)?;
    let entry: StrongsHebrew = diesel::insert_into(strongs_hebrew::table)
        .values((
            &NewStrongsHebrew {
                strong_number: &number,
                ..*new
            },
            strongs_hebrew::created_at.eq(clock.now()),
        ))
        .returning(StrongsHebrew::as_returning())
        .get_result(conn)?;

    info!("Added Strong's {}", entry.strong_number);
    Ok(entry)
}

/// Adds a Greek concordance entry, storing its number in canonical form.
pub fn add_strongs_greek(
    new: &NewStrongsGreek,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<StrongsGreek, DbError> {
    let number = canonical_number(new.strong_number, Lexicon::Greek)?;
    let entry: StrongsGreek = diesel::insert_into(strongs_greek::table)
        .values((
            &NewStrongsGreek {
                strong_number: &number,
                ..*new
            },
            strongs_greek::created_at.eq(clock.now()),
        ))
        .returning(StrongsGreek::as_returning())
        .get_result(conn)?;

    info!("Added Strong's {}", entry.strong_number);
    Ok(entry)
}

pub fn strongs_hebrew(number: &str, conn: &mut DbConnection) -> Result<StrongsHebrew, DbError> {
    let number = canonical_number(number, Lexicon::Hebrew)?;
    debug!("Looking up Strong's {}", number);

    strongs_hebrew::table
        .filter(strongs_hebrew::strong_number.eq(&number))
        .select(StrongsHebrew::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || strongs_not_found(number)))
}

pub fn strongs_greek(number: &str, conn: &mut DbConnection) -> Result<StrongsGreek, DbError> {
    let number = canonical_number(number, Lexicon::Greek)?;
    debug!("Looking up Strong's {}", number);

    strongs_greek::table
        .filter(strongs_greek::strong_number.eq(&number))
        .select(StrongsGreek::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || strongs_not_found(number)))
}

/// Counts one more use of a concordance entry and returns the new total.
pub fn record_strongs_usage(number: &str, conn: &mut DbConnection) -> Result<i32, DbError> {
    let number: StrongNumber = number.parse()?;
    let canonical = number.to_string();

    match number.lexicon {
        Lexicon::Hebrew => diesel::update(
            strongs_hebrew::table.filter(strongs_hebrew::strong_number.eq(&canonical)),
        )
        .set(strongs_hebrew::usage_count.eq(strongs_hebrew::usage_count + 1))
        .returning(strongs_hebrew::usage_count)
        .get_result(conn),
        Lexicon::Greek => diesel::update(
            strongs_greek::table.filter(strongs_greek::strong_number.eq(&canonical)),
        )
        .set(strongs_greek::usage_count.eq(strongs_greek::usage_count + 1))
        .returning(strongs_greek::usage_count)
        .get_result(conn),
    }
    .map_err(|e| lookup_err(e, || strongs_not_found(canonical)))
}

/// Parses `raw` and checks it belongs to `lexicon`, giving back its
/// canonical spelling.
fn canonical_number(raw: &str, lexicon: Lexicon) -> Result<String, DbError> {
    let number: StrongNumber = raw.parse()?;
    if number.lexicon != lexicon {
        return Err(DbError::InvalidStrongNumber {
            number: raw.to_owned(),
        });
    }
    Ok(number.to_string())
}

fn strongs_not_found(number: String) -> DbError {
    DbError::NotFound {
        entity: "Strong's number",
        key: number,
    }
}

//! Books, chapters and verses.
use diesel::prelude::*;
use log::{debug, info};

use super::lookup_err;
use crate::clock::Clock;
use crate::data::{BookData, ChapterData, VerseData};
use crate::models::*;
use crate::schema::{books, chapters, verses};
use crate::{DbConnection, DbError};

/// What [delete_book] removed along with the book.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeReport {
    pub chapters: usize,
    pub verses: usize,
}

pub fn add_book(new: &NewBook, conn: &mut DbConnection) -> Result<Book, DbError> {
    let book: Book = diesel::insert_into(books::table)
        .values(new)
        .returning(Book::as_returning())
        .get_result(conn)?;

    info!("Added book '{}' at position {}", book.name, book.order);
    Ok(book)
}

pub fn add_chapter(
    book_id: i32,
    chapter_number: i32,
    conn: &mut DbConnection,
) -> Result<Chapter, DbError> {
    let chapter: Chapter = diesel::insert_into(chapters::table)
        .values((
            chapters::book_id.eq(book_id),
            chapters::chapter_number.eq(chapter_number),
        ))
        .returning(Chapter::as_returning())
        .get_result(conn)?;

    info!("Added chapter {} to book {}", chapter_number, book_id);
    Ok(chapter)
}

/// Adds a verse, stamping both timestamps with `clock`.
pub fn add_verse(
    new: &NewVerse,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<Verse, DbError> {
    let now = clock.now();
    let verse: Verse = diesel::insert_into(verses::table)
        .values((new, verses::created_at.eq(now), verses::updated_at.eq(now)))
        .returning(Verse::as_returning())
        .get_result(conn)?;

    info!("Added verse {} to chapter {}", verse.verse_number, verse.chapter_id);
    Ok(verse)
}

/// Applies `changes` to a verse and moves its `updated_at` to now.
pub fn update_verse(
    verse_id: i32,
    changes: &VerseChanges,
    clock: &dyn Clock,
    conn: &mut DbConnection,
) -> Result<Verse, DbError> {
    diesel::update(verses::table.find(verse_id))
        .set((changes, verses::updated_at.eq(clock.now())))
        .returning(Verse::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || verse_not_found(verse_id)))
}

/// Applies `changes` to a book.
pub fn update_book(
    book_id: i32,
    changes: &BookChanges,
    conn: &mut DbConnection,
) -> Result<Book, DbError> {
    let book: Book = diesel::update(books::table.find(book_id))
        .set(changes)
        .returning(Book::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || book_not_found(book_id)))?;

    info!("Updated book '{}'", book.name);
    Ok(book)
}

/// Gives a chapter a new number within its book.
pub fn renumber_chapter(
    chapter_id: i32,
    chapter_number: i32,
    conn: &mut DbConnection,
) -> Result<Chapter, DbError> {
    diesel::update(chapters::table.find(chapter_id))
        .set(chapters::chapter_number.eq(chapter_number))
        .returning(Chapter::as_returning())
        .get_result(conn)
        .map_err(|e| lookup_err(e, || chapter_not_found(chapter_id)))
}

pub fn book(book_id: i32, conn: &mut DbConnection) -> Result<Book, DbError> {
    books::table
        .find(book_id)
        .select(Book::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || book_not_found(book_id)))
}

/// Looks up a book by its English or phonetic name, ignoring case.
pub fn find_book(name: &str, conn: &mut DbConnection) -> Result<Book, DbError> {
    let wanted = name.trim().to_lowercase();
    debug!("Looking up book '{}'", wanted);

    all_books(conn)?
        .into_iter()
        .find(|book| {
            book.name.to_lowercase() == wanted || book.phonetic_name().to_lowercase() == wanted
        })
        .ok_or_else(|| DbError::BookNotFound {
            book: name.to_owned(),
        })
}

/// Gets every book in canonical order.
pub fn all_books(conn: &mut DbConnection) -> Result<Vec<Book>, DbError> {
    Ok(books::table
        .order(books::order.asc())
        .select(Book::as_select())
        .load(conn)?)
}

/// Gets the chapters of a book, first to last.
pub fn chapters(book_id: i32, conn: &mut DbConnection) -> Result<Vec<Chapter>, DbError> {
    Ok(chapters::table
        .filter(chapters::book_id.eq(book_id))
        .order(chapters::chapter_number.asc())
        .select(Chapter::as_select())
        .load(conn)?)
}

pub fn chapter(
    book_id: i32,
    chapter_number: i32,
    conn: &mut DbConnection,
) -> Result<Chapter, DbError> {
    let book = book(book_id, conn)?;

    Chapter::belonging_to(&book)
        .filter(chapters::chapter_number.eq(chapter_number))
        .select(Chapter::as_select())
        .first(conn)
        .map_err(|e| {
            lookup_err(e, || DbError::ChapterNotFound {
                book: book.name.to_owned(),
                chapter: chapter_number,
            })
        })
}

/// Gets the verses of a chapter, first to last.
pub fn verses(chapter_id: i32, conn: &mut DbConnection) -> Result<Vec<Verse>, DbError> {
    Ok(verses::table
        .filter(verses::chapter_id.eq(chapter_id))
        .order(verses::verse_number.asc())
        .select(Verse::as_select())
        .load(conn)?)
}

pub fn verse(verse_id: i32, conn: &mut DbConnection) -> Result<Verse, DbError> {
    verses::table
        .find(verse_id)
        .select(Verse::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || verse_not_found(verse_id)))
}

pub fn chapter_count(book_id: i32, conn: &mut DbConnection) -> Result<i64, DbError> {
    Ok(chapters::table
        .filter(chapters::book_id.eq(book_id))
        .count()
        .get_result(conn)?)
}

pub fn verse_count(chapter_id: i32, conn: &mut DbConnection) -> Result<i64, DbError> {
    Ok(verses::table
        .filter(verses::chapter_id.eq(chapter_id))
        .count()
        .get_result(conn)?)
}

pub fn book_data(book_id: i32, conn: &mut DbConnection) -> Result<BookData, DbError> {
    let book = book(book_id, conn)?;
    let chapters = Chapter::belonging_to(&book)
        .select(Chapter::as_select())
        .load(conn)?;

    Ok(BookData::new(&book, &chapters))
}

/// Projections of every book in canonical order.
pub fn all_book_data(conn: &mut DbConnection) -> Result<Vec<BookData>, DbError> {
    let books = all_books(conn)?;
    let chapters = Chapter::belonging_to(&books)
        .select(Chapter::as_select())
        .load(conn)?
        .grouped_by(&books);

    Ok(books
        .iter()
        .zip(chapters)
        .map(|(book, chapters)| BookData::new(book, &chapters))
        .collect())
}

/// Projections of a book's chapters, first to last.
pub fn chapter_data(book_id: i32, conn: &mut DbConnection) -> Result<Vec<ChapterData>, DbError> {
    let chapters = chapters(book_id, conn)?;
    let verses = Verse::belonging_to(&chapters)
        .select(Verse::as_select())
        .load(conn)?
        .grouped_by(&chapters);

    Ok(chapters
        .iter()
        .zip(verses)
        .map(|(chapter, verses)| ChapterData::new(chapter, &verses))
        .collect())
}

/// Projections of a chapter's verses, first to last.
pub fn verse_data(chapter_id: i32, conn: &mut DbConnection) -> Result<Vec<VerseData>, DbError> {
    let book: Book = chapters::table
        .inner_join(books::table)
        .filter(chapters::id.eq(chapter_id))
        .select(Book::as_select())
        .first(conn)
        .map_err(|e| lookup_err(e, || chapter_not_found(chapter_id)))?;

    Ok(verses(chapter_id, conn)?
        .iter()
        .map(|verse| VerseData::new(verse, &book))
        .collect())
}

/// Deletes a book together with its chapters and their verses.
pub fn delete_book(book_id: i32, conn: &mut DbConnection) -> Result<CascadeReport, DbError> {
    conn.transaction::<_, DbError, _>(|conn| {
        let book = book(book_id, conn)?;
        let chapter_ids: Vec<i32> = Chapter::belonging_to(&book)
            .select(chapters::id)
            .load(conn)?;

        let verses = diesel::delete(verses::table.filter(verses::chapter_id.eq_any(chapter_ids)))
            .execute(conn)?;
        let chapters = diesel::delete(Chapter::belonging_to(&book)).execute(conn)?;
        diesel::delete(&book).execute(conn)?;

        info!(
            "Deleted book '{}' with {} chapters and {} verses",
            book.name, chapters, verses
        );
        Ok(CascadeReport { chapters, verses })
    })
}

/// Deletes a chapter and its verses, returning how many verses went with it.
pub fn delete_chapter(chapter_id: i32, conn: &mut DbConnection) -> Result<usize, DbError> {
    conn.transaction::<_, DbError, _>(|conn| {
        let chapter: Chapter = chapters::table
            .find(chapter_id)
            .select(Chapter::as_select())
            .first(conn)
            .map_err(|e| lookup_err(e, || chapter_not_found(chapter_id)))?;

        let verses = diesel::delete(Verse::belonging_to(&chapter)).execute(conn)?;
        diesel::delete(&chapter).execute(conn)?;

        info!(
            "Deleted chapter {} of book {} with {} verses",
            chapter.chapter_number, chapter.book_id, verses
        );
        Ok(verses)
    })
}

pub fn delete_verse(verse_id: i32, conn: &mut DbConnection) -> Result<(), DbError> {
    match diesel::delete(verses::table.find(verse_id)).execute(conn)? {
        0 => Err(verse_not_found(verse_id)),
        _ => {
            info!("Deleted verse {}", verse_id);
            Ok(())
        }
    }
}

fn book_not_found(book_id: i32) -> DbError {
    DbError::BookNotFound {
        book: book_id.to_string(),
    }
}

fn chapter_not_found(chapter_id: i32) -> DbError {
    DbError::NotFound {
        entity: "Chapter",
        key: chapter_id.to_string(),
    }
}

fn verse_not_found(verse_id: i32) -> DbError {
    DbError::NotFound {
        entity: "Verse",
        key: verse_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::scribe::fixtures::{march_first, march_second};
    use crate::test_connection;

    fn add(name: &str, order: i32, conn: &mut DbConnection) -> Book {
        add_book(
            &NewBook {
                name,
                hebrew_name: "ספר",
                paleo_name: "\u{1090E}\u{10910}\u{10913}",
                phonetic_name: None,
                order,
                testament: Testament::Ketuvim,
            },
            conn,
        )
        .unwrap()
    }

    fn new_verse(chapter_id: i32, verse_number: i32) -> NewVerse<'static> {
        NewVerse {
            chapter_id,
            verse_number,
            hebrew_text: "כָּל־הָאָרֶץ׃",
            hebrew_consonantal: "כל־הארץ׃",
            paleo_text: "\u{1090A}\u{1090B}\u{05BE}\u{10904}\u{10900}\u{10913}\u{10911}\u{05C3}",
            paleo_transliteration: "kal haarts",
            ..Default::default()
        }
    }

    /// Adds a book with `chapters` chapters of `verses` verses each.
    fn populate(
        name: &str,
        order: i32,
        chapters: i32,
        verses: i32,
        conn: &mut DbConnection,
    ) -> Book {
        let clock = FixedClock(march_first());
        let book = add(name, order, conn);
        for c in 1..=chapters {
            let chapter = add_chapter(book.id, c, conn).unwrap();
            for v in 1..=verses {
                add_verse(&new_verse(chapter.id, v), &clock, conn).unwrap();
            }
        }
        book
    }

    #[test]
    fn books_in_canonical_order() {
        let mut conn = test_connection();
        add("Exodus", 2, &mut conn);
        add("Genesis", 1, &mut conn);
        add("Leviticus", 3, &mut conn);

        let names: Vec<String> = all_books(&mut conn)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Genesis", "Exodus", "Leviticus"]);
    }

    #[test]
    fn book_order_is_unique() {
        let mut conn = test_connection();
        add("Genesis", 1, &mut conn);

        let result = add_book(
            &NewBook {
                name: "Exodus",
                hebrew_name: "שמות",
                paleo_name: "\u{10914}\u{1090C}\u{10905}\u{10915}",
                phonetic_name: Some("shmot"),
                order: 1,
                testament: Testament::Torah,
            },
            &mut conn,
        );
        match result {
            Err(DbError::Integrity { .. }) => (),
            other => panic!("expected an integrity error, got {:?}", other),
        }
    }

    #[test]
    fn chapter_and_verse_numbers_are_unique() {
        let mut conn = test_connection();
        let book = populate("Ruth", 8, 1, 1, &mut conn);
        let chapter = chapter(book.id, 1, &mut conn).unwrap();

        assert!(matches!(
            add_chapter(book.id, 1, &mut conn),
            Err(DbError::Integrity { .. })
        ));
        assert!(matches!(
            add_verse(&new_verse(chapter.id, 1), &FixedClock(march_first()), &mut conn),
            Err(DbError::Integrity { .. })
        ));
    }

    #[test]
    fn verses_need_a_chapter() {
        let mut conn = test_connection();
        assert!(matches!(
            add_verse(&new_verse(42, 1), &FixedClock(march_first()), &mut conn),
            Err(DbError::Integrity { .. })
        ));
    }

    #[test]
    fn counts_follow_children() {
        let mut conn = test_connection();
        let empty = add("Obadiah", 31, &mut conn);
        assert_eq!(book_data(empty.id, &mut conn).unwrap().chapter_count, 0);

        let book = populate("Jonah", 32, 4, 3, &mut conn);
        assert_eq!(book_data(book.id, &mut conn).unwrap().chapter_count, 4);
        assert_eq!(chapter_count(book.id, &mut conn).unwrap(), 4);

        let chapters = chapter_data(book.id, &mut conn).unwrap();
        assert_eq!(
            chapters.iter().map(|c| c.chapter_number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(chapters.iter().all(|c| c.verse_count == 3));
        assert_eq!(verse_count(chapters[0].id, &mut conn).unwrap(), 3);

        let all = all_book_data(&mut conn).unwrap();
        assert_eq!(
            all.iter().map(|b| b.chapter_count).collect::<Vec<_>>(),
            vec![0, 4]
        );
    }

    #[test]
    fn delete_book_cascades() {
        let mut conn = test_connection();
        let doomed = populate("Nahum", 34, 3, 2, &mut conn);
        let kept = populate("Habakkuk", 35, 2, 5, &mut conn);
        let doomed_chapters = chapters(doomed.id, &mut conn).unwrap();

        assert_eq!(
            delete_book(doomed.id, &mut conn).unwrap(),
            CascadeReport {
                chapters: 3,
                verses: 6
            }
        );

        assert_eq!(
            book(doomed.id, &mut conn),
            Err(DbError::BookNotFound {
                book: doomed.id.to_string()
            })
        );
        assert_eq!(chapter_count(doomed.id, &mut conn).unwrap(), 0);
        for chapter in doomed_chapters {
            assert_eq!(verse_count(chapter.id, &mut conn).unwrap(), 0);
        }

        assert_eq!(book_data(kept.id, &mut conn).unwrap().chapter_count, 2);
        let kept_verses: i64 = verses::table.count().get_result(&mut conn).unwrap();
        assert_eq!(kept_verses, 10);
    }

    #[test]
    fn delete_missing_book() {
        let mut conn = test_connection();
        assert_eq!(
            delete_book(7, &mut conn),
            Err(DbError::BookNotFound {
                book: "7".to_string()
            })
        );
    }

    #[test]
    fn find_book_by_either_name() {
        let mut conn = test_connection();
        add_book(
            &NewBook {
                name: "Genesis",
                hebrew_name: "בראשית",
                paleo_name: "\u{10901}\u{10913}\u{10900}\u{10914}\u{10909}\u{10915}",
                phonetic_name: Some("barashyt"),
                order: 1,
                testament: Testament::Torah,
            },
            &mut conn,
        )
        .unwrap();

        assert_eq!(find_book("genesis", &mut conn).unwrap().order, 1);
        assert_eq!(find_book("GENESIS", &mut conn).unwrap().order, 1);
        assert_eq!(find_book("Barashyt", &mut conn).unwrap().order, 1);
        assert_eq!(
            find_book("Gen", &mut conn),
            Err(DbError::BookNotFound {
                book: "Gen".to_string()
            })
        );
    }

    #[test]
    fn missing_chapter() {
        let mut conn = test_connection();
        let book = populate("Joel", 29, 3, 1, &mut conn);

        assert_eq!(
            chapter(book.id, 4, &mut conn),
            Err(DbError::ChapterNotFound {
                book: "Joel".to_string(),
                chapter: 4
            })
        );
    }

    #[test]
    fn verse_data_knows_its_testament() {
        let mut conn = test_connection();
        let matthew = populate("Matthew", 40, 1, 2, &mut conn);
        let malachi = populate("Malachi", 39, 1, 2, &mut conn);

        let nt = chapter(matthew.id, 1, &mut conn).unwrap();
        let ot = chapter(malachi.id, 1, &mut conn).unwrap();
        assert!(verse_data(nt.id, &mut conn)
            .unwrap()
            .iter()
            .all(|v| v.is_new_testament));
        assert!(verse_data(ot.id, &mut conn)
            .unwrap()
            .iter()
            .all(|v| !v.is_new_testament));
    }

    #[test]
    fn stored_paleo_keeps_punctuation() {
        let mut conn = test_connection();
        let book = populate("Psalms", 19, 1, 1, &mut conn);
        let chapter = chapter(book.id, 1, &mut conn).unwrap();

        let data = verse_data(chapter.id, &mut conn).unwrap();
        assert_eq!(
            data[0].paleo_text,
            "\u{1090A}\u{1090B}\u{10904}\u{10900}\u{10913}\u{10911}"
        );

        let stored = verses(chapter.id, &mut conn).unwrap();
        assert!(stored[0].paleo_text.contains('\u{05BE}'));
        assert!(stored[0].paleo_text.contains('\u{05C3}'));
    }

    #[test]
    fn update_verse_moves_updated_at() {
        let mut conn = test_connection();
        let book = populate("Lamentations", 25, 1, 1, &mut conn);
        let chapter = chapter(book.id, 1, &mut conn).unwrap();
        let original = verses(chapter.id, &mut conn).unwrap().remove(0);
        assert_eq!(original.created_at, Some(march_first()));
        assert_eq!(original.updated_at, Some(march_first()));

        let updated = update_verse(
            original.id,
            &VerseChanges {
                english_translation: Some("all the earth"),
                notes: Some("maqqef joins the pair"),
                ..Default::default()
            },
            &FixedClock(march_second()),
            &mut conn,
        )
        .unwrap();

        assert_eq!(updated.english_translation.as_deref(), Some("all the earth"));
        assert_eq!(updated.notes.as_deref(), Some("maqqef joins the pair"));
        assert_eq!(updated.paleo_text, original.paleo_text);
        assert_eq!(updated.created_at, Some(march_first()));
        assert_eq!(updated.updated_at, Some(march_second()));
        assert_eq!(verse(original.id, &mut conn).unwrap(), updated);

        assert_eq!(
            update_verse(999, &VerseChanges::default(), &FixedClock(march_second()), &mut conn),
            Err(DbError::NotFound {
                entity: "Verse",
                key: "999".to_string()
            })
        );
    }

    #[test]
    fn delete_chapter_takes_its_verses() {
        let mut conn = test_connection();
        let book = populate("Zechariah", 38, 3, 2, &mut conn);
        let neighbour = populate("Haggai", 37, 2, 4, &mut conn);
        let doomed = chapter(book.id, 2, &mut conn).unwrap();

        assert_eq!(delete_chapter(doomed.id, &mut conn).unwrap(), 2);

        assert_eq!(verse_count(doomed.id, &mut conn).unwrap(), 0);
        assert_eq!(
            chapter(book.id, 2, &mut conn),
            Err(DbError::ChapterNotFound {
                book: "Zechariah".to_string(),
                chapter: 2
            })
        );
        assert_eq!(chapter_count(book.id, &mut conn).unwrap(), 2);
        let left = chapter_data(book.id, &mut conn).unwrap();
        assert_eq!(
            left.iter().map(|c| (c.chapter_number, c.verse_count)).collect::<Vec<_>>(),
            vec![(1, 2), (3, 2)]
        );
        assert_eq!(book_data(neighbour.id, &mut conn).unwrap().chapter_count, 2);
        let total: i64 = verses::table.count().get_result(&mut conn).unwrap();
        assert_eq!(total, 12);

        assert_eq!(
            delete_chapter(doomed.id, &mut conn),
            Err(DbError::NotFound {
                entity: "Chapter",
                key: doomed.id.to_string()
            })
        );
    }

    #[test]
    fn delete_single_verse() {
        let mut conn = test_connection();
        let book = populate("Micah", 33, 1, 3, &mut conn);
        let chapter = chapter(book.id, 1, &mut conn).unwrap();
        let second = verses(chapter.id, &mut conn).unwrap().remove(1);

        delete_verse(second.id, &mut conn).unwrap();
        assert_eq!(
            verses(chapter.id, &mut conn)
                .unwrap()
                .iter()
                .map(|v| v.verse_number)
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(
            delete_verse(second.id, &mut conn),
            Err(DbError::NotFound {
                entity: "Verse",
                key: second.id.to_string()
            })
        );
    }

    #[test]
    fn update_book_fields() {
        let mut conn = test_connection();
        let amos = add("Amos", 30, &mut conn);
        add("Hosea", 28, &mut conn);

        let updated = update_book(
            amos.id,
            &BookChanges {
                paleo_name: Some("\u{1090F}\u{1090C}\u{10905}\u{10914}"),
                phonetic_name: Some("amos"),
                order: Some(29),
                ..Default::default()
            },
            &mut conn,
        )
        .unwrap();
        assert_eq!(updated.name, "Amos");
        assert_eq!(updated.paleo_name, "\u{1090F}\u{1090C}\u{10905}\u{10914}");
        assert_eq!(updated.phonetic_name.as_deref(), Some("amos"));
        assert_eq!(updated.order, 29);
        assert_eq!(book(amos.id, &mut conn).unwrap(), updated);

        assert!(matches!(
            update_book(
                amos.id,
                &BookChanges {
                    order: Some(28),
                    ..Default::default()
                },
                &mut conn
            ),
            Err(DbError::Integrity { .. })
        ));
        assert_eq!(
            update_book(
                999,
                &BookChanges {
                    order: Some(1),
                    ..Default::default()
                },
                &mut conn
            ),
            Err(DbError::BookNotFound {
                book: "999".to_string()
            })
        );
    }

    #[test]
    fn renumber_chapter_keeps_numbers_unique() {
        let mut conn = test_connection();
        let book = populate("Esther", 21, 2, 1, &mut conn);
        let first = chapter(book.id, 1, &mut conn).unwrap();

        assert!(matches!(
            renumber_chapter(first.id, 2, &mut conn),
            Err(DbError::Integrity { .. })
        ));
        let moved = renumber_chapter(first.id, 10, &mut conn).unwrap();
        assert_eq!(moved.chapter_number, 10);
        assert_eq!(verse_count(moved.id, &mut conn).unwrap(), 1);
    }
}

#![warn(clippy::all)]

use std::error::Error;
use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use serde::Serialize;
use serde_json::json;

use paleo_db::data::{BookData, GodFactData, StrongsGreekData, StrongsHebrewData};
use paleo_db::models::{Lexicon, StrongNumber};
use paleo_db::scribe::facts::FactFilter;
use paleo_db::scribe::{canon, facts, lexicon};
use paleo_db::{establish_connection, run_migrations, DbConnection, PhoenicianScript, SystemClock};

/// Query and maintain the Paleo-Hebrew Bible database.
#[derive(Debug, Parser)]
#[command(name = "paleo", version, author, about)]
struct Cli {
    /// SQLite database to open.
    #[arg(long, env = "DATABASE_URL", default_value = "/tmp/paleo.db")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Create or upgrade the database schema.
    Migrate,
    /// Load the 22 letters of the Paleo-Hebrew alphabet.
    SeedAlphabet,
    /// List every book in canonical order.
    Books,
    /// Show a book and its chapters.
    Book {
        /// English or phonetic name, in any case.
        name: String,
    },
    /// Show the verses of a chapter.
    Chapter { book: String, number: i32 },
    /// List the Paleo-Hebrew alphabet.
    Alphabet,
    /// List the word studies.
    Words,
    /// Look up a Strong's number such as H430 or G26.
    Strongs { number: String },
    /// List editorial facts.
    Facts {
        #[arg(long)]
        category: Option<String>,
        /// Include drafts.
        #[arg(long)]
        all: bool,
    },
    /// Publish a draft fact.
    PublishFact { id: i32 },
    /// Delete a book with all of its chapters and verses.
    DeleteBook { id: i32 },
    /// Delete one chapter of a book with its verses.
    DeleteChapter { book: String, number: i32 },
}

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        let _ = writeln!(io::stderr(), "{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut conn = establish_connection(&cli.database_url)?;
    let conn = &mut conn;

    match cli.command {
        Command::Migrate => {
            run_migrations(conn)?;
            info!("Database at {} is up to date", cli.database_url);
            Ok(())
        }
        Command::SeedAlphabet => {
            let inserted = lexicon::seed_alphabet(conn)?;
            print_json(&json!({ "inserted": inserted }))
        }
        Command::Books => print_json(&canon::all_book_data(conn)?),
        Command::Book { name } => {
            let book = canon::find_book(&name, conn)?;
            print_json(&json!({
                "book": canon::book_data(book.id, conn)?,
                "chapters": canon::chapter_data(book.id, conn)?,
            }))
        }
        Command::Chapter { book, number } => {
            let book = canon::find_book(&book, conn)?;
            let chapter = canon::chapter(book.id, number, conn)?;
            print_json(&json!({
                "book": BookData::new(&book, &canon::chapters(book.id, conn)?),
                "verses": canon::verse_data(chapter.id, conn)?,
            }))
        }
        Command::Alphabet => print_json(&lexicon::alphabet(conn)?),
        Command::Words => print_json(&lexicon::words(conn)?),
        Command::Strongs { number } => strongs(&number, conn),
        Command::Facts { category, all } => {
            let filter = FactFilter {
                category: category.as_deref(),
                include_drafts: all,
            };
            let facts: Vec<GodFactData> = facts::facts(&filter, conn)?
                .iter()
                .map(GodFactData::new)
                .collect();
            print_json(&facts)
        }
        Command::PublishFact { id } => {
            let fact = facts::publish_fact(id, &SystemClock, conn)?;
            print_json(&GodFactData::new(&fact))
        }
        Command::DeleteBook { id } => {
            let report = canon::delete_book(id, conn)?;
            print_json(&json!({
                "deleted_chapters": report.chapters,
                "deleted_verses": report.verses,
            }))
        }
        Command::DeleteChapter { book, number } => {
            let book = canon::find_book(&book, conn)?;
            let chapter = canon::chapter(book.id, number, conn)?;
            let verses = canon::delete_chapter(chapter.id, conn)?;
            print_json(&json!({ "deleted_verses": verses }))
        }
    }
}

fn strongs(number: &str, conn: &mut DbConnection) -> Result<(), Box<dyn Error>> {
    let parsed: StrongNumber = number.parse()?;
    match parsed.lexicon {
        Lexicon::Hebrew => {
            let entry = lexicon::strongs_hebrew(number, conn)?;
            print_json(&StrongsHebrewData::new(&entry, &PhoenicianScript))
        }
        Lexicon::Greek => {
            let entry = lexicon::strongs_greek(number, conn)?;
            print_json(&StrongsGreekData::new(&entry))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

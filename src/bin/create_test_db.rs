use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use expense_tracker::{ExpenseStore, initialize_db};

/// A utility for creating a test database for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_EXPENSES: [(f64, &str); 6] = [
    (10.50, "Lunch"),
    (5.00, "Coffee"),
    (3.25, "Snack"),
    (64.99, "Groceries"),
    (12.00, "Movie ticket"),
    (2.80, "Bus fare"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample expenses...");

    let store = ExpenseStore::new(Arc::new(Mutex::new(conn)));
    let now = OffsetDateTime::now_utc();

    for (days_ago, (amount, description)) in SAMPLE_EXPENSES.into_iter().enumerate() {
        let date = now - Duration::days(days_ago as i64);

        if !store.add(amount, description, date) {
            return Err(format!("Could not add the expense {description:?}").into());
        }
    }

    println!("Success!");

    Ok(())
}

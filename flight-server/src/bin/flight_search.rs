//! Command-line flight search.
//!
//! Prints a formatted itinerary report for an origin/destination pair.
//! Exits 0 on success (including an empty result), 1 on usage error or
//! any failure.

use chrono::{Datelike, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flight_server::composer::{Composer, SearchConfig, SearchOptions};
use flight_server::hubs::major_hubs;
use flight_server::report::ReportFormatter;
use flight_server::store::SqliteStore;

/// Search for direct and connecting flights between two airports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Origin airport code (3 letters, case-insensitive)
    origin: String,

    /// Destination airport code (3 letters, case-insensitive)
    destination: String,

    /// Path to the SQLite database file
    #[arg(short, long, default_value = "flights.db")]
    database: String,

    /// Departure date (YYYY-MM-DD); filters legs by operating day
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Maximum number of connecting itineraries to show
    #[arg(short, long, default_value_t = 5)]
    max_results: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let store = match SqliteStore::open(&args.database) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let hubs = major_hubs();
    let config = SearchConfig::default();
    let composer = Composer::new(&store, &store, &hubs, &config);

    let options = SearchOptions {
        max_results: Some(args.max_results),
        min_layover_mins: None,
        departure_day: args.date.map(|d| d.weekday()),
    };

    let outcome = match composer.search_with_options(&args.origin, &args.destination, &options) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let formatter = ReportFormatter::new(&store);
    print!("{}", formatter.render_text(&outcome));
}

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_server::composer::SearchConfig;
use flight_server::hubs::major_hubs;
use flight_server::store::SqliteStore;
use flight_server::web::{AppState, create_router};

/// Flight schedule lookup and itinerary composition server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file. If not provided, uses an
    /// in-memory database (useful for smoke tests only).
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let store = match &args.database {
        Some(path) => SqliteStore::open(path).unwrap_or_else(|e| {
            eprintln!("Failed to open database: {e}");
            std::process::exit(1);
        }),
        None => {
            info!("no database path given, using an empty in-memory store");
            SqliteStore::open_in_memory().expect("in-memory database")
        }
    };

    let state = AppState::new(store, major_hubs(), SearchConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!(%addr, "flight server listening");
    info!("endpoints: GET /health, GET /api/flights/search?from=MNL&to=NRT");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

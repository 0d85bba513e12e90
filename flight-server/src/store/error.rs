//! Store error types.

/// Errors from the flight leg / airport stores.
///
/// Any of these aborts the search that triggered the query; the engine
/// performs no retries and no partial-result degradation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying database rejected the query or the connection failed
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The database file could not be opened
    #[error("cannot open database at {path}: {message}")]
    Open { path: String, message: String },
}

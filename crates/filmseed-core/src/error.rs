use thiserror::Error;

/// Core error type shared across filmseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record violates the table invariants.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// The table name is not one of the fixture tables.
    #[error("unknown table: {0}")]
    UnknownTable(String),
    /// A label does not match any known role or gender code.
    #[error("unknown label '{value}' for {kind}")]
    UnknownLabel { kind: &'static str, value: String },
}

/// Convenience alias for results returned by filmseed crates.
pub type Result<T> = std::result::Result<T, Error>;

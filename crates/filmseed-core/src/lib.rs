//! Core contracts for filmseed.
//!
//! This crate defines the fixture tables, their column order, and the record
//! types shared by the generation engine and the CLI.

pub mod error;
pub mod records;
pub mod schema;
pub mod types;

pub use error::{Error, Result};
pub use records::{Actor, Movie, MovieActorLink, Record, User};
pub use schema::TableKind;
pub use types::{Gender, Role};

/// Lowest rating a movie can carry.
pub const MIN_RATING: u8 = 0;
/// Highest rating a movie can carry.
pub const MAX_RATING: u8 = 10;

/// Date format used for every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

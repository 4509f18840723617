//! Fixture generation engine for filmseed.
//!
//! This crate writes the users, actors, movies and movie/actor link tables
//! as delimited files populated from a seeded fake-data source, and can
//! re-read a dataset to check the table invariants.

pub mod checks;
pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;
pub mod unique;

pub use checks::{VerificationReport, VerifyOptions, Violation, verify_dataset};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use faker_rs::LocaleKey;
pub use model::{GenerateOptions, GenerationReport, RowCounts, TableReport};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmseed_core::TableKind;

use crate::errors::GenerationError;
use crate::faker_rs::LocaleKey;

/// Number of rows generated per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowCounts {
    pub users: u64,
    pub actors: u64,
    pub movies: u64,
    pub movie_actor_links: u64,
}

impl Default for RowCounts {
    fn default() -> Self {
        Self {
            users: 1000,
            actors: 1000,
            movies: 500,
            movie_actor_links: 5000,
        }
    }
}

impl RowCounts {
    pub fn get(&self, table: TableKind) -> u64 {
        match table {
            TableKind::Users => self.users,
            TableKind::Actors => self.actors,
            TableKind::Movies => self.movies,
            TableKind::MovieActorLinks => self.movie_actor_links,
        }
    }
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Directory the four table files are written to. Must already exist.
    pub out_dir: PathBuf,
    pub rows: RowCounts,
    /// Field delimiter.
    pub delimiter: char,
    /// Locale of the fake-data source.
    pub locale: LocaleKey,
    /// Seed for reproducible output. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    /// Date treated as "today" for birth and release dates.
    pub reference_date: Option<NaiveDate>,
    /// Maximum draws before a unique column gives up.
    pub max_unique_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("build/data"),
            rows: RowCounts::default(),
            delimiter: ';',
            locale: LocaleKey::default(),
            seed: None,
            reference_date: None,
            max_unique_attempts: 1000,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        delimiter_byte(self.delimiter)?;

        if self.max_unique_attempts == 0 {
            return Err(GenerationError::InvalidOptions(
                "max_unique_attempts must be at least 1".to_string(),
            ));
        }

        if self.rows.movie_actor_links > 0 && (self.rows.movies == 0 || self.rows.actors == 0) {
            return Err(GenerationError::InvalidOptions(format!(
                "{} movie_actor_links rows need at least one movie and one actor (movies={}, actors={})",
                self.rows.movie_actor_links, self.rows.movies, self.rows.actors
            )));
        }

        Ok(())
    }

    pub fn table_path(&self, table: TableKind) -> PathBuf {
        self.out_dir.join(table.file_name())
    }
}

/// Convert a delimiter into the single byte the csv writer expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8, GenerationError> {
    if !delimiter.is_ascii() || matches!(delimiter, '"' | '\n' | '\r') {
        return Err(GenerationError::InvalidOptions(format!(
            "delimiter {delimiter:?} must be a single ASCII character other than a quote or line break"
        )));
    }
    Ok(delimiter as u8)
}

/// Summary of a generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: TableKind,
    pub file: PathBuf,
    pub rows_requested: u64,
    pub rows_generated: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    /// Seed the run actually used, so it can be replayed with `seed`.
    pub seed: u64,
    pub locale: LocaleKey,
    pub delimiter: char,
    pub reference_date: NaiveDate,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(
        run_id: String,
        seed: u64,
        options: &GenerateOptions,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            run_id,
            seed,
            locale: options.locale,
            delimiter: options.delimiter,
            reference_date,
            tables: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn table(&self, table: TableKind) -> Option<&TableReport> {
        self.tables.iter().find(|report| report.table == table)
    }

    /// Write the report as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<(), GenerationError> {
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}

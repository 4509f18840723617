use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use filmseed_core::{Record, TableKind};

use crate::errors::GenerationError;
use crate::faker_rs::FakeSource;
use crate::generators::{generate_actors, generate_links, generate_movies, generate_users};
use crate::model::{GenerateOptions, GenerationReport, TableReport, delimiter_byte};
use crate::output::csv::{WriteSummary, write_table_csv};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for writing the four fixture tables.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.options.validate()?;

        let out_dir = self.options.out_dir.clone();
        if !out_dir.is_dir() {
            return Err(GenerationError::MissingOutputDir(out_dir));
        }

        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self
            .options
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        let reference_date = self
            .options
            .reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let mut report = GenerationReport::new(run_id.clone(), seed, &self.options, reference_date);

        info!(
            run_id = %run_id,
            out_dir = %out_dir.display(),
            seed,
            locale = %self.options.locale,
            "generation started"
        );

        for table in TableKind::all() {
            let result = self.generate_table(table, seed, reference_date);
            match result {
                Ok(table_report) => {
                    report.bytes_written += table_report.bytes_written;
                    report.tables.push(table_report);
                }
                Err(err) => {
                    warn!(run_id = %run_id, table = %table, error = %err, "generation failed");
                    return Err(err);
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }

    fn generate_table(
        &self,
        table: TableKind,
        seed: u64,
        reference_date: NaiveDate,
    ) -> Result<TableReport, GenerationError> {
        let table_start = Instant::now();
        let rows = self.options.rows;
        let rows_requested = rows.get(table);
        let rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, table.name()));
        let mut source = FakeSource::new(self.options.locale, reference_date, rng);

        info!(table = %table, rows = rows_requested, "generating table");

        let path = self.options.table_path(table);
        let written = match table {
            TableKind::Users => self.write(
                &path,
                generate_users(
                    rows_requested,
                    &mut source,
                    self.options.max_unique_attempts,
                ),
            )?,
            TableKind::Actors => self.write(&path, generate_actors(rows_requested, &mut source))?,
            TableKind::Movies => self.write(&path, generate_movies(rows_requested, &mut source))?,
            TableKind::MovieActorLinks => {
                let links =
                    generate_links(rows_requested, rows.movies, rows.actors, source.rng())?;
                self.write(&path, links.map(Ok))?
            }
        };
        let WriteSummary {
            rows: rows_generated,
            bytes: bytes_written,
        } = written;

        let duration_ms = table_start.elapsed().as_millis() as u64;
        info!(
            table = %table,
            rows_generated,
            bytes_written,
            duration_ms,
            "table generated"
        );

        Ok(TableReport {
            table,
            file: path,
            rows_requested,
            rows_generated,
            bytes_written,
            duration_ms,
        })
    }

    fn write<R, I>(&self, path: &Path, rows: I) -> Result<WriteSummary, GenerationError>
    where
        R: Record,
        I: IntoIterator<Item = Result<R, GenerationError>>,
    {
        let delimiter = delimiter_byte(self.options.delimiter)?;
        write_table_csv(path, delimiter, rows)
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::hash_seed;

    #[test]
    fn table_seeds_differ() {
        assert_ne!(hash_seed(7, "users"), hash_seed(7, "actors"));
        assert_eq!(hash_seed(7, "movies"), hash_seed(7, "movies"));
    }
}

//! Re-reads a generated dataset and checks it against the table invariants.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use filmseed_core::{DATE_FORMAT, Gender, MAX_RATING, MIN_RATING, Role, TableKind};

use crate::errors::GenerationError;
use crate::model::{RowCounts, delimiter_byte};

/// Options for dataset verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Row counts the dataset was generated with.
    pub rows: RowCounts,
    pub delimiter: char,
    /// Limit the number of violations kept per table.
    pub max_violations_per_table: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            rows: RowCounts::default(),
            delimiter: ';',
            max_violations_per_table: 50,
        }
    }
}

/// Structured violation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub table: TableKind,
    /// 1-based line number, absent for file-level violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationReport {
    pub rows_checked: BTreeMap<TableKind, u64>,
    pub violations: Vec<Violation>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations_with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.code == code)
    }
}

/// Check every table file in `dir`.
pub fn verify_dataset(
    dir: &Path,
    options: &VerifyOptions,
) -> Result<VerificationReport, GenerationError> {
    let delimiter = delimiter_byte(options.delimiter)?;
    let mut report = VerificationReport::default();

    for table in TableKind::all() {
        let path = dir.join(table.file_name());
        if !path.is_file() {
            report.violations.push(Violation {
                code: "missing_file".to_string(),
                table,
                line: None,
                message: format!("dataset file not found: {}", path.display()),
            });
            continue;
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .flexible(true)
            .from_path(&path)?;

        let mut checker = TableChecker::new(table, options);
        for record in reader.records() {
            checker.check(&record?);
        }

        let (rows, violations) = checker.finish();
        report.rows_checked.insert(table, rows);
        report.violations.extend(violations);
    }

    Ok(report)
}

struct TableChecker<'a> {
    table: TableKind,
    options: &'a VerifyOptions,
    line: u64,
    emails: HashSet<String>,
    violations: Vec<Violation>,
}

impl<'a> TableChecker<'a> {
    fn new(table: TableKind, options: &'a VerifyOptions) -> Self {
        Self {
            table,
            options,
            line: 0,
            emails: HashSet::new(),
            violations: Vec::new(),
        }
    }

    fn check(&mut self, record: &csv::StringRecord) {
        self.line += 1;

        let expected = self.table.columns().len();
        if record.len() != expected {
            self.push(
                "column_count",
                format!("expected {expected} fields, found {}", record.len()),
            );
            return;
        }

        match record[0].parse::<u64>() {
            Ok(id) if id == self.line => {}
            _ => self.push(
                "id_sequence",
                format!("expected id {}, found '{}'", self.line, &record[0]),
            ),
        }

        match self.table {
            TableKind::Users => {
                let email = &record[1];
                if !self.emails.insert(email.to_string()) {
                    self.push("duplicate_email", format!("email '{email}' repeats"));
                }
                if Role::parse(&record[3]).is_err() {
                    self.push("unknown_role", format!("unknown role '{}'", &record[3]));
                }
            }
            TableKind::Actors => {
                if Gender::parse(&record[3]).is_err() {
                    self.push("unknown_gender", format!("unknown gender '{}'", &record[3]));
                }
                self.check_date(&record[4]);
            }
            TableKind::Movies => {
                self.check_date(&record[3]);
                match record[4].parse::<u8>() {
                    Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => {}
                    _ => self.push(
                        "rating_out_of_range",
                        format!(
                            "rating '{}' is not an integer in [{MIN_RATING}, {MAX_RATING}]",
                            &record[4]
                        ),
                    ),
                }
            }
            TableKind::MovieActorLinks => {
                let rows = self.options.rows;
                self.check_reference("movie_ref_out_of_range", &record[1], rows.movies);
                self.check_reference("actor_ref_out_of_range", &record[2], rows.actors);
            }
        }
    }

    fn check_date(&mut self, value: &str) {
        if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
            self.push("invalid_date", format!("'{value}' is not a {DATE_FORMAT} date"));
        }
    }

    fn check_reference(&mut self, code: &str, value: &str, max: u64) {
        match value.parse::<u64>() {
            Ok(id) if (1..=max).contains(&id) => {}
            _ => self.push(code, format!("reference '{value}' outside [1, {max}]")),
        }
    }

    fn push(&mut self, code: &str, message: String) {
        if self.violations.len() >= self.options.max_violations_per_table {
            return;
        }
        self.violations.push(Violation {
            code: code.to_string(),
            table: self.table,
            line: Some(self.line),
            message,
        });
    }

    fn finish(mut self) -> (u64, Vec<Violation>) {
        let expected = self.options.rows.get(self.table);
        if self.line != expected {
            self.violations.push(Violation {
                code: "row_count".to_string(),
                table: self.table,
                line: None,
                message: format!("expected {expected} rows, found {}", self.line),
            });
        }
        (self.line, self.violations)
    }
}

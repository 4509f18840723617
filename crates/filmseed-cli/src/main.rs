mod logging;
mod settings;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use filmseed_generate::{
    GenerateOptions, GenerationEngine, GenerationError, LocaleKey, RowCounts, VerifyOptions,
    verify_dataset,
};
use thiserror::Error;

use logging::init_logging;
use settings::load_settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigFormat(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("dataset has {0} violation(s)")]
    Verification(usize),
}

#[derive(Parser, Debug)]
#[command(name = "filmseed", version, about = "Fixture data generator for the movie catalog")]
struct Cli {
    /// TOML settings file. Flags override its values.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write users, actors, movies and movie/actor link files.
    Generate(GenerateArgs),
    /// Check a generated dataset against the table invariants.
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Default)]
struct RowArgs {
    /// Number of user rows.
    #[arg(long)]
    users: Option<u64>,
    /// Number of actor rows.
    #[arg(long)]
    actors: Option<u64>,
    /// Number of movie rows.
    #[arg(long)]
    movies: Option<u64>,
    /// Number of movie/actor link rows.
    #[arg(long)]
    links: Option<u64>,
}

impl RowArgs {
    fn apply(&self, rows: &mut RowCounts) {
        if let Some(users) = self.users {
            rows.users = users;
        }
        if let Some(actors) = self.actors {
            rows.actors = actors;
        }
        if let Some(movies) = self.movies {
            rows.movies = movies;
        }
        if let Some(links) = self.links {
            rows.movie_actor_links = links;
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Existing directory the files are written to.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    #[command(flatten)]
    rows: RowArgs,
    /// Field delimiter.
    #[arg(long)]
    delimiter: Option<char>,
    /// Fake-data locale (en_US or pt_BR).
    #[arg(long)]
    locale: Option<LocaleKey>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Date used as "today" (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    reference_date: Option<NaiveDate>,
    /// Attempts before a unique column gives up.
    #[arg(long)]
    max_unique_attempts: Option<u32>,
    /// Write the generation report as JSON to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

impl GenerateArgs {
    fn apply(&self, options: &mut GenerateOptions) {
        if let Some(out_dir) = &self.out_dir {
            options.out_dir = out_dir.clone();
        }
        self.rows.apply(&mut options.rows);
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(locale) = self.locale {
            options.locale = locale;
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        if self.reference_date.is_some() {
            options.reference_date = self.reference_date;
        }
        if let Some(attempts) = self.max_unique_attempts {
            options.max_unique_attempts = attempts;
        }
    }
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Dataset directory. Defaults to the configured output directory.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,
    #[command(flatten)]
    rows: RowArgs,
    /// Field delimiter.
    #[arg(long)]
    delimiter: Option<char>,
    /// Maximum violations listed per table.
    #[arg(long, default_value_t = 50)]
    max_violations: usize,
    /// Print the verification report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(&settings.logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, settings.generate),
        Command::Verify(args) => run_verify(args, settings.generate),
    }
}

fn run_generate(args: GenerateArgs, mut options: GenerateOptions) -> Result<(), CliError> {
    args.apply(&mut options);

    let result = GenerationEngine::new(options).run()?;
    if let Some(path) = &args.report {
        result.report.write(path)?;
        tracing::info!(path = %path.display(), "report written");
    }

    println!("out_dir={}", result.out_dir.display());
    println!("seed={}", result.report.seed);
    for table in &result.report.tables {
        println!("{}={}", table.table, table.rows_generated);
    }
    Ok(())
}

fn run_verify(args: VerifyArgs, mut options: GenerateOptions) -> Result<(), CliError> {
    args.rows.apply(&mut options.rows);
    let dir = args.dir.clone().unwrap_or(options.out_dir);
    let verify = VerifyOptions {
        rows: options.rows,
        delimiter: args.delimiter.unwrap_or(options.delimiter),
        max_violations_per_table: args.max_violations,
    };

    let report = verify_dataset(&dir, &verify)?;
    tracing::info!(
        dir = %dir.display(),
        violations = report.violations.len(),
        "verification finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for violation in &report.violations {
            let line = violation
                .line
                .map(|line| format!(":{line}"))
                .unwrap_or_default();
            println!(
                "{}{} [{}] {}",
                violation.table, line, violation.code, violation.message
            );
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::Verification(report.violations.len()))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from([
            "filmseed",
            "generate",
            "--out-dir",
            "out",
            "--movies",
            "3",
            "--links",
            "9",
            "--delimiter",
            ",",
            "--locale",
            "pt_BR",
            "--reference-date",
            "2024-06-15",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };

        let mut options = GenerateOptions {
            seed: Some(5),
            ..GenerateOptions::default()
        };
        args.apply(&mut options);

        assert_eq!(options.out_dir, PathBuf::from("out"));
        assert_eq!(options.rows.movies, 3);
        assert_eq!(options.rows.movie_actor_links, 9);
        assert_eq!(options.rows.users, 1000);
        assert_eq!(options.delimiter, ',');
        assert_eq!(options.locale, LocaleKey::PtBr);
        assert_eq!(options.seed, Some(5));
        assert_eq!(options.reference_date, NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn generate_then_verify_round_trip() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("filmseed_cli_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let dir_arg = dir.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "filmseed", "generate", "--out-dir", &dir_arg, "--users", "5", "--actors", "4",
            "--movies", "3", "--links", "10", "--seed", "1",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        run_generate(args, GenerateOptions::default()).expect("generate");

        let cli = Cli::parse_from([
            "filmseed", "verify", "--dir", &dir_arg, "--users", "5", "--actors", "4",
            "--movies", "3", "--links", "10",
        ]);
        let Command::Verify(args) = cli.command else {
            panic!("expected verify command");
        };
        run_verify(args, GenerateOptions::default()).expect("verify");

        let cli = Cli::parse_from([
            "filmseed", "verify", "--dir", &dir_arg, "--links", "11",
            "--users", "5", "--actors", "4", "--movies", "3",
        ]);
        let Command::Verify(args) = cli.command else {
            panic!("expected verify command");
        };
        let result = run_verify(args, GenerateOptions::default());
        assert!(matches!(result, Err(CliError::Verification(1))));
    }

    #[test]
    fn flags_fix_an_incomplete_config() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("filmseed_cli_config_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let config_path = dir.join("filmseed.toml");
        std::fs::write(&config_path, "[generate.rows]\nactors = 0\n").expect("write config");
        let config_arg = config_path.to_string_lossy().to_string();
        let dir_arg = dir.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "filmseed", "--config", &config_arg, "generate", "--out-dir", &dir_arg,
            "--actors", "5", "--users", "3", "--movies", "2", "--links", "4",
        ]);
        let settings = load_settings(cli.config.as_deref()).expect("load settings");
        assert_eq!(settings.generate.rows.actors, 0);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };

        run_generate(args, settings.generate).expect("generate with flag overrides");

        let links = std::fs::read_to_string(dir.join("movie_actor_links.csv")).expect("read links");
        assert_eq!(links.lines().count(), 4);
        for line in links.lines() {
            let actor_id: u64 = line
                .rsplit(';')
                .next()
                .and_then(|field| field.parse().ok())
                .expect("actor id");
            assert!((1..=5).contains(&actor_id));
        }
    }
}

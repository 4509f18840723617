use std::path::Path;

use serde::{Deserialize, Serialize};

use filmseed_generate::GenerateOptions;

use crate::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `filmseed_generate=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Contents of a `filmseed.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generate: GenerateOptions,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Parse settings. Options are validated after flags are applied.
    pub fn parse(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }
}

/// Load settings from `path`, or fall back to defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?;
            Settings::parse(&content)
        }
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use filmseed_generate::LocaleKey;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::parse(
            r#"
            [generate]
            out_dir = "fixtures"
            delimiter = ","
            locale = "pt_BR"
            seed = 7
            reference_date = "2024-06-15"

            [generate.rows]
            movies = 20

            [logging]
            format = "json"
            "#,
        )
        .expect("parse settings");

        let generate = &settings.generate;
        assert_eq!(generate.out_dir, Path::new("fixtures"));
        assert_eq!(generate.delimiter, ',');
        assert_eq!(generate.locale, LocaleKey::PtBr);
        assert_eq!(generate.seed, Some(7));
        assert_eq!(generate.reference_date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(generate.rows.movies, 20);
        assert_eq!(generate.rows.users, 1000);
        assert_eq!(generate.rows.movie_actor_links, 5000);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn empty_file_is_default() {
        let settings = Settings::parse("").expect("parse empty settings");
        assert_eq!(settings.generate.delimiter, ';');
        assert_eq!(settings.generate.out_dir, Path::new("build/data"));
        assert_eq!(settings.logging.format, LogFormat::Text);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Settings::parse("[generate]\nlocale = \"fr_FR\"\n"),
            Err(CliError::ConfigFormat(_))
        ));
    }

    #[test]
    fn incomplete_rows_parse_without_validation() {
        let settings =
            Settings::parse("[generate.rows]\nactors = 0\n").expect("parse settings");
        assert_eq!(settings.generate.rows.actors, 0);
        assert!(settings.generate.validate().is_err());
    }
}

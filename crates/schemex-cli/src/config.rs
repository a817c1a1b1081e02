//! CLI configuration
//!
//! Values resolve in order: command-line flags, then `schemex.toml`, then
//! built-in defaults.

use schemex_core::errors::{ExError, ExErrorKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "schemex.toml";

/// Corpus root used when neither flag nor file names one
pub const DEFAULT_CORPUS_ROOT: &str = "schemas";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Contents of a `schemex.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub corpus_root: Option<PathBuf>,
    pub max_concurrency: Option<usize>,
    pub log_format: Option<LogFormat>,
}

/// Values given on the command line
#[derive(Debug, Default)]
pub struct Overrides {
    pub corpus_root: Option<PathBuf>,
    pub log_json: bool,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub corpus_root: PathBuf,
    /// `None` leaves comparisons unbounded
    pub max_concurrency: Option<usize>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let log_format = if overrides.log_json {
            LogFormat::Json
        } else {
            file.log_format.unwrap_or_default()
        };
        Self {
            corpus_root: overrides
                .corpus_root
                .or(file.corpus_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_ROOT)),
            max_concurrency: file.max_concurrency,
            log_format,
        }
    }
}

/// Parse a config document
///
/// # Errors
///
/// `Config` when the text is not valid TOML or has unknown keys.
pub fn parse_config(text: &str) -> Result<FileConfig, ExError> {
    toml::from_str(text).map_err(|e| {
        ExError::new(ExErrorKind::Config)
            .with_op("load_config")
            .with_message(e.to_string())
    })
}

/// Load the config file.
///
/// An explicit path must exist. Without one, `./schemex.toml` is read when
/// present and defaults apply otherwise.
///
/// # Errors
///
/// `Config` when the file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, ExError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(FileConfig::default());
            }
            candidate
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|e| {
        ExError::new(ExErrorKind::Config)
            .with_op("load_config")
            .with_message(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(FileConfig::default(), Overrides::default());
        assert_eq!(settings.corpus_root, PathBuf::from("schemas"));
        assert_eq!(settings.max_concurrency, None);
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_file_values_apply() {
        let file = parse_config(
            r#"
            corpus_root = "public/schemas"
            max_concurrency = 8
            log_format = "json"
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(file, Overrides::default());
        assert_eq!(settings.corpus_root, PathBuf::from("public/schemas"));
        assert_eq!(settings.max_concurrency, Some(8));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_flags_override_file() {
        let file = parse_config(r#"corpus_root = "from-file""#).unwrap();
        let settings = Settings::resolve(
            file,
            Overrides {
                corpus_root: Some(PathBuf::from("from-flag")),
                log_json: true,
            },
        );
        assert_eq!(settings.corpus_root, PathBuf::from("from-flag"));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = parse_config("corpus = 1").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/schemex.toml"))).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }
}

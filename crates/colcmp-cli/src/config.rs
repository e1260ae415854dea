//! Layered settings for the compare command
//!
//! Built-in defaults, then a TOML file (`--config`, or `colcmp.toml` in the
//! working directory when present), then command-line flags.

use colcmp_core::errors::{ExError, ExErrorKind};
use colcmp_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "colcmp.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-layout text report
    #[default]
    Text,
    /// JSON object mapping table name to its unique columns
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogProfile {
    /// No log output
    #[default]
    Off,
    /// Human-readable logs on stderr
    Development,
    /// JSON logs on stderr
    Production,
}

impl LogProfile {
    pub fn profile(&self) -> Option<Profile> {
        match self {
            LogProfile::Off => None,
            LogProfile::Development => Some(Profile::Development),
            LogProfile::Production => Some(Profile::Production),
        }
    }
}

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub delimiter: Option<String>,
    pub format: Option<OutputFormat>,
    pub quiet: Option<bool>,
    pub names_from_files: Option<bool>,
    pub log_profile: Option<LogProfile>,
}

impl FileConfig {
    /// Parse config text
    pub fn parse(text: &str, path: &Path) -> Result<Self, ExError> {
        toml::from_str(text).map_err(|e| {
            ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_path(path.display().to_string())
                .with_message(e.to_string())
        })
    }

    /// Load the explicit config file, or the default one if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ExError> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_path(path.display().to_string())
                .with_message(e.to_string())
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::parse(&text, &path)
    }
}

/// Flag values that can override the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub delimiter: Option<String>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub names_from_files: bool,
    pub log_profile: Option<LogProfile>,
}

/// Effective settings after layering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub delimiter: u8,
    pub format: OutputFormat,
    pub quiet: bool,
    pub names_from_files: bool,
    pub log_profile: LogProfile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: b',',
            format: OutputFormat::Text,
            quiet: false,
            names_from_files: false,
            log_profile: LogProfile::Off,
        }
    }
}

impl Settings {
    /// Layer `file` then `flags` over the defaults.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the delimiter is not a single ASCII character.
    pub fn resolve(file: FileConfig, flags: &Overrides) -> Result<Self, ExError> {
        let defaults = Self::default();

        let delimiter = match flags.delimiter.as_deref().or(file.delimiter.as_deref()) {
            Some(s) => delimiter_byte(s)?,
            None => defaults.delimiter,
        };

        Ok(Self {
            delimiter,
            format: flags.format.or(file.format).unwrap_or(defaults.format),
            quiet: flags.quiet || file.quiet.unwrap_or(defaults.quiet),
            names_from_files: flags.names_from_files
                || file.names_from_files.unwrap_or(defaults.names_from_files),
            log_profile: flags
                .log_profile
                .or(file.log_profile)
                .unwrap_or(defaults.log_profile),
        })
    }
}

fn delimiter_byte(s: &str) -> Result<u8, ExError> {
    // `\t` as typed on a command line means tab
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ExError::new(ExErrorKind::InvalidArgument)
            .with_op("resolve_settings")
            .with_message(format!(
                "delimiter must be a single ASCII character, got {:?}",
                s
            ))),
    }
}

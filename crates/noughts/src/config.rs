//! Player-facing settings, loaded from an optional TOML file.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display and session settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Symbol drawn for the human's marker.
    player_one_symbol: char,

    /// Symbol drawn for the computer's marker.
    player_two_symbol: char,

    /// Symbol drawn for an empty cell.
    empty_symbol: char,

    /// File receiving tracing output (the terminal belongs to the UI).
    log_file: PathBuf,

    /// Start with cell numbers shown instead of markers.
    number_view: bool,

    /// Pause before the computer plays, in milliseconds.
    computer_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one_symbol: 'X',
            player_two_symbol: 'O',
            empty_symbol: ' ',
            log_file: PathBuf::from("noughts.log"),
            number_view: false,
            computer_delay_ms: 400,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        settings.validate()?;
        info!("Settings loaded successfully");
        Ok(settings)
    }

    /// Resolves settings from the command line: file first, then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        if cli.number_view {
            settings.number_view = true;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the marker symbols can be told apart on screen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, symbol) in [
            ("player_one_symbol", self.player_one_symbol),
            ("player_two_symbol", self.player_two_symbol),
        ] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::new(format!(
                    "{} must be a visible character, got {:?}",
                    name, symbol
                )));
            }
        }

        if self.empty_symbol.is_control() {
            return Err(ConfigError::new(format!(
                "empty_symbol must be printable, got {:?}",
                self.empty_symbol
            )));
        }

        if self.player_one_symbol == self.player_two_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {:?}",
                self.player_one_symbol
            )));
        }

        if self.empty_symbol == self.player_one_symbol
            || self.empty_symbol == self.player_two_symbol
        {
            return Err(ConfigError::new(format!(
                "empty_symbol {:?} collides with a player symbol",
                self.empty_symbol
            )));
        }

        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let file = write_config("player_one_symbol = \"@\"\ncomputer_delay_ms = 0\n");
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(*settings.player_one_symbol(), '@');
        assert_eq!(*settings.player_two_symbol(), 'O');
        assert_eq!(*settings.computer_delay_ms(), 0);
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let file = write_config("player_one_symbol = \"O\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Both players"));
    }

    #[test]
    fn test_multi_character_symbol_is_a_parse_error() {
        let file = write_config("player_two_symbol = \"OO\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_reports_location() {
        let err = Settings::from_file("/nonexistent/noughts.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("log_file = \"from_file.log\"\n");
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            log_file: Some(PathBuf::from("from_cli.log")),
            number_view: true,
        };
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.log_file(), &PathBuf::from("from_cli.log"));
        assert!(*settings.number_view());
    }
}

//! Configuration loading and typed config structures for the Podium
//! leaderboard.
//!
//! The canonical configuration lives in `podium-config.yaml` at the project
//! root. Every field has a default, so an empty file, a partial file, or no
//! file at all yields a usable configuration.

use std::path::Path;

use serde::Deserialize;

use podium_ledger::{DEFAULT_LABEL, NamePolicy};

/// Environment variable that overrides `board.default_label`.
pub const DEFAULT_LABEL_ENV: &str = "PODIUM_DEFAULT_LABEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `podium-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PodiumConfig {
    /// Leaderboard settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Player session settings.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PodiumConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `PODIUM_DEFAULT_LABEL` overrides `board.default_label` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.board.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Leaderboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Label recorded for games finished without a player name.
    #[serde(default = "default_label")]
    pub default_label: String,

    /// Whether whitespace-only names count as blank.
    #[serde(default = "default_true")]
    pub trim_blank: bool,

    /// Number of standings shown on the board.
    #[serde(default = "default_board_size")]
    pub size: usize,
}

impl BoardConfig {
    /// Return the name policy described by this configuration.
    pub fn name_policy(&self) -> NamePolicy {
        NamePolicy::new(self.default_label.clone(), self.trim_blank)
    }

    /// Override the default label with `PODIUM_DEFAULT_LABEL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_with(|key| std::env::var(key).ok());
    }

    /// Override the default label with whatever `lookup` returns for
    /// `PODIUM_DEFAULT_LABEL`.
    pub fn apply_overrides_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(DEFAULT_LABEL_ENV) {
            self.default_label = val;
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_label: default_label(),
            trim_blank: true,
            size: default_board_size(),
        }
    }
}

/// Player session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerConfig {
    /// Player name in effect before the host reports a rename.
    #[serde(default)]
    pub initial_name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_label() -> String {
    DEFAULT_LABEL.to_owned()
}

const fn default_true() -> bool {
    true
}

const fn default_board_size() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_original_board() {
        let config = PodiumConfig::default();
        assert_eq!(config.board.default_label, "Anonymous");
        assert!(config.board.trim_blank);
        assert_eq!(config.board.size, 3);
        assert_eq!(config.player.initial_name, "");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
board:
  default_label: "Guest"
  trim_blank: false
  size: 5

player:
  initial_name: "Alice"

logging:
  level: "debug"
  json: true
"#;
        let config = PodiumConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.board.default_label, "Guest");
        assert!(!config.board.trim_blank);
        assert_eq!(config.board.size, 5);
        assert_eq!(config.player.initial_name, "Alice");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_partial_yaml_uses_defaults() {
        let yaml = r"
board:
  size: 10
";
        let config = PodiumConfig::parse(yaml).unwrap_or_default();
        assert_eq!(config.board.size, 10);
        assert_eq!(config.board.default_label, "Anonymous");
        assert!(config.board.trim_blank);
    }

    #[test]
    fn parse_empty_yaml_is_default() {
        let config = PodiumConfig::parse("");
        assert_eq!(config.ok(), Some(PodiumConfig::default()));
    }

    #[test]
    fn parse_invalid_yaml_fails() {
        let result = PodiumConfig::parse("board: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PodiumConfig::from_file(Path::new("does-not-exist/podium-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn override_replaces_default_label() {
        let mut board = BoardConfig::default();
        board.apply_overrides_with(|key| (key == DEFAULT_LABEL_ENV).then(|| "Stranger".to_owned()));
        assert_eq!(board.default_label, "Stranger");
        assert_eq!(board.name_policy().label(""), "Stranger");
    }

    #[test]
    fn missing_override_keeps_configured_label() {
        let mut board = BoardConfig {
            default_label: "Guest".to_owned(),
            ..BoardConfig::default()
        };
        board.apply_overrides_with(|_| None);
        assert_eq!(board.default_label, "Guest");
        assert!(board.trim_blank);
        assert_eq!(board.size, 3);
    }

    #[test]
    fn name_policy_follows_board_config() {
        let board = BoardConfig {
            default_label: "Nobody".to_owned(),
            trim_blank: false,
            size: 3,
        };
        let policy = board.name_policy();
        assert_eq!(policy.label(""), "Nobody");
        assert_eq!(policy.label(" "), " ");
    }
}

//! Lexer configuration.
//!
//! The defaults reproduce the classic behaviour. A TOML file can override
//! them:
//!
//! ```toml
//! unterminated_strings = "extend-to-line-end"
//! case_insensitive_remarks = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "basic-lex.toml";

/// What to do with a `"` that has no closing quote on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedStringPolicy {
    /// The lone quote becomes a one-character Unknown token and scanning
    /// resumes right after it.
    #[default]
    Reject,
    /// The quote and the rest of the line (minus trailing whitespace) become
    /// a String token, and a warning is reported.
    ExtendToLineEnd,
}

/// Tunable lexer behaviour.
///
/// # Examples
///
/// ```
/// use basic_lex::{LexerConfig, UnterminatedStringPolicy};
///
/// let config = LexerConfig::from_toml_str("unterminated_strings = \"extend-to-line-end\"").unwrap();
/// assert_eq!(config.unterminated_strings, UnterminatedStringPolicy::ExtendToLineEnd);
/// assert!(!config.case_insensitive_remarks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Handling of strings without a closing quote.
    #[serde(default)]
    pub unterminated_strings: UnterminatedStringPolicy,

    /// Whether `rem`/`Rem` start a comment like `REM` does.
    #[serde(default)]
    pub case_insensitive_remarks: bool,
}

impl LexerConfig {
    /// Returns a copy with the given unterminated-string policy.
    pub fn with_unterminated_strings(mut self, policy: UnterminatedStringPolicy) -> Self {
        self.unterminated_strings = policy;
        self
    }

    /// Returns a copy with case-insensitive comment markers switched on or off.
    pub fn with_case_insensitive_remarks(mut self, enabled: bool) -> Self {
        self.case_insensitive_remarks = enabled;
        self
    }

    /// Parses a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded lexer configuration from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

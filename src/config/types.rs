//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emitter::{guard_macro_for, GuardStyle, DEFAULT_TABLE_NAME};
use crate::error::{BakeError, BakeResult};
use crate::key::{is_identifier, is_key_char, NamePolicy, DEFAULT_JOINER, DEFAULT_PREFIX};
use crate::literal::{validate_delimiter, LiteralStrategy, DEFAULT_DELIMITER};
use crate::walker::build_excludes;

use super::loader::{self, ConfigWarning};

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Gitignore-style globs, relative to `input`
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub follow_links: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            exclude: Vec::new(),
            follow_links: false,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("src/std")
}

fn default_output() -> PathBuf {
    PathBuf::from("src/include/bake.hpp")
}

/// Key derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_joiner")]
    pub joiner: String,

    #[serde(default)]
    pub names: NamePolicy,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            joiner: default_joiner(),
            names: NamePolicy::default(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_joiner() -> String {
    DEFAULT_JOINER.to_string()
}

/// Literal rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralConfig {
    #[serde(default)]
    pub strategy: LiteralStrategy,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            strategy: LiteralStrategy::default(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Header layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default)]
    pub guard: GuardStyle,

    /// Defaults to a name derived from the output file
    #[serde(default)]
    pub guard_macro: Option<String>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            guard: GuardStyle::default(),
            guard_macro: None,
        }
    }
}

fn default_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub literal: LiteralConfig,

    #[serde(default)]
    pub header: HeaderConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BakeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BakeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (STDBAKE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides_from(self, |key| std::env::var(key).ok())
    }

    /// Include-guard macro: explicit, or derived from the output file name
    pub fn guard_macro(&self) -> String {
        self.header
            .guard_macro
            .clone()
            .unwrap_or_else(|| guard_macro_for(&self.paths.output))
    }

    /// Reject values that would produce an uncompilable header.
    ///
    /// `source` names where the configuration came from, for error messages.
    pub fn validate(&self, source: &Path) -> BakeResult<()> {
        let invalid = |message: String| BakeError::InvalidConfig {
            file: source.to_path_buf(),
            message,
        };

        if let Some(bad) = self.keys.prefix.chars().find(|c| !is_key_char(*c)) {
            return Err(invalid(format!(
                "keys.prefix '{}' contains {:?}; only letters, digits and '_' are allowed",
                self.keys.prefix, bad
            )));
        }
        if self.keys.joiner.is_empty() {
            return Err(invalid("keys.joiner must not be empty".to_string()));
        }
        if let Some(bad) = self.keys.joiner.chars().find(|c| !is_key_char(*c)) {
            return Err(invalid(format!(
                "keys.joiner '{}' contains {:?}; only letters, digits and '_' are allowed",
                self.keys.joiner, bad
            )));
        }
        validate_delimiter(&self.literal.delimiter)
            .map_err(|e| invalid(format!("literal.{}", e)))?;
        if !is_identifier(&self.header.table) {
            return Err(invalid(format!(
                "header.table '{}' is not a valid C++ identifier",
                self.header.table
            )));
        }
        let guard = self.guard_macro();
        if self.header.guard == GuardStyle::Macro && !is_identifier(&guard) {
            return Err(invalid(format!(
                "header.guard_macro '{}' is not a valid C++ identifier",
                guard
            )));
        }
        build_excludes(&self.paths.input, &self.paths.exclude)
            .map_err(invalid)?;

        Ok(())
    }
}

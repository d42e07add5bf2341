//! Configuration module for stdbake
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STDBAKE_*)
//! 3. Config file (`--config`, or `./stdbake.toml` when present)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{discover, with_env_overrides_from, ConfigWarning, DEFAULT_CONFIG_FILE};
pub use types::{Config, HeaderConfig, KeysConfig, LiteralConfig, PathsConfig};

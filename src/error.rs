//! Error types for stdbake
//!
//! Every variant is fatal: a run either produces a complete artifact or
//! leaves the destination untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stdbake operations
pub type BakeResult<T> = Result<T, BakeError>;

/// Main error type for stdbake operations
#[derive(Error, Debug)]
pub enum BakeError {
    /// Input root is missing or is not a directory
    #[error("input directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// A discovered asset (or a directory on the way to it) could not be read as text
    #[error("failed to read asset {path}: {message}")]
    AssetReadFailure { path: PathBuf, message: String },

    /// Two distinct assets derive the same key
    #[error("duplicate key '{key}': {first} and {second} both map to it")]
    DuplicateKey {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A relative path cannot be turned into a valid key under the name policy
    #[error("invalid asset name {path}: {reason}")]
    InvalidAssetName { path: PathBuf, reason: String },

    /// Asset content contains the raw-literal terminator
    #[error("asset {path} contains the raw string terminator '{terminator}'; choose another delimiter or use strategy = \"escaped\"")]
    UnsafeDelimiterCollision { path: PathBuf, terminator: String },

    /// Asset content cannot be represented by the chosen literal form
    #[error("asset {path} cannot be embedded: {reason}")]
    UnsupportedContent { path: PathBuf, reason: String },

    /// Destination could not be created, written or renamed into place
    #[error("failed to write {path}: {message}")]
    OutputWriteFailure { path: PathBuf, message: String },

    /// Configuration value rejected during validation or parsing
    #[error("invalid configuration {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BakeError {
    /// The file this error is about, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            BakeError::RootNotFound { path }
            | BakeError::AssetReadFailure { path, .. }
            | BakeError::InvalidAssetName { path, .. }
            | BakeError::UnsafeDelimiterCollision { path, .. }
            | BakeError::UnsupportedContent { path, .. }
            | BakeError::OutputWriteFailure { path, .. } => Some(path),
            BakeError::DuplicateKey { second, .. } => Some(second),
            BakeError::InvalidConfig { file, .. } => Some(file),
            BakeError::Io(_) => None,
        }
    }

    /// Short machine-readable name, used for JSON error events.
    pub fn kind(&self) -> &'static str {
        match self {
            BakeError::RootNotFound { .. } => "root_not_found",
            BakeError::AssetReadFailure { .. } => "asset_read_failure",
            BakeError::DuplicateKey { .. } => "duplicate_key",
            BakeError::InvalidAssetName { .. } => "invalid_asset_name",
            BakeError::UnsafeDelimiterCollision { .. } => "unsafe_delimiter_collision",
            BakeError::UnsupportedContent { .. } => "unsupported_content",
            BakeError::OutputWriteFailure { .. } => "output_write_failure",
            BakeError::InvalidConfig { .. } => "invalid_config",
            BakeError::Io(_) => "io",
        }
    }
}

//! stdbake - embed a directory of text files into a generated C++ header
//!
//! Walks an input directory, derives a C++-identifier key from each file's
//! relative path, and emits one header defining a map from key to file
//! content, so a compiled program can carry its standard library without
//! touching the filesystem at run time.

pub mod config;
pub mod emitter;
pub mod error;
pub mod key;
pub mod literal;
pub mod models;
pub mod pipeline;
pub mod walker;
pub mod writer;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use emitter::{GuardStyle, HeaderEmitter};
pub use error::{BakeError, BakeResult};
pub use key::{KeyDeriver, NamePolicy};
pub use literal::{LiteralRenderer, LiteralStrategy};
pub use models::{Artifact, Asset, AssetPath, EmbeddingTable};
pub use pipeline::{bake, BakeReport, Baker, CheckReport, Freshness, PlannedAsset};
pub use writer::WriteOutcome;

//! Core data models for stdbake
//!
//! - `AssetPath`: a file discovered by the walk, not yet read
//! - `Asset`: a discovered file together with its text content
//! - `EmbeddingTable`: the ordered key → asset entries of one run

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// A regular file found below the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    /// Path used for reading
    pub absolute: PathBuf,
    /// Path relative to the input root, used for key derivation
    pub relative: PathBuf,
}

impl AssetPath {
    pub fn new(absolute: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            absolute: absolute.into(),
            relative: relative.into(),
        }
    }
}

/// One input file with its content, read once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    absolute_path: PathBuf,
    relative_path: PathBuf,
    content: String,
}

impl Asset {
    pub fn new(path: AssetPath, content: impl Into<String>) -> Self {
        Self {
            absolute_path: path.absolute,
            relative_path: path.relative,
            content: content.into(),
        }
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A key and the asset it resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub key: String,
    pub asset: Asset,
}

/// All entries of one generation run, in walk order.
///
/// Keys are unique; the pipeline refuses to build a table otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddingTable {
    entries: Vec<TableEntry>,
}

impl EmbeddingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: String, asset: Asset) {
        self.entries.push(TableEntry { key, asset });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Content stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.asset.content())
    }

    /// Total bytes of embedded content
    pub fn content_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.asset.content().len()).sum()
    }
}

/// A rendered header ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// `sha256:<hex>` of the rendered content
    pub fn hash(&self) -> String {
        hash_content(self.content.as_bytes())
    }
}

/// Compute a `sha256:`-prefixed digest
pub fn hash_content(content: &[u8]) -> String {
    let hash = Sha256::digest(content);
    format!("sha256:{:x}", hash)
}

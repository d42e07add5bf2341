//! Generation pipeline
//!
//! walk → derive keys (and refuse duplicates) → read → render → write.
//!
//! Everything up to and including rendering happens in memory; the
//! destination is only touched once the whole header exists, so a failure at
//! any stage leaves the previous artifact as it was.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::emitter::HeaderEmitter;
use crate::error::{BakeError, BakeResult};
use crate::key::{KeyDeriver, KeySet};
use crate::literal::LiteralRenderer;
use crate::models::{Artifact, Asset, AssetPath, EmbeddingTable};
use crate::walker::{walk, WalkOptions};
use crate::writer::{write_if_changed, WriteOutcome};

/// A discovered file and the key it will be stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAsset {
    pub key: String,
    pub path: AssetPath,
}

/// Result of a successful `generate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeReport {
    pub assets: usize,
    pub content_bytes: usize,
    pub output: PathBuf,
    pub outcome: WriteOutcome,
    pub hash: String,
}

/// How the artifact on disk compares to a fresh render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale { existing: String },
    Missing,
}

/// Result of a `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub assets: usize,
    pub artifact: Artifact,
    pub freshness: Freshness,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.freshness == Freshness::UpToDate
    }
}

/// One configured generation run
#[derive(Debug, Clone)]
pub struct Baker {
    input: PathBuf,
    output: PathBuf,
    walk: WalkOptions,
    keys: KeyDeriver,
    emitter: HeaderEmitter,
}

impl Baker {
    /// Build a run from a configuration. Call `Config::validate` first.
    pub fn from_config(config: &Config) -> Self {
        let literals =
            LiteralRenderer::new(config.literal.strategy, config.literal.delimiter.clone());
        Self {
            input: config.paths.input.clone(),
            output: config.paths.output.clone(),
            walk: WalkOptions {
                exclude: config.paths.exclude.clone(),
                follow_links: config.paths.follow_links,
            },
            keys: KeyDeriver::new(
                config.keys.prefix.clone(),
                config.keys.joiner.clone(),
                config.keys.names,
            ),
            emitter: HeaderEmitter::new(
                config.header.table.clone(),
                config.header.guard,
                config.guard_macro(),
                literals,
            ),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Walk the input and derive every key, without reading any content.
    pub fn plan(&self) -> BakeResult<Vec<PlannedAsset>> {
        let paths = walk(&self.input, &self.walk)?;

        let mut seen = KeySet::new();
        let mut planned = Vec::with_capacity(paths.len());
        for path in paths {
            let key = self.keys.derive(&path.relative)?;
            seen.insert(&key, &path.relative)?;
            log::debug!("{} -> {}", path.relative.display(), key);
            planned.push(PlannedAsset { key, path });
        }

        Ok(planned)
    }

    /// Plan, then read every asset into the table.
    pub fn collect(&self) -> BakeResult<EmbeddingTable> {
        let mut table = EmbeddingTable::new();
        for planned in self.plan()? {
            log::info!("baking: {}", planned.path.absolute.display());
            let content = read_asset(&planned.path.absolute)?;
            table.push(planned.key, Asset::new(planned.path, content));
        }
        Ok(table)
    }

    /// Collect and render the header in memory.
    pub fn render(&self) -> BakeResult<(EmbeddingTable, Artifact)> {
        let table = self.collect()?;
        let content = self.emitter.emit(&table)?;
        Ok((table, Artifact::new(&self.output, content)))
    }

    /// Render and write the header (skipped when already identical).
    pub fn generate(&self) -> BakeResult<BakeReport> {
        let (table, artifact) = self.render()?;
        let outcome = write_if_changed(artifact.path(), artifact.content())?;

        Ok(BakeReport {
            assets: table.len(),
            content_bytes: table.content_bytes(),
            output: artifact.path().to_path_buf(),
            outcome,
            hash: artifact.hash(),
        })
    }

    /// Render and compare against the header on disk without writing.
    pub fn check(&self) -> BakeResult<CheckReport> {
        let (table, artifact) = self.render()?;

        let freshness = match std::fs::read(artifact.path()) {
            Ok(existing) if existing == artifact.content().as_bytes() => Freshness::UpToDate,
            Ok(existing) => Freshness::Stale {
                existing: String::from_utf8_lossy(&existing).into_owned(),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Freshness::Missing,
            Err(e) => {
                return Err(BakeError::OutputWriteFailure {
                    path: artifact.path().to_path_buf(),
                    message: format!("cannot read existing artifact: {}", e),
                })
            }
        };

        Ok(CheckReport {
            assets: table.len(),
            artifact,
            freshness,
        })
    }
}

fn read_asset(path: &Path) -> BakeResult<String> {
    let bytes = std::fs::read(path).map_err(|e| BakeError::AssetReadFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| BakeError::AssetReadFailure {
        path: path.to_path_buf(),
        message: format!("not valid UTF-8 text ({})", e.utf8_error()),
    })
}

/// Validate `config` and run a full generation.
pub fn bake(config: &Config) -> BakeResult<BakeReport> {
    config.validate(Path::new("<config>"))?;
    Baker::from_config(config).generate()
}

//! Input tree walker
//!
//! Enumerates every regular file below the input root. Hidden files and
//! `.gitignore` rules are deliberately not honoured: the standard library
//! directory is embedded as-is, minus any configured `exclude` globs.

use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;

use crate::error::{BakeError, BakeResult};
use crate::models::AssetPath;

/// Walk settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Gitignore-style globs matched against the relative path
    pub exclude: Vec<String>,
    /// Descend into symlinked directories
    pub follow_links: bool,
}

/// Build the exclude matcher, failing on an unparsable glob.
pub fn build_excludes(root: &Path, patterns: &[String]) -> Result<Gitignore, String> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        check_glob(pattern)?;
        builder
            .add_line(None, pattern)
            .map_err(|e| format!("invalid exclude pattern '{}': {}", pattern, e))?;
    }
    builder.build().map_err(|e| e.to_string())
}

/// The gitignore matcher drops globs it cannot compile, so parse each one
/// up front with the same settings.
fn check_glob(pattern: &str) -> Result<(), String> {
    let glob = pattern.strip_prefix('!').unwrap_or(pattern);
    GlobBuilder::new(glob.trim_end_matches('/'))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|_| ())
        .map_err(|e| format!("invalid exclude pattern '{}': {}", pattern, e.kind()))
}

/// Collect all regular files below `root`, sorted by relative path.
///
/// Any unreadable entry fails the whole walk.
pub fn walk(root: &Path, options: &WalkOptions) -> BakeResult<Vec<AssetPath>> {
    if !root.is_dir() {
        return Err(BakeError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let excludes = build_excludes(root, &options.exclude).map_err(|message| {
        BakeError::InvalidConfig {
            file: PathBuf::from("exclude"),
            message,
        }
    })?;

    let filter_root = root.to_path_buf();
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .filter_entry(move |entry| {
            let Ok(relative) = entry.path().strip_prefix(&filter_root) else {
                return true;
            };
            if relative.as_os_str().is_empty() {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let excluded = excludes.matched(relative, is_dir).is_ignore();
            if excluded {
                log::debug!("excluded: {}", relative.display());
            }
            !excluded
        });

    let mut found = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|err| walk_error(root, &err))?;
        if entry.depth() == 0 || !is_regular_file(&entry)? {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map_err(|_| BakeError::AssetReadFailure {
                path: path.to_path_buf(),
                message: format!("not below input directory {}", root.display()),
            })?
            .to_path_buf();

        log::trace!("found: {}", relative.display());
        found.push(AssetPath::new(path, relative));
    }

    found.sort_by_cached_key(|asset| sort_key(&asset.relative));
    log::debug!("walk of {} found {} files", root.display(), found.len());

    Ok(found)
}

fn sort_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_regular_file(entry: &ignore::DirEntry) -> BakeResult<bool> {
    match entry.file_type() {
        Some(t) if t.is_file() => Ok(true),
        // Unfollowed link: embed it when it points at a file
        Some(t) if t.is_symlink() => std::fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .map_err(|e| BakeError::AssetReadFailure {
                path: entry.path().to_path_buf(),
                message: format!("cannot resolve symlink: {}", e),
            }),
        _ => Ok(false),
    }
}

fn walk_error(root: &Path, err: &ignore::Error) -> BakeError {
    let (path, message) = describe(err);
    BakeError::AssetReadFailure {
        path: path.unwrap_or(root).to_path_buf(),
        message,
    }
}

fn describe(err: &ignore::Error) -> (Option<&Path>, String) {
    match err {
        ignore::Error::WithPath { path, err } => (Some(path.as_path()), describe(err).1),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            describe(err)
        }
        ignore::Error::Loop { child, .. } => (Some(child.as_path()), err.to_string()),
        other => (None, other.to_string()),
    }
}

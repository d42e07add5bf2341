//! Atomic artifact writer
//!
//! The header is written to a temporary file in the destination directory
//! and renamed over the destination, so readers never observe a partial
//! header and a failed run leaves the previous one in place.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{BakeError, BakeResult};

/// What happened to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Destination was created or replaced
    Written,
    /// Destination already held identical content and was left untouched
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Written => "written",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

fn write_failure(path: &Path, message: impl Into<String>) -> BakeError {
    BakeError::OutputWriteFailure {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// Temp file next to `path`, created with the mode a plain `File::create`
/// would give it (0666 less the umask) instead of tempfile's 0600.
fn temp_file_in(parent: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(parent)
}

/// Write `content` to `path` atomically (temp file + rename).
///
/// A replaced destination keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> BakeResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .map_err(|e| write_failure(path, format!("cannot create {}: {}", parent.display(), e)))?;

    let mut temp = temp_file_in(parent)
        .map_err(|e| write_failure(path, format!("cannot create temporary file: {}", e)))?;
    if let Ok(existing) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| write_failure(path, format!("cannot copy permissions: {}", e)))?;
    }
    temp.write_all(content)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| write_failure(path, e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_failure(path, format!("cannot replace destination: {}", e.error)))?;

    Ok(())
}

/// Write `content` unless `path` already holds exactly these bytes.
pub fn write_if_changed(path: &Path, content: &str) -> BakeResult<WriteOutcome> {
    if let Ok(existing) = std::fs::read(path) {
        if existing == content.as_bytes() {
            log::debug!("{} is up to date", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
    }

    atomic_write(path, content.as_bytes())?;
    Ok(WriteOutcome::Written)
}

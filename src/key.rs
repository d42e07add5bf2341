//! Key derivation
//!
//! Turns an asset's path relative to the input root into the key the consumer
//! looks the content up by: `prefix + components joined by the joiner`, with
//! every `.` inside a component replaced by the joiner as well.
//!
//! ```text
//! a/b.txt        -> std_a_b_txt
//! core/io.earl   -> std_core_io_earl
//! ```

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BakeError, BakeResult};

/// Default namespace prefix prepended to every key
pub const DEFAULT_PREFIX: &str = "std_";

/// Default replacement for path separators and dots
pub const DEFAULT_JOINER: &str = "_";

/// What to do with characters that are not legal in a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Fail the run with `InvalidAssetName`
    #[default]
    Reject,
    /// Replace each disallowed character with the joiner
    Sanitize,
}

/// `[A-Za-z0-9_]`
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when `s` is non-empty, made of key characters and does not start with a digit.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_key_char) && !starts_with_digit(s)
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Render a relative path as `/`-separated UTF-8.
///
/// Only plain components are accepted; `..`, roots and prefixes can never
/// come out of a walk below the input root.
pub fn normalize_relative(relative: &Path) -> BakeResult<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| BakeError::InvalidAssetName {
                    path: relative.to_path_buf(),
                    reason: "path is not valid UTF-8".to_string(),
                })?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(BakeError::InvalidAssetName {
                    path: relative.to_path_buf(),
                    reason: "path must be relative to the input directory".to_string(),
                })
            }
        }
    }

    if parts.is_empty() {
        return Err(BakeError::InvalidAssetName {
            path: relative.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }

    Ok(parts.join("/"))
}

/// Derives keys under one prefix/joiner/policy for a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDeriver {
    prefix: String,
    joiner: String,
    policy: NamePolicy,
}

impl Default for KeyDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_JOINER, NamePolicy::default())
    }
}

impl KeyDeriver {
    pub fn new(prefix: impl Into<String>, joiner: impl Into<String>, policy: NamePolicy) -> Self {
        Self {
            prefix: prefix.into(),
            joiner: joiner.into(),
            policy,
        }
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Derive the key for a path relative to the input root.
    pub fn derive(&self, relative: &Path) -> BakeResult<String> {
        let normalized = normalize_relative(relative)?;

        let mut key = self.prefix.clone();
        for (i, component) in normalized.split('/').enumerate() {
            if i > 0 {
                key.push_str(&self.joiner);
            }
            for c in component.chars() {
                if c == '.' {
                    key.push_str(&self.joiner);
                } else {
                    key.push(c);
                }
            }
        }

        match self.policy {
            NamePolicy::Reject => {
                if let Some(bad) = key.chars().find(|c| !is_key_char(*c)) {
                    return Err(BakeError::InvalidAssetName {
                        path: relative.to_path_buf(),
                        reason: format!(
                            "character {:?} is not allowed in key '{}' (set names = \"sanitize\" to replace it)",
                            bad, key
                        ),
                    });
                }
                if starts_with_digit(&key) {
                    return Err(BakeError::InvalidAssetName {
                        path: relative.to_path_buf(),
                        reason: format!("key '{}' starts with a digit", key),
                    });
                }
                Ok(key)
            }
            NamePolicy::Sanitize => {
                let mut sanitized = String::with_capacity(key.len());
                for c in key.chars() {
                    if is_key_char(c) {
                        sanitized.push(c);
                    } else {
                        sanitized.push_str(&self.joiner);
                    }
                }
                if starts_with_digit(&sanitized) {
                    sanitized.insert(0, '_');
                }
                Ok(sanitized)
            }
        }
    }
}

/// Tracks the keys of one run and refuses duplicates
#[derive(Debug, Default)]
pub struct KeySet {
    seen: HashMap<String, PathBuf>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` for `path`, failing if another path already owns it.
    pub fn insert(&mut self, key: &str, path: &Path) -> BakeResult<()> {
        if let Some(first) = self.seen.get(key) {
            return Err(BakeError::DuplicateKey {
                key: key.to_string(),
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }
        self.seen.insert(key.to_string(), path.to_path_buf());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

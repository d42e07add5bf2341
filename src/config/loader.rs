//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::emitter::GuardStyle;
use crate::error::{BakeError, BakeResult};
use crate::key::NamePolicy;
use crate::literal::LiteralStrategy;

use super::types::Config;

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "stdbake.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BakeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BakeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BakeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|unknown| {
            let (section, key) = match unknown.split_once('.') {
                Some((section, rest)) => {
                    (Some(section), rest.rsplit('.').next().unwrap_or(rest))
                }
                None => (None, unknown.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: locate(&content, section, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file: the explicit one, else `stdbake.toml` in `cwd` if it exists.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Apply STDBAKE_* overrides read through `get_env`.
///
/// Unrecognised enum values are reported and ignored.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(input) = get_env("STDBAKE_INPUT") {
        config.paths.input = PathBuf::from(input);
    }

    if let Some(output) = get_env("STDBAKE_OUTPUT") {
        config.paths.output = PathBuf::from(output);
    }

    if let Some(prefix) = get_env("STDBAKE_PREFIX") {
        config.keys.prefix = prefix;
    }

    if let Some(joiner) = get_env("STDBAKE_JOINER") {
        config.keys.joiner = joiner;
    }

    if let Some(strategy) = get_env("STDBAKE_STRATEGY") {
        match strategy.to_lowercase().as_str() {
            "raw" => config.literal.strategy = LiteralStrategy::Raw,
            "escaped" => config.literal.strategy = LiteralStrategy::Escaped,
            other => log::warn!("ignoring STDBAKE_STRATEGY={}: expected raw or escaped", other),
        }
    }

    if let Some(names) = get_env("STDBAKE_NAMES") {
        match names.to_lowercase().as_str() {
            "reject" => config.keys.names = NamePolicy::Reject,
            "sanitize" => config.keys.names = NamePolicy::Sanitize,
            other => log::warn!("ignoring STDBAKE_NAMES={}: expected reject or sanitize", other),
        }
    }

    if let Some(guard) = get_env("STDBAKE_GUARD") {
        match guard.to_lowercase().as_str() {
            "pragma" => config.header.guard = GuardStyle::Pragma,
            "macro" => config.header.guard = GuardStyle::Macro,
            other => log::warn!("ignoring STDBAKE_GUARD={}: expected pragma or macro", other),
        }
    }

    config
}

/// Keys accepted in each config section
const SECTIONS: &[(&str, &[&str])] = &[
    ("paths", &["input", "output", "exclude", "follow_links"]),
    ("keys", &["prefix", "joiner", "names"]),
    ("literal", &["strategy", "delimiter"]),
    ("header", &["table", "guard", "guard_macro"]),
];

/// 1-based line of `key` inside `[section]`, or of the `[key]` table header
/// when the unknown entry is itself a section.
fn locate(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = Some(name.trim());
            if section.is_none() && current == Some(key) {
                return Some(i + 1);
            }
            continue;
        }
        let assigns_key = line
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigns_key && current == section {
            return Some(i + 1);
        }
    }
    None
}

/// Closest known name at edit distance 2 or less: a key of the same section,
/// or a section name for unknown top-level entries.
fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    let candidates: Vec<&str> = match section {
        Some(name) => SECTIONS
            .iter()
            .find(|(s, _)| *s == name)
            .map(|(_, keys)| keys.to_vec())
            .unwrap_or_default(),
        None => SECTIONS.iter().map(|(s, _)| *s).collect(),
    };

    candidates
        .into_iter()
        .map(|candidate| (edit_distance(unknown, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, candidate)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substituted = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substituted.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

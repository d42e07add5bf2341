//! NDJSON output for `--json`.
//!
//! Every command writes one JSON object per line to stdout:
//! a `start` event, zero or more detail events, then `complete`
//! (or a single `error` event on failure).

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use stdbake::{BakeError, BakeReport, CheckReport, ConfigWarning, Freshness, PlannedAsset};

/// Emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub input: String,
    pub output: String,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, input: &Path, output: &Path) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            input: input.display().to_string(),
            output: output.display().to_string(),
        }
    }
}

/// One planned asset (`list`).
#[derive(Debug, Clone, Serialize)]
pub struct AssetEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub path: String,
}

impl<'a> AssetEvent<'a> {
    pub fn new(asset: &'a PlannedAsset) -> Self {
        Self {
            event: "asset",
            key: &asset.key,
            path: relative_display(&asset.path.relative),
        }
    }
}

/// Unknown key found in the config file.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub key: &'a str,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> WarningEvent<'a> {
    pub fn new(warning: &'a ConfigWarning) -> Self {
        Self {
            event: "warning",
            key: &warning.key,
            file: warning.file.display().to_string(),
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }
}

/// Emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub assets: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn listed(assets: usize) -> Self {
        Self {
            event: "complete",
            command: "list",
            success: true,
            assets,
            content_bytes: None,
            outcome: None,
            status: None,
            hash: None,
        }
    }

    pub fn generated(report: &BakeReport) -> Self {
        Self {
            event: "complete",
            command: "generate",
            success: true,
            assets: report.assets,
            content_bytes: Some(report.content_bytes),
            outcome: Some(report.outcome.as_str()),
            status: None,
            hash: Some(report.hash.clone()),
        }
    }

    pub fn checked(report: &CheckReport) -> Self {
        Self {
            event: "complete",
            command: "check",
            success: report.is_up_to_date(),
            assets: report.assets,
            content_bytes: None,
            outcome: None,
            status: Some(freshness_str(&report.freshness)),
            hash: Some(report.artifact.hash()),
        }
    }
}

/// Emitted instead of `complete` when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorEvent {
    pub fn new(err: &anyhow::Error) -> Self {
        let bake = err.downcast_ref::<BakeError>();
        Self {
            event: "error",
            kind: bake.map(BakeError::kind).unwrap_or("error"),
            message: err.to_string(),
            path: bake
                .and_then(BakeError::path)
                .map(|p| p.display().to_string()),
        }
    }
}

pub fn freshness_str(freshness: &Freshness) -> &'static str {
    match freshness {
        Freshness::UpToDate => "up_to_date",
        Freshness::Stale { .. } => "stale",
        Freshness::Missing => "missing",
    }
}

/// `/`-separated form, stable across platforms.
pub fn relative_display(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn emit_config_warnings(warnings: &[ConfigWarning]) -> io::Result<()> {
    for warning in warnings {
        emit_event(&WarningEvent::new(warning))?;
    }
    Ok(())
}

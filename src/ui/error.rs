use stdbake::BakeError;

use crate::ui::json::{emit_event, ErrorEvent};
use crate::ui::terminal::{detect_capabilities, Stream, TerminalCapabilities};
use crate::ui::theme::{colors, paint, Icon};

/// A suggested fix for errors the user can resolve with a flag or a rename.
fn hint(err: &BakeError) -> Option<&'static str> {
    match err {
        BakeError::RootNotFound { .. } => {
            Some("pass --input DIR or set paths.input in stdbake.toml")
        }
        BakeError::DuplicateKey { .. } => {
            Some("rename one of the files, or skip one with --exclude")
        }
        BakeError::InvalidAssetName { .. } => {
            Some("rename the file, or pass --names sanitize to replace invalid characters")
        }
        BakeError::UnsafeDelimiterCollision { .. } => {
            Some("pass --delimiter with a sequence the file does not contain, or --strategy escaped")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    format_error_with(err, detect_capabilities(Stream::Stderr))
}

fn format_error_with(err: &anyhow::Error, caps: TerminalCapabilities) -> String {
    let icon = paint(
        Icon::Error.render(caps.supports_unicode),
        colors::ERROR,
        caps.supports_color,
    );

    let Some(bake) = err.downcast_ref::<BakeError>() else {
        return format!("{} {:#}\n", icon, err);
    };

    let mut out = format!("{} {}\n", icon, bake);
    if let Some(hint) = hint(bake) {
        out.push_str(&format!(
            "  {} {}\n",
            paint("hint:", colors::INFO, caps.supports_color),
            hint
        ));
    }
    out
}

/// `::error file=...::message` line understood by GitHub Actions
pub fn github_actions_annotation(message: &str, file: Option<&str>) -> String {
    let file = file
        .map(|f| format!(" file={},title=stdbake", escape_workflow_property(f)))
        .unwrap_or_else(|| " title=stdbake".to_string());
    format!("::error{}::{}", file, escape_workflow_value(message))
}

fn escape_workflow_value(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Property values also reserve the `:` and `,` separators.
fn escape_workflow_property(s: &str) -> String {
    escape_workflow_value(s).replace(':', "%3A").replace(',', "%2C")
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::new(err));
        return;
    }

    let caps = detect_capabilities(Stream::Stderr);
    if caps.is_github_actions {
        let file = err
            .downcast_ref::<BakeError>()
            .and_then(BakeError::path)
            .map(|p| p.display().to_string());
        println!(
            "{}",
            github_actions_annotation(&err.to_string(), file.as_deref())
        );
    }

    eprint!("{}", format_error_with(err, caps));
}

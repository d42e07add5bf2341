use std::path::Path;

use stdbake::{BakeReport, CheckReport, ConfigWarning, Freshness, PlannedAsset, WriteOutcome};

use crate::ui::json::relative_display;
use crate::ui::terminal::{detect_capabilities, Stream, TerminalCapabilities};
use crate::ui::theme::{colors, paint, Icon};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    let caps = detect_capabilities(Stream::Stderr);
    let icon = paint(
        Icon::Warning.render(caps.supports_unicode),
        colors::WARNING,
        caps.supports_color,
    );

    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn render_generate_summary(report: &BakeReport, caps: TerminalCapabilities) -> String {
    let icon = paint(
        Icon::Success.render(caps.supports_unicode),
        colors::SUCCESS,
        caps.supports_color,
    );
    let verb = match report.outcome {
        WriteOutcome::Written => "Wrote",
        WriteOutcome::Unchanged => "Up to date:",
    };

    format!(
        "{} {} {} ({} {}, {} bytes)\n  {}\n",
        icon,
        verb,
        report.output.display(),
        report.assets,
        plural(report.assets, "file", "files"),
        report.content_bytes,
        paint(&report.hash, colors::DIM, caps.supports_color),
    )
}

pub fn render_check_result(report: &CheckReport, caps: TerminalCapabilities) -> String {
    let path = report.artifact.path().display();
    match &report.freshness {
        Freshness::UpToDate => format!(
            "{} {} is up to date ({} {})\n",
            paint(
                Icon::Success.render(caps.supports_unicode),
                colors::SUCCESS,
                caps.supports_color
            ),
            path,
            report.assets,
            plural(report.assets, "file", "files"),
        ),
        Freshness::Stale { .. } => format!(
            "{} {} is out of date; run 'stdbake generate'\n",
            paint(Icon::Error.render(caps.supports_unicode), colors::ERROR, caps.supports_color),
            path,
        ),
        Freshness::Missing => format!(
            "{} {} does not exist; run 'stdbake generate'\n",
            paint(Icon::Error.render(caps.supports_unicode), colors::ERROR, caps.supports_color),
            path,
        ),
    }
}

/// One `key <- path` line per asset, keys padded to a common width.
pub fn render_list(assets: &[PlannedAsset], caps: TerminalCapabilities) -> String {
    let width = assets.iter().map(|a| a.key.len()).max().unwrap_or(0);
    let arrow = paint(Icon::Arrow.render(caps.supports_unicode), colors::DIM, caps.supports_color);

    let mut out = String::new();
    for asset in assets {
        out.push_str(&format!(
            "{:<width$}  {}  {}\n",
            asset.key,
            arrow,
            relative_display(&asset.path.relative),
            width = width,
        ));
    }
    out
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

use similar::{ChangeTag, TextDiff};

use crate::ui::theme::{colors, paint};

/// Unified diff of a stale header against a fresh render, with hunks of
/// `context` unchanged lines around each change.
pub fn render_unified_diff(
    path: &str,
    old: &str,
    new: &str,
    context: usize,
    supports_color: bool,
) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    out.push_str(&paint(&format!("--- a/{}", path), colors::INFO, supports_color));
    out.push('\n');
    out.push_str(&paint(&format!("+++ b/{}", path), colors::INFO, supports_color));
    out.push('\n');

    for hunk in diff.unified_diff().context_radius(context).iter_hunks() {
        out.push_str(&paint(&hunk.header().to_string(), colors::DIM, supports_color));
        out.push('\n');

        for change in hunk.iter_changes() {
            let (sign, color) = match change.tag() {
                ChangeTag::Delete => ("-", colors::ERROR),
                ChangeTag::Insert => ("+", colors::SUCCESS),
                ChangeTag::Equal => (" ", colors::DIM),
            };
            let value = change.value().trim_end_matches('\n');
            out.push_str(&paint(&format!("{sign}{value}"), color, supports_color));
            out.push('\n');
        }
    }

    out
}

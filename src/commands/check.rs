use anyhow::Result;
use stdbake::{Baker, Freshness};

use crate::cli::BakeArgs;
use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::terminal::Stream;

const DIFF_CONTEXT: usize = 3;

/// Exit status is `false` when the header is missing or stale.
pub fn cmd_check(args: &BakeArgs, json: bool, quiet: bool) -> Result<bool> {
    let config = super::load_config(args, json)?;
    let baker = Baker::from_config(&config);

    if json {
        emit_event(&StartEvent::new("check", baker.input(), baker.output()))?;
    }

    let report = baker.check()?;

    if json {
        emit_event(&CompleteEvent::checked(&report))?;
        return Ok(report.is_up_to_date());
    }

    let caps = crate::ui::terminal::detect_capabilities(Stream::Stdout);
    if let Freshness::Stale { existing } = &report.freshness {
        if !quiet {
            print!(
                "{}",
                crate::ui::diff::render_unified_diff(
                    &report.artifact.path().display().to_string(),
                    existing,
                    report.artifact.content(),
                    DIFF_CONTEXT,
                    caps.supports_color,
                )
            );
        }
    }

    if !quiet || !report.is_up_to_date() {
        print!("{}", crate::ui::output::render_check_result(&report, caps));
    }

    Ok(report.is_up_to_date())
}

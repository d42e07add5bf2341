use anyhow::Result;
use stdbake::Baker;

use crate::cli::BakeArgs;
use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::terminal::Stream;

pub fn cmd_generate(args: &BakeArgs, json: bool, quiet: bool) -> Result<bool> {
    let config = super::load_config(args, json)?;
    let baker = Baker::from_config(&config);

    if json {
        emit_event(&StartEvent::new("generate", baker.input(), baker.output()))?;
    }

    let report = baker.generate()?;
    log::info!(
        "{} {} ({} assets)",
        report.outcome.as_str(),
        report.output.display(),
        report.assets
    );

    if json {
        emit_event(&CompleteEvent::generated(&report))?;
    } else if !quiet {
        let caps = crate::ui::terminal::detect_capabilities(Stream::Stdout);
        print!(
            "{}",
            crate::ui::output::render_generate_summary(&report, caps)
        );
    }

    Ok(true)
}

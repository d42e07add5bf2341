use anyhow::Result;
use stdbake::Baker;

use crate::cli::BakeArgs;
use crate::ui::json::{emit_event, AssetEvent, CompleteEvent, StartEvent};
use crate::ui::terminal::Stream;

/// Print keys without reading any file content.
pub fn cmd_list(args: &BakeArgs, json: bool) -> Result<bool> {
    let config = super::load_config(args, json)?;
    let baker = Baker::from_config(&config);

    if json {
        emit_event(&StartEvent::new("list", baker.input(), baker.output()))?;
    }

    let assets = baker.plan()?;

    if json {
        for asset in &assets {
            emit_event(&AssetEvent::new(asset))?;
        }
        emit_event(&CompleteEvent::listed(assets.len()))?;
    } else {
        let caps = crate::ui::terminal::detect_capabilities(Stream::Stdout);
        print!("{}", crate::ui::output::render_list(&assets, caps));
    }

    Ok(true)
}

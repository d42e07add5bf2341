pub mod check;
pub mod generate;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::Result;
use stdbake::config::{discover, Config};

use crate::cli::BakeArgs;

/// Resolve the effective configuration: defaults, then the config file,
/// then `STDBAKE_*` variables, then command-line flags.
pub fn load_config(args: &BakeArgs, json: bool) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let source = discover(args.config.as_deref(), &cwd);

    let config = match &source {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            let (config, warnings) = Config::load_with_warnings(path)?;
            if json {
                crate::ui::json::emit_config_warnings(&warnings)?;
            } else {
                crate::ui::output::print_config_warnings(path, &warnings);
            }
            config
        }
        None => Config::default(),
    };

    let mut config = config.with_env_overrides();
    args.apply(&mut config);

    config.validate(config_source(source.as_deref()).as_path())?;
    Ok(config)
}

fn config_source(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("<command line>"))
}

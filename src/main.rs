//! stdbake CLI - embed a directory of text files into a C++ header
//!
//! Usage: stdbake [COMMAND] [OPTIONS]
//!
//! Commands:
//!   generate  Generate the header (default)
//!   check     Verify the header on disk is up to date
//!   list      Print the key each input file would be stored under

mod cli;
mod commands;
mod ui;

use std::io::Write;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let command = cli.command.unwrap_or(Commands::Generate);
    let result = match command {
        Commands::Generate => commands::generate::cmd_generate(&cli.bake, cli.json, cli.quiet),
        Commands::Check => commands::check::cmd_check(&cli.bake, cli.json, cli.quiet),
        Commands::List => commands::list::cmd_list(&cli.bake, cli.json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            ui::error::print_error(&e, cli.json);
            std::process::exit(1);
        }
    }
}

/// `-q`/`-v` win over `STDBAKE_LOG`, which wins over the `warn` default.
fn init_logging(verbose: u8, quiet: bool) {
    let env = env_logger::Env::default()
        .filter_or("STDBAKE_LOG", "warn")
        .write_style_or("STDBAKE_LOG_STYLE", "auto");

    let mut builder = env_logger::Builder::new();
    builder.parse_env(env).format(|buf, rec| {
        let style = buf.default_level_style(rec.level());
        let level = rec.level().to_string().to_lowercase();

        writeln!(buf, "{style}{level}{style:#}: {}", rec.args())
    });

    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose > 0 {
        builder.filter_level(match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }

    let _ = builder.try_init();
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use stdbake::{Config, GuardStyle, LiteralStrategy, NamePolicy};

/// stdbake - embed a directory of text files into a generated C++ header
#[derive(Parser, Debug)]
#[command(name = "stdbake")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'stdbake' without a command to generate the header.")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub bake: BakeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Generate the header (default)
    Generate,

    /// Verify the header on disk is up to date without writing it
    Check,

    /// Print the key each input file would be stored under
    List,
}

/// Options shared by every command; each overrides the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BakeArgs {
    /// Config file (default: ./stdbake.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to embed
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Header to generate
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Prefix prepended to every key
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Separator replacing path separators and dots in keys
    #[arg(long, global = true)]
    pub joiner: Option<String>,

    /// How file contents are written as C++ literals
    #[arg(long, value_enum, global = true)]
    pub strategy: Option<LiteralStrategy>,

    /// Raw string delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// What to do with file names that are not valid identifiers
    #[arg(long, value_enum, global = true)]
    pub names: Option<NamePolicy>,

    /// Include guard style
    #[arg(long, value_enum, global = true)]
    pub guard: Option<GuardStyle>,

    /// Name of the generated map
    #[arg(long, global = true)]
    pub table: Option<String>,

    /// Skip files matching a gitignore-style glob (repeatable)
    #[arg(long, global = true)]
    pub exclude: Vec<String>,

    /// Descend into symlinked directories
    #[arg(long, global = true)]
    pub follow_links: bool,
}

impl BakeArgs {
    /// Overlay command-line values onto `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.keys.prefix = prefix.clone();
        }
        if let Some(joiner) = &self.joiner {
            config.keys.joiner = joiner.clone();
        }
        if let Some(strategy) = self.strategy {
            config.literal.strategy = strategy;
        }
        if let Some(delimiter) = &self.delimiter {
            config.literal.delimiter = delimiter.clone();
        }
        if let Some(names) = self.names {
            config.keys.names = names;
        }
        if let Some(guard) = self.guard {
            config.header.guard = guard;
        }
        if let Some(table) = &self.table {
            config.header.table = table.clone();
        }
        if !self.exclude.is_empty() {
            config.paths.exclude.extend(self.exclude.iter().cloned());
        }
        if self.follow_links {
            config.paths.follow_links = true;
        }
    }
}

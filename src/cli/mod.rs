//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - list: List command arguments
//! - add: Add command arguments
//! - del: Del command arguments
//! - get: Get command arguments
//! - wok: Wok command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};

pub mod add;
pub mod completions;
pub mod del;
pub mod get;
pub mod list;
pub mod wok;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use del::DelArgs;
pub use get::GetArgs;
pub use list::ListArgs;
pub use wok::WokArgs;

/// Spyce - named data sections embedded in source files
#[derive(Parser, Debug)]
#[command(
    name = "spyce",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embed files, directories and downloads into source files",
    long_about = "Spyce stores named text or binary resources in comment blocks of a source \
                  file, so that a single script can carry its own data.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  spyce list tool.py                        \x1b[90m# List embedded spyces\x1b[0m\n   \
                  spyce add tool.py -f logo.png             \x1b[90m# Embed a data file\x1b[0m\n   \
                  spyce add tool.py -d assets               \x1b[90m# Embed a directory as tar.gz\x1b[0m\n   \
                  spyce del tool.py -f data/logo.png        \x1b[90m# Remove a spyce\x1b[0m\n   \
                  spyce get tool.py logo.png -o logo.png    \x1b[90m# Extract a spyce\x1b[0m\n   \
                  spyce wok                                 \x1b[90m# Rebuild the wok project\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List spyces of a file
    List(ListArgs),

    /// Add or replace a spyce
    Add(AddArgs),

    /// Delete spyces
    Del(DelArgs),

    /// Write the content of a spyce
    Get(GetArgs),

    /// Build the files of a wok project
    Wok(WokArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

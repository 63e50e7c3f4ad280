use clap::Parser;
use std::path::PathBuf;

use spyce::filter::Filter;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all spyces:\n    spyce list tool.py\n\n\
                  List binary data spyces with line ranges:\n    spyce list tool.py -f data/:bytes -l\n\n\
                  List everything but one spyce as JSON:\n    spyce list tool.py -f '~data/x.tgz' --json")]
pub struct ListArgs {
    /// File to read spyces from
    pub input: PathBuf,

    /// Select spyces: [~][section/][name][:type]
    #[arg(long = "filter", short = 'f', value_name = "FILTER")]
    pub filters: Vec<Filter>,

    /// Show line ranges
    #[arg(long, short = 'l')]
    pub lines: bool,

    /// Omit the table header
    #[arg(long, short = 'H')]
    pub no_header: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

use clap::Parser;
use std::path::PathBuf;

use spyce::filter::Filter;

use super::add::BackupArgs;

/// Arguments for the del command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete one spyce:\n    spyce del tool.py -f data/logo.png\n\n\
                  Delete every binary spyce, keeping a backup:\n    spyce del tool.py -f :bytes -b")]
pub struct DelArgs {
    /// File to read spyces from
    pub input: PathBuf,

    /// File to write (defaults to updating the input in place)
    pub output: Option<PathBuf>,

    /// Select spyces to delete: [~][section/][name][:type]
    #[arg(long = "filter", short = 'f', value_name = "FILTER", required = true)]
    pub filters: Vec<Filter>,

    #[command(flatten)]
    pub backup: BackupArgs,
}

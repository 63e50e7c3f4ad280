use clap::Parser;
use std::path::PathBuf;

/// Arguments for the get command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print a text spyce:\n    spyce get tool.py notes.txt\n\n\
                  Write a spyce to a file:\n    spyce get tool.py data/logo.png -o logo.png\n\n\
                  Extract an embedded tarball:\n    spyce get tool.py assets --untar out")]
pub struct GetArgs {
    /// File to read spyces from
    pub input: PathBuf,

    /// Spyce key: [section/]name, section defaults to data
    pub key: String,

    /// Write the content to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH", conflicts_with = "untar")]
    pub output: Option<PathBuf>,

    /// Extract the content as a tar archive into this directory
    #[arg(long, value_name = "DIR")]
    pub untar: Option<PathBuf>,
}

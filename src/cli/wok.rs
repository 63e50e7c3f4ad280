use clap::Parser;
use std::path::PathBuf;

/// Arguments for the wok command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the project found in the current directory or a parent:\n    spyce wok\n\n\
                  Build an explicit project file:\n    spyce wok -p release/.wok-project.yaml")]
pub struct WokArgs {
    /// Project file (defaults to the nearest .wok-project.yaml)
    #[arg(long, short = 'p', value_name = "PATH")]
    pub project: Option<PathBuf>,
}

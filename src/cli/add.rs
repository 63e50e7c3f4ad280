use clap::{Args, Parser};
use std::path::PathBuf;

use spyce::curry::DEFAULT_BACKUP_FORMAT;
use spyce::format::{Section, SpyceType};

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Embed a data file:\n    spyce add tool.py -f logo.png\n\n\
                  Embed a code file into the source section:\n    spyce add tool.py -s helper.py\n\n\
                  Embed a directory as a gzip tarball:\n    spyce add tool.py -d assets\n\n\
                  Download and embed a file, writing a new output:\n    \
                  spyce add tool.py dist/tool.py -u https://example.com/pkg-1.0.tar.gz")]
pub struct AddArgs {
    /// File to read spyces from
    pub input: PathBuf,

    /// File to write (defaults to updating the input in place)
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub origin: OriginArgs,

    /// Spyce name (defaults to the file name or last URL segment)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Spyce section (defaults to source for -s, data otherwise)
    #[arg(long, short = 'S')]
    pub section: Option<Section>,

    /// Spyce type
    #[arg(long = "type", short = 't', value_enum)]
    pub spyce_type: Option<SpyceType>,

    #[command(flatten)]
    pub backup: BackupArgs,
}

/// Where the spyce content comes from; exactly one is required
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct OriginArgs {
    /// Code file, stored in the source section
    #[arg(long, short = 's', value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Data file
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory, stored as a gzip tarball
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// URL to download
    #[arg(long, short = 'u', value_name = "URL")]
    pub url: Option<String>,
}

/// Backup options for commands that rewrite files
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Back up the input file before overwriting it
    #[arg(long, short = 'b')]
    pub backup: bool,

    /// Backup path format; {path} and {timestamp} are substituted
    #[arg(
        long,
        short = 'B',
        value_name = "FORMAT",
        env = "SPYCE_BACKUP_FORMAT",
        default_value = DEFAULT_BACKUP_FORMAT
    )]
    pub backup_format: String,
}

impl BackupArgs {
    /// Backup format to use, if backups are enabled
    pub fn format(&self) -> Option<String> {
        self.backup.then(|| self.backup_format.clone())
    }
}

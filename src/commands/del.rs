//! Del command implementation

use spyce::curry::{Curry, WriteOptions};
use spyce::error::Result;
use spyce::filter::filtered_keys;

use crate::cli::DelArgs;

/// Run del command
pub fn run(args: DelArgs) -> Result<()> {
    let mut curry = Curry::open(&args.input)?;
    let keys = filtered_keys(&curry, &args.filters);
    for key in &keys {
        curry.remove(key);
    }
    tracing::info!(removed = keys.len(), "deleted spyces");
    let options = WriteOptions::default()
        .with_output(args.output)
        .with_backup(args.backup.format());
    curry.write(&options)?;
    Ok(())
}

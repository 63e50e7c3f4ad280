//! Get command implementation
//!
//! Writes the content of one spyce to stdout, to a file, or extracts it as a tarball.

use std::io::Write;

use spyce::error::Result;
use spyce::lookup::get_spyce;

use crate::cli::GetArgs;

/// Run get command
pub fn run(args: GetArgs) -> Result<()> {
    let spyce = get_spyce(&args.input, &args.key)?;
    match (args.output, args.untar) {
        (Some(path), _) => spyce.write_file(&path)?,
        (None, Some(dir)) => spyce.untar(&dir)?,
        (None, None) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(spyce.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

//! Add command implementation
//!
//! Builds a flavor from the command line origin, produces the spyce and inserts it into
//! the input file, replacing a block with the same key.

use spyce::curry::{Curry, WriteOptions};
use spyce::error::{Result, flavor};
use spyce::flavor::{Flavor, Origin};

use crate::cli::AddArgs;
use crate::cli::add::OriginArgs;

/// Run add command
pub fn run(args: AddArgs) -> Result<()> {
    let flavor = Flavor::new(
        origin(args.origin)?,
        args.section,
        args.name,
        args.spyce_type,
    )?;
    let mut curry = Curry::open(&args.input)?;
    curry.insert(&flavor.produce()?)?;
    let options = WriteOptions::default()
        .with_output(args.output)
        .with_backup(args.backup.format());
    curry.write(&options)?;
    Ok(())
}

fn origin(args: OriginArgs) -> Result<Origin> {
    match (args.source, args.file, args.dir, args.url) {
        (Some(path), ..) => Ok(Origin::Source(path)),
        (_, Some(path), ..) => Ok(Origin::File(path)),
        (_, _, Some(path), _) => Ok(Origin::Dir(path)),
        (.., Some(url)) => Ok(Origin::Url(url)),
        (None, None, None, None) => Err(flavor::invalid(
            "spyce add",
            "one of --source, --file, --dir or --url is required",
        )),
    }
}

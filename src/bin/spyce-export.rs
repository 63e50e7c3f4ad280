//! Writes the resource embedded at the bottom of this file to a scratch directory.

use std::process::ExitCode;

use spyce::format::CommentStyle;
use spyce::{demo, logging, lookup, temp};

const KEY: &str = "xy";

fn run() -> spyce::Result<()> {
    let lookup = lookup::embedded(
        include_str!("spyce-export.rs"),
        CommentStyle::Slash,
        "spyce-export.rs",
    )?;
    let work_dir = temp::scoped_dir("spyce-export-")?;
    demo::export(&lookup, KEY, work_dir.path(), &mut std::io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    logging::init(0, false);
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// spyce: section data
// spyce: start data/xy:bytes
//|c3B5Y2UgZGVtbyBwYXlsb2FkCg==
// spyce: end data/xy:bytes

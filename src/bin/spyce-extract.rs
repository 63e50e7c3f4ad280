//! Checks, writes and unpacks the archive embedded at the bottom of this file.
//!
//! Exits with 1 when the archive is not defined and 2 when it is defined but not set.

use std::process::ExitCode;

use spyce::demo::{self, ExtractOutcome};
use spyce::format::CommentStyle;
use spyce::{logging, lookup, temp};

const KEY: &str = "hello-0.1.0.tar.gz";

fn run() -> spyce::Result<ExtractOutcome> {
    let lookup = lookup::embedded(
        include_str!("spyce-extract.rs"),
        CommentStyle::Slash,
        "spyce-extract.rs",
    )?;
    // Dropped before main returns, whatever the outcome
    let work_dir = temp::scoped_dir("spyce-extract-")?;
    demo::extract(&lookup, KEY, work_dir.path(), &mut std::io::stdout().lock())
}

fn main() -> ExitCode {
    logging::init(0, false);
    match run() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// spyce: section data
// spyce: start data/hello-0.1.0.tar.gz:bytes
//|H4sIAAAAAAAC/+3WQUvDMBgG4F7Nr/iYlw22LmnTFTYRBu64i/+gtHENds1IU0XE/27tPIyix2Uy3+eSD3J88yYpVVWZGQ9FyOfBmfBOmiT92hmuP8yplFFA
//|SeBB27jMEgX/VHmSf2Pz+Z/IX/AoFsjfd/6Pm/XDdnOe/BdS/p7/Ih7mH0dd/hz5+8mf+vwZW5PT9RsdrNnZbE+uzBztrFKu6WZFr8ZWRcgCuM7+b7Nn9aQr
//|5b3/iRz0XwiO/vvLf0lfT38/hjm7yXOaGTreDKcbaMv1//++s/bafyHSYf9lmqL/PtzqOq/aQtFd4wptwvKeMV072me6Hr8YXUzYO6POoXXNeNQfj+nxJzCa
//|rPodq1xra+Ir9oErAgAAAAAAAAAAAAAA4NI+Aa6XcG8AKAAA
// spyce: end data/hello-0.1.0.tar.gz:bytes

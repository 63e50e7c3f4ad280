//! Spyce - named data sections embedded in source files
//!
//! Command line tool for listing, adding, deleting and extracting spyces, and for building
//! wok projects.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    spyce::logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Add(args) => commands::add::run(args),
        Commands::Del(args) => commands::del::run(args),
        Commands::Get(args) => commands::get::run(args),
        Commands::Wok(args) => commands::wok::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

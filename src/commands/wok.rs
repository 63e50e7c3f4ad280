//! Wok command implementation

use console::Style;

use spyce::error::{Result, io_error};
use spyce::wok::{load_wok, require_wok_path};

use crate::cli::WokArgs;

/// Run wok command
pub fn run(args: WokArgs) -> Result<()> {
    let path = match args.project {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| io_error(format!("Failed to get current directory: {}", e)))?;
            require_wok_path(&cwd)?
        }
    };
    let wok = load_wok(&path)?;
    for target in wok.build()? {
        println!("{} {}", Style::new().green().bold().apply_to("built"), target.display());
    }
    Ok(())
}

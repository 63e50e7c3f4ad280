//! Version command implementation
//!
//! Prints the package version together with what this build can read and write.

use clap::ValueEnum;

use spyce::error::Result;
use spyce::format::{CommentStyle, SpyceType};

const DEMO_PROGRAMS: [&str; 2] = ["spyce-export", "spyce-extract"];

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    let types: Vec<&str> = SpyceType::value_variants()
        .iter()
        .map(|t| t.as_str())
        .collect();
    let leaders: Vec<&str> = [CommentStyle::Hash, CommentStyle::Slash]
        .iter()
        .map(|style| style.leader())
        .collect();
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };

    format!(
        "spyce {}\n\n\
         Spyce types: {}\n\
         Comment leaders: {}\n\
         Demo programs: {}\n\
         Build: {} profile, rust {}\n",
        env!("CARGO_PKG_VERSION"),
        types.join(", "),
        leaders.join(" "),
        DEMO_PROGRAMS.join(", "),
        profile,
        env!("CARGO_PKG_RUST_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text() {
        let text = version_text();
        assert!(text.starts_with(&format!("spyce {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(text.contains("Spyce types: text, bytes\n"));
        assert!(text.contains("Comment leaders: # //\n"));
        assert!(text.contains("Demo programs: spyce-export, spyce-extract\n"));
        assert!(text.contains("rust 1.85"));
    }
}

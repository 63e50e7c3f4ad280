//! Shell completions command

use clap::CommandFactory;

use spyce::error::{Result, io_error};

use crate::cli::CompletionsArgs;

fn shell(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = shell(&args.shell).ok_or_else(|| {
        io_error(format!(
            "Unknown shell: {} (supported: bash, elvish, fish, powershell, zsh)",
            args.shell
        ))
    })?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "spyce", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_known_shells() {
        for name in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(shell(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_completions_case_insensitive() {
        assert_eq!(shell("BASH"), Some(clap_complete::Shell::Bash));
        assert_eq!(shell("Zsh"), Some(clap_complete::Shell::Zsh));
    }

    #[test]
    fn test_completions_unknown_shell() {
        let args = CompletionsArgs {
            shell: "tcsh".to_string(),
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }
}

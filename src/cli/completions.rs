use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    spyce completions bash > ~/.bash_completion.d/spyce\n\n\
                  Generate zsh completions:\n    spyce completions zsh > ~/.zfunc/_spyce\n\n\
                  Generate fish completions:\n    spyce completions fish > ~/.config/fish/completions/spyce.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

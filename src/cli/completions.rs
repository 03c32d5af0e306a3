use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mdredirect completions bash > ~/.bash_completion.d/mdredirect\n\n\
                  Generate zsh completions:\n    mdredirect completions zsh > ~/.zfunc/_mdredirect\n\n\
                  Generate fish completions:\n    mdredirect completions fish > ~/.config/fish/completions/mdredirect.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

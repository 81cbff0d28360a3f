//! Shell completion scripts.
//!
//! ```bash
//! civic completions bash > ~/.local/share/bash-completion/completions/civic
//! civic completions zsh -o ~/.zsh/completions/_civic
//! ```

use crate::cli::{Cli, CompletionsArgs, ShellType};
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;

const BIN_NAME: &str = "civic";

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn execute(args: &CompletionsArgs) -> Result<()> {
    info!(shell = ?args.shell, output = ?args.output, "Generating shell completions");

    if let Some(path) = &args.output {
        let mut file = std::fs::File::create(path)?;
        write_script(args.shell, &mut file);
        file.flush()?;
        eprintln!("Wrote {} completions to {}", args.shell_name(), path.display());
        eprintln!("{}", install_hint(args.shell));
    } else {
        write_script(args.shell, &mut io::stdout());
    }
    Ok(())
}

fn write_script(shell: ShellType, out: &mut dyn Write) {
    generate(to_clap_shell(shell), &mut Cli::command(), BIN_NAME, out);
}

const fn to_clap_shell(shell: ShellType) -> Shell {
    match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
        ShellType::PowerShell => Shell::PowerShell,
        ShellType::Elvish => Shell::Elvish,
    }
}

/// One-line reminder of how to activate the generated script.
const fn install_hint(shell: ShellType) -> &'static str {
    match shell {
        ShellType::Bash => "Restart your shell or run: source ~/.bashrc",
        ShellType::Zsh => "Make sure the directory is on $fpath, then run: exec zsh",
        ShellType::Fish => "Fish loads completions from ~/.config/fish/completions automatically",
        ShellType::PowerShell => "Dot-source the script from your $PROFILE",
        ShellType::Elvish => "Add `use civic` to ~/.elvish/rc.elv",
    }
}

impl CompletionsArgs {
    const fn shell_name(&self) -> &'static str {
        match self.shell {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
            ShellType::PowerShell => "PowerShell",
            ShellType::Elvish => "elvish",
        }
    }
}

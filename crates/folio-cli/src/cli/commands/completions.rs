//! `folio completions <shell>` – shell completion script on stdout.

use anyhow::Result;
use clap::Command;
use clap_complete::Shell;

pub fn run_completions(cmd: &mut Command, shell: Shell) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}

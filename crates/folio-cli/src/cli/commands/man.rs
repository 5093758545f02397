//! `folio man` – roff man page on stdout.

use anyhow::Result;
use clap::Command;

pub fn run_man(cmd: Command) -> Result<()> {
    clap_mangen::Man::new(cmd).render(&mut std::io::stdout())?;
    Ok(())
}

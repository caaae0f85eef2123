//! Shell completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use srtsync::cli::Cli;

/// Print the completion script for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

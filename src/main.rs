use anyhow::Result;
use clap::Parser;

use srtsync::cli::{Cli, Commands, ConfigCommands};
use srtsync::logging::{self, LogTarget};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The player owns the terminal; keep log lines off the screen
    let target = match cli.command {
        Commands::Play(_) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.verbose);

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Parse { subtitles, format } => commands::parse::handle(&subtitles, format),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

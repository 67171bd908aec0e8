//! Tessera CLI: the `tessera` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Render {
            content,
            id,
            classes,
            policy,
            config,
            json,
        } => commands::render::run(commands::render::Args {
            content,
            id,
            classes,
            policy,
            config,
            json,
        }),

        Commands::Renderers { config, json } => commands::renderers::run(config, json),
    }
}

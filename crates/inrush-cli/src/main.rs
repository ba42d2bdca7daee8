//! CLI entrypoint for the inrush parser.

mod cli;
mod commands;
mod style;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use style::Stream;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(commands::Outcome::Clean) => {}
        Ok(commands::Outcome::Diagnostics) => std::process::exit(1),
        Err(err) => {
            eprintln!("{}", style::error(Stream::Stderr, format!("Error: {err:#}")));
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<commands::Outcome> {
    match command {
        Command::Parse {
            file,
            format,
            config,
        } => commands::parse(&file, format, config.as_deref()),
        Command::Tokens { file } => commands::tokens(&file),
        Command::Fmt { file, config } => commands::fmt(&file, config.as_deref()),
        Command::Check { file, config } => commands::check(&file, config.as_deref()),
    }
}

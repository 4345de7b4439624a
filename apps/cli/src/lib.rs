//! Mjolnir: build Anki deck packages from markdown outlines.

pub mod commands;
pub mod config;
pub mod package;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::BuildConfig;

/// Printed before any command runs.
pub const BANNER: &str = "Mjolnir...⚡️";

#[derive(Debug, Parser)]
#[command(name = "mjolnir", about = "Build Anki deck packages from markdown outlines", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read markdown file.
    Read {
        /// Path to markdown file.
        #[arg(
            long = "file-path",
            visible_alias = "file",
            short = 'f',
            visible_short_alias = 'p',
            value_parser = existing_path
        )]
        file_path: PathBuf,
    },
}

/// Accept only paths that exist.
fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path '{}' does not exist", value))
    }
}

pub fn run() -> anyhow::Result<()> {
    let config = BuildConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.effective_log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    println!("{}", BANNER);
    execute(cli.command, &config)
}

/// Dispatch a parsed command.
pub fn execute(command: Command, config: &BuildConfig) -> anyhow::Result<()> {
    match command {
        Command::Read { file_path } => {
            commands::read::run(&file_path, config)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_long_and_aliases() {
        let manifest = env!("CARGO_MANIFEST_DIR");
        for flag in ["--file-path", "--file", "-f", "-p"] {
            let cli = Cli::try_parse_from(["mjolnir", "read", flag, manifest]).unwrap();
            let Command::Read { file_path } = cli.command;
            assert_eq!(file_path, PathBuf::from(manifest));
        }
    }

    #[test]
    fn reject_missing_path() {
        let result = Cli::try_parse_from(["mjolnir", "read", "-f", "/definitely/not/here.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn file_path_is_required() {
        assert!(Cli::try_parse_from(["mjolnir", "read"]).is_err());
    }
}

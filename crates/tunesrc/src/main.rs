// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! tunesrc - inspect and dry-run the music backend plugin.
//!
//! Loads the plugin configuration and runs initialization against an
//! in-process host that records registrations instead of serving audio.

mod check;
mod sources;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tunesrc_config::TunesrcConfig;

/// tunesrc - music backend wiring for an audio host.
#[derive(Parser, Debug)]
#[command(name = "tunesrc", version, about, long_about = None)]
struct Cli {
    /// Read this file instead of the standard config locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize every enabled backend against a recording host.
    Check {
        /// Do not pre-register the host's `youtube` source.
        #[arg(long)]
        without_youtube_source: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// List the built-in backends and their status.
    Sources {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // `sources` and `config` report on incomplete configurations too.
    let validate = matches!(cli.command, Some(Commands::Check { .. }));
    let config = match load_settings(cli.config.as_deref(), validate) {
        Ok(config) => config,
        Err(errors) => {
            tunesrc_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.plugin.log_level);
    tracing::debug!(
        enabled = ?config.sources.enabled().collect::<Vec<_>>(),
        "configuration loaded"
    );

    match cli.command {
        Some(Commands::Check {
            without_youtube_source,
            plain,
        }) => {
            if let Err(e) = check::run_check(&config, !without_youtube_source, plain).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Sources { plain }) => {
            sources::run_sources(&config, plain);
        }
        Some(Commands::Config) => match render_config(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("tunesrc: use --help for available commands");
        }
    }
}

fn load_settings(
    path: Option<&Path>,
    validate: bool,
) -> Result<TunesrcConfig, Vec<tunesrc_config::ConfigError>> {
    match (path, validate) {
        (Some(path), true) => tunesrc_config::load_and_validate_path(path),
        (None, true) => tunesrc_config::load_and_validate(),
        (path, false) => tunesrc_config::load_unvalidated(path),
    }
}

/// Effective configuration as TOML, credentials masked.
fn render_config(config: &TunesrcConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&config.redacted())
}

/// `RUST_LOG` wins; otherwise `tunesrc` crates log at `log_level`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tunesrc={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

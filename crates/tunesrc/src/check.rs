// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tunesrc check` command implementation.
//!
//! Initializes the plugin against a recording host and prints every
//! registration in call order, then the health of each constructed backend.

use std::io::IsTerminal;

use tunesrc_config::TunesrcConfig;
use tunesrc_core::{BackendKind, HealthStatus, TunesrcError};
use tunesrc_plugin::{DryRunHost, HostSource, Registration, TunesrcPlugin};

/// What a successful dry run produced.
#[derive(Debug)]
pub struct CheckReport {
    pub registrations: Vec<Registration>,
    pub health: Vec<(BackendKind, HealthStatus)>,
}

/// Run initialization without printing anything.
///
/// With `seed_youtube`, the host starts with a `youtube` source as if the
/// sibling audio plugin were loaded.
pub async fn dry_run(
    config: &TunesrcConfig,
    seed_youtube: bool,
) -> Result<CheckReport, TunesrcError> {
    let mut host = DryRunHost::new();
    if seed_youtube {
        host = host.with_host_source(HostSource::new("youtube"));
    }

    let mut plugin = TunesrcPlugin::new(config)?;
    plugin.initialize(&mut host)?;

    Ok(CheckReport {
        registrations: host.registrations().to_vec(),
        health: plugin.health_report().await,
    })
}

/// Run the `tunesrc check` command.
pub async fn run_check(
    config: &TunesrcConfig,
    seed_youtube: bool,
    plain: bool,
) -> Result<(), TunesrcError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let report = dry_run(config, seed_youtube).await?;

    println!();
    println!("  tunesrc check");
    println!("  {}", "-".repeat(50));

    if report.registrations.is_empty() {
        println!("    no backends enabled");
    }
    for registration in &report.registrations {
        println!("    {registration}");
    }

    println!();
    for (kind, status) in &report.health {
        println!("{}", health_line(*kind, status, use_color));
    }
    println!();

    Ok(())
}

fn health_line(kind: BackendKind, status: &HealthStatus, use_color: bool) -> String {
    let name = kind.display_name();
    match status {
        HealthStatus::Healthy => {
            if use_color {
                use colored::Colorize;
                format!("    {} {name:<16} healthy", "✓".green())
            } else {
                format!("    [OK]   {name:<16} healthy")
            }
        }
        HealthStatus::Degraded(reason) => {
            if use_color {
                use colored::Colorize;
                format!("    {} {name:<16} {}", "!".yellow(), reason.yellow())
            } else {
                format!("    [WARN] {name:<16} {reason}")
            }
        }
        HealthStatus::Unhealthy(reason) => {
            if use_color {
                use colored::Colorize;
                format!("    {} {name:<16} {}", "✗".red(), reason.red())
            } else {
                format!("    [FAIL] {name:<16} {reason}")
            }
        }
    }
}

// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tunesrc sources` command implementation.

use std::io::IsTerminal;

use tunesrc_config::TunesrcConfig;
use tunesrc_plugin::{BackendReport, BackendStatus, backend_statuses};

/// Print every built-in backend with its status and capabilities.
pub fn run_sources(config: &TunesrcConfig, plain: bool) {
    let use_color = !plain && std::io::stdout().is_terminal();
    for line in source_lines(&backend_statuses(config), use_color) {
        println!("{line}");
    }
}

pub(crate) fn source_lines(reports: &[BackendReport], use_color: bool) -> Vec<String> {
    reports
        .iter()
        .map(|report| {
            let descriptor = report.descriptor;
            let capabilities = descriptor
                .capabilities
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            let status = status_label(&report.status, use_color);
            let mut line = format!(
                "  {:<12} {status:<16} {capabilities:<20} {}",
                descriptor.source_name, descriptor.description
            );
            if !report.missing.is_empty() {
                line.push_str(&format!(" (missing: {})", report.missing.join(", ")));
            }
            if let Some(required) = descriptor.requires_source {
                line.push_str(&format!(" [needs host source `{required}`]"));
            }
            line
        })
        .collect()
}

fn status_label(status: &BackendStatus, use_color: bool) -> String {
    if !use_color {
        return status.to_string();
    }
    use colored::Colorize;
    match status {
        BackendStatus::Enabled => status.to_string().green().to_string(),
        BackendStatus::Disabled => status.to_string().dimmed().to_string(),
        BackendStatus::NotConfigured => status.to_string().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunesrc_core::BackendKind;
    use tunesrc_test_utils::fixtures::config_with;

    #[test]
    fn plain_lines_follow_declaration_order() {
        let lines = source_lines(&backend_statuses(&TunesrcConfig::default()), false);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].trim_start().starts_with("spotify"));
        assert!(lines[5].trim_start().starts_with("youtube"));
        assert!(lines[5].contains("search,lyrics"));
        assert!(lines[5].contains("needs host source `youtube`"));
        assert!(lines.iter().all(|l| l.contains("disabled")));
    }

    #[test]
    fn missing_keys_are_listed() {
        let mut config = config_with(&[BackendKind::Deezer]);
        config.deezer.master_decryption_key = None;
        let lines = source_lines(&backend_statuses(&config), false);
        let deezer = lines.iter().find(|l| l.contains("deezer")).unwrap();
        assert!(deezer.contains("not-configured"));
        assert!(deezer.contains("missing: deezer.master_decryption_key"));
    }
}

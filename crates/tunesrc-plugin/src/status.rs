// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-backend status derived from configuration alone.

use tunesrc_config::{TunesrcConfig, missing_credentials};

use crate::catalog::{BackendDescriptor, builtin_catalog};

/// Status of a backend under a given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Toggle on and every required key present.
    Enabled,
    /// Toggle off.
    Disabled,
    /// Toggle on but required keys are missing.
    NotConfigured,
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendStatus::Enabled => write!(f, "enabled"),
            BackendStatus::Disabled => write!(f, "disabled"),
            BackendStatus::NotConfigured => write!(f, "not-configured"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendReport {
    pub descriptor: &'static BackendDescriptor,
    pub status: BackendStatus,
    /// Required keys that are unset. Empty unless `NotConfigured`.
    pub missing: Vec<&'static str>,
}

/// Status of every built-in backend, in declaration order.
pub fn backend_statuses(config: &TunesrcConfig) -> Vec<BackendReport> {
    builtin_catalog()
        .iter()
        .map(|descriptor| {
            if !config.sources.is_enabled(descriptor.kind) {
                return BackendReport {
                    descriptor,
                    status: BackendStatus::Disabled,
                    missing: Vec::new(),
                };
            }
            let missing = missing_credentials(config, descriptor.kind);
            let status = if missing.is_empty() {
                BackendStatus::Enabled
            } else {
                BackendStatus::NotConfigured
            };
            BackendReport {
                descriptor,
                status,
                missing,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunesrc_core::BackendKind;

    fn status_of(reports: &[BackendReport], kind: BackendKind) -> BackendStatus {
        reports
            .iter()
            .find(|r| r.descriptor.kind == kind)
            .map(|r| r.status.clone())
            .unwrap()
    }

    #[test]
    fn default_config_disables_everything() {
        let reports = backend_statuses(&TunesrcConfig::default());
        assert_eq!(reports.len(), 6);
        assert!(reports.iter().all(|r| r.status == BackendStatus::Disabled));
    }

    #[test]
    fn enabled_without_credentials_is_not_configured() {
        let mut config = TunesrcConfig::default();
        config.sources.spotify = true;
        config.sources.flowerytts = true;
        config.spotify.client_id = Some("id".into());

        let reports = backend_statuses(&config);
        assert_eq!(status_of(&reports, BackendKind::Spotify), BackendStatus::NotConfigured);
        assert_eq!(status_of(&reports, BackendKind::FloweryTts), BackendStatus::Enabled);
        assert_eq!(reports[0].missing, vec!["spotify.client_secret"]);
    }

    #[test]
    fn status_display() {
        assert_eq!(BackendStatus::NotConfigured.to_string(), "not-configured");
        assert_eq!(BackendStatus::Enabled.to_string(), "enabled");
    }
}

// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tunesrc plugin.

use thiserror::Error;

use crate::types::BackendKind;

/// The error type returned by backend construction and plugin initialization.
///
/// Every variant is fatal to plugin initialization. Nothing here is retried.
#[derive(Debug, Error)]
pub enum TunesrcError {
    /// A required field is missing or invalid for an enabled backend.
    #[error("configuration error: {0}")]
    Config(String),

    /// A backend's required host-side source was not registered after the source pass.
    #[error("{backend} requires the `{requires}` source to be registered, but the host has none")]
    UnresolvedDependency {
        backend: BackendKind,
        requires: String,
    },

    /// An initialization step was invoked out of order.
    #[error("initialization step needs phase `{expected}`, but the plugin is in `{current}`")]
    PhaseOrder { expected: String, current: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TunesrcError {
    /// Returns true for errors caused by operator configuration rather than a bug.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TunesrcError::Config(_) | TunesrcError::UnresolvedDependency { .. }
        )
    }
}

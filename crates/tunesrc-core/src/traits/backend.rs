// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait every constructed backend implements.

use async_trait::async_trait;

use crate::error::TunesrcError;
use crate::types::{BackendKind, HealthStatus};

/// Identity and health of a constructed backend.
///
/// Capability traits are implemented separately so a backend's capability
/// set is visible in its type.
#[async_trait]
pub trait BackendAdapter: Send + Sync + 'static {
    /// Which backend this instance is.
    fn kind(&self) -> BackendKind;

    /// Reports whether the backend can currently serve requests.
    ///
    /// Must not perform network I/O.
    async fn health_check(&self) -> Result<HealthStatus, TunesrcError>;
}

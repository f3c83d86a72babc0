// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock backend for deterministic testing.
//!
//! `MockBackend` implements every capability trait, so tests choose the
//! capability set by which `with_*` builders they call on the instance.

use async_trait::async_trait;

use tunesrc_core::{
    BackendAdapter, BackendKind, HealthStatus, LyricsProvider, SearchProvider, SearchType,
    SourceProvider, TunesrcError,
};

/// A backend posing as `kind`, named after it.
#[derive(Debug, Clone)]
pub struct MockBackend {
    kind: BackendKind,
    name: String,
    health: HealthStatus,
}

impl MockBackend {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            health: HealthStatus::Healthy,
        }
    }

    /// Report `health` from `health_check`.
    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = health;
        self
    }
}

#[async_trait]
impl BackendAdapter for MockBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        Ok(self.health.clone())
    }
}

impl SourceProvider for MockBackend {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn can_load(&self, identifier: &str) -> bool {
        identifier.starts_with(&format!("{}:", self.name))
    }
}

impl SearchProvider for MockBackend {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn search_prefixes(&self) -> &[&'static str] {
        &["mocksearch:"]
    }

    fn search_types(&self) -> &[SearchType] {
        &[SearchType::Track]
    }
}

impl LyricsProvider for MockBackend {
    fn source_name(&self) -> &str {
        &self.name
    }
}

// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! YouTube search and lyrics backend.
//!
//! Has no source capability of its own. Search results and lyrics are
//! resolved through the host's `youtube` audio source, which another plugin
//! registers. The backend holds an empty [`SourceSlot`] until the
//! orchestrator resolves that source after the source pass.

use std::sync::Arc;

use async_trait::async_trait;
use tunesrc_core::{
    BackendAdapter, BackendKind, HealthStatus, LyricsProvider, SearchProvider, SearchType,
    SourceProvider, TunesrcError,
};

use super::CATALOG_SEARCH_TYPES;
use crate::dependency::SourceSlot;

pub const SOURCE_NAME: &str = "youtube";

/// Name of the host-side source this backend depends on.
pub const AUDIO_SOURCE_NAME: &str = "youtube";

const SEARCH_PREFIXES: &[&str] = &["ytsearch:", "ytmsearch:"];

#[derive(Debug)]
pub struct YoutubeSearchManager {
    country_code: String,
    audio_source: SourceSlot,
}

impl YoutubeSearchManager {
    pub fn new(audio_source: SourceSlot, country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            audio_source,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The host's YouTube source, once resolved.
    pub fn audio_source(&self) -> Option<Arc<dyn SourceProvider>> {
        self.audio_source.get()
    }
}

#[async_trait]
impl BackendAdapter for YoutubeSearchManager {
    fn kind(&self) -> BackendKind {
        BackendKind::Youtube
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        if self.audio_source.is_filled() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy(format!(
                "host source `{}` not resolved",
                self.audio_source.source_name()
            )))
        }
    }
}

impl SearchProvider for YoutubeSearchManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn search_prefixes(&self) -> &[&'static str] {
        SEARCH_PREFIXES
    }

    fn search_types(&self) -> &[SearchType] {
        CATALOG_SEARCH_TYPES
    }
}

impl LyricsProvider for YoutubeSearchManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unhealthy_until_slot_is_filled() {
        let slot = SourceSlot::empty(AUDIO_SOURCE_NAME);
        let youtube = YoutubeSearchManager::new(slot, "US");
        assert!(youtube.audio_source().is_none());
        assert!(matches!(
            youtube.health_check().await.unwrap(),
            HealthStatus::Unhealthy(ref m) if m.contains("youtube")
        ));
    }

    #[test]
    fn routes_both_search_prefixes() {
        let youtube = YoutubeSearchManager::new(SourceSlot::empty(AUDIO_SOURCE_NAME), "US");
        assert!(youtube.handles_query("ytsearch:lofi"));
        assert!(youtube.handles_query("ytmsearch:lofi"));
        assert!(!youtube.handles_query("scsearch:lofi"));
    }
}

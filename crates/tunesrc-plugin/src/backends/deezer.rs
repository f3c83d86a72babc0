// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deezer backend: source, search and lyrics.

use std::fmt;

use async_trait::async_trait;
use tunesrc_core::{
    BackendAdapter, BackendKind, HealthStatus, LyricsProvider, SearchProvider, SearchType,
    SourceProvider, TunesrcError,
};

use super::{CATALOG_SEARCH_TYPES, matches_identifier, require_credential};

pub const SOURCE_NAME: &str = "deezer";

const PREFIXES: &[&str] = &["dzsearch:", "dzisrc:", "dzrec:"];
const SEARCH_PREFIXES: &[&str] = &["dzsearch:"];
const HOSTS: &[&str] = &[
    "deezer.com",
    "www.deezer.com",
    "deezer.page.link",
    "link.deezer.com",
];

pub struct DeezerAudioSourceManager {
    master_decryption_key: String,
}

impl DeezerAudioSourceManager {
    pub fn new(master_decryption_key: impl Into<String>) -> Result<Self, TunesrcError> {
        Ok(Self {
            master_decryption_key: require_credential(
                "deezer.master_decryption_key",
                master_decryption_key,
            )?,
        })
    }

    pub fn master_decryption_key(&self) -> &str {
        &self.master_decryption_key
    }
}

impl fmt::Debug for DeezerAudioSourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeezerAudioSourceManager")
            .field("master_decryption_key", &"***")
            .finish()
    }
}

#[async_trait]
impl BackendAdapter for DeezerAudioSourceManager {
    fn kind(&self) -> BackendKind {
        BackendKind::Deezer
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        Ok(HealthStatus::Healthy)
    }
}

impl SourceProvider for DeezerAudioSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn can_load(&self, identifier: &str) -> bool {
        matches_identifier(identifier, PREFIXES, HOSTS)
    }
}

impl SearchProvider for DeezerAudioSourceManager {
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

impl LyricsProvider for DeezerAudioSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_master_key() {
        assert!(DeezerAudioSourceManager::new("").is_err());
        let deezer = DeezerAudioSourceManager::new("master").unwrap();
        assert_eq!(deezer.master_decryption_key(), "master");
    }

    #[test]
    fn recognises_isrc_lookups_and_share_links() {
        let deezer = DeezerAudioSourceManager::new("master").unwrap();
        assert!(deezer.can_load("dzisrc:USUM71703861"));
        assert!(deezer.can_load("https://www.deezer.com/track/3135556"));
        assert!(deezer.can_load("https://deezer.page.link/abc"));
        assert!(!deezer.can_load("ymsearch:anything"));
        assert!(!deezer.handles_query("dzisrc:USUM71703861"));
    }
}

// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Apple Music catalog backend: source and search.

use std::fmt;

use async_trait::async_trait;
use tunesrc_core::{
    BackendAdapter, BackendKind, HealthStatus, SearchProvider, SearchType, SourceProvider,
    TunesrcError,
};

use super::{CATALOG_SEARCH_TYPES, MirroringResolver, matches_identifier};

pub const SOURCE_NAME: &str = "applemusic";
pub const DEFAULT_PLAYLIST_PAGE_LIMIT: u32 = 6;
pub const DEFAULT_ALBUM_PAGE_LIMIT: u32 = 6;

const PREFIXES: &[&str] = &["amsearch:"];
const HOSTS: &[&str] = &["music.apple.com", "geo.music.apple.com"];

pub struct AppleMusicSourceManager {
    media_api_token: Option<String>,
    country_code: String,
    playlist_page_limit: u32,
    album_page_limit: u32,
    mirroring: MirroringResolver,
}

impl AppleMusicSourceManager {
    /// A missing token is not an error; the client fetches one on first use.
    pub fn new(
        mirroring: MirroringResolver,
        media_api_token: Option<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            media_api_token: media_api_token.filter(|token| !token.trim().is_empty()),
            country_code: country_code.into(),
            playlist_page_limit: DEFAULT_PLAYLIST_PAGE_LIMIT,
            album_page_limit: DEFAULT_ALBUM_PAGE_LIMIT,
            mirroring,
        }
    }

    pub fn set_playlist_page_limit(&mut self, limit: u32) {
        self.playlist_page_limit = limit;
    }

    pub fn set_album_page_limit(&mut self, limit: u32) {
        self.album_page_limit = limit;
    }

    pub fn playlist_page_limit(&self) -> u32 {
        self.playlist_page_limit
    }

    pub fn album_page_limit(&self) -> u32 {
        self.album_page_limit
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn has_media_api_token(&self) -> bool {
        self.media_api_token.is_some()
    }

    pub fn mirroring(&self) -> &MirroringResolver {
        &self.mirroring
    }
}

impl fmt::Debug for AppleMusicSourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppleMusicSourceManager")
            .field("media_api_token", &self.media_api_token.as_ref().map(|_| "***"))
            .field("country_code", &self.country_code)
            .field("playlist_page_limit", &self.playlist_page_limit)
            .field("album_page_limit", &self.album_page_limit)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BackendAdapter for AppleMusicSourceManager {
    fn kind(&self) -> BackendKind {
        BackendKind::AppleMusic
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        if self.has_media_api_token() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(
                "no media API token configured, one is fetched on first request".to_string(),
            ))
        }
    }
}

impl SourceProvider for AppleMusicSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn can_load(&self, identifier: &str) -> bool {
        matches_identifier(identifier, PREFIXES, HOSTS)
    }
}

impl SearchProvider for AppleMusicSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn search_prefixes(&self) -> &[&'static str] {
        PREFIXES
    }

    fn search_types(&self) -> &[SearchType] {
        CATALOG_SEARCH_TYPES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(token: Option<&str>) -> AppleMusicSourceManager {
        let mirroring = MirroringResolver::new(&["ytsearch:%QUERY%".to_string()]).unwrap();
        AppleMusicSourceManager::new(mirroring, token.map(str::to_string), "us")
    }

    #[test]
    fn recognises_album_urls() {
        let apple = manager(None);
        assert!(apple.can_load("https://music.apple.com/us/album/1440857781"));
        assert!(apple.can_load("amsearch:bohemian rhapsody"));
        assert!(!apple.can_load("https://open.spotify.com/track/1"));
    }

    #[test]
    fn blank_token_treated_as_absent() {
        assert!(!manager(Some("")).has_media_api_token());
        assert!(manager(Some("eyJ")).has_media_api_token());
    }

    #[tokio::test]
    async fn health_reflects_token() {
        assert!(matches!(
            manager(None).health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
        assert_eq!(
            manager(Some("eyJ")).health_check().await.unwrap(),
            HealthStatus::Healthy
        );
    }
}

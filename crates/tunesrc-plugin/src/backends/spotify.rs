// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spotify catalog backend: source, search and lyrics.

use std::fmt;

use async_trait::async_trait;
use tunesrc_core::{
    BackendAdapter, BackendKind, HealthStatus, LyricsProvider, SearchProvider, SearchType,
    SourceProvider, TunesrcError,
};

use super::{CATALOG_SEARCH_TYPES, MirroringResolver, matches_identifier, require_credential};

pub const SOURCE_NAME: &str = "spotify";
pub const DEFAULT_PLAYLIST_PAGE_LIMIT: u32 = 6;
pub const DEFAULT_ALBUM_PAGE_LIMIT: u32 = 6;

const PREFIXES: &[&str] = &["spsearch:", "sprec:", "spotify:"];
const SEARCH_PREFIXES: &[&str] = &["spsearch:"];
const HOSTS: &[&str] = &["open.spotify.com", "spotify.link"];

pub struct SpotifySourceManager {
    client_id: String,
    client_secret: String,
    sp_dc: Option<String>,
    country_code: String,
    playlist_page_limit: u32,
    album_page_limit: u32,
    mirroring: MirroringResolver,
}

impl SpotifySourceManager {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        sp_dc: Option<String>,
        country_code: impl Into<String>,
        mirroring: MirroringResolver,
    ) -> Result<Self, TunesrcError> {
        Ok(Self {
            client_id: require_credential("spotify.client_id", client_id)?,
            client_secret: require_credential("spotify.client_secret", client_secret)?,
            sp_dc: sp_dc.filter(|cookie| !cookie.trim().is_empty()),
            country_code: country_code.into(),
            playlist_page_limit: DEFAULT_PLAYLIST_PAGE_LIMIT,
            album_page_limit: DEFAULT_ALBUM_PAGE_LIMIT,
            mirroring,
        })
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

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Secret for the client-credentials token request.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Lyrics need the `sp_dc` session cookie.
    pub fn has_lyrics_access(&self) -> bool {
        self.sp_dc.is_some()
    }

    pub fn mirroring(&self) -> &MirroringResolver {
        &self.mirroring
    }
}

impl fmt::Debug for SpotifySourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifySourceManager")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("sp_dc", &self.sp_dc.as_ref().map(|_| "***"))
            .field("country_code", &self.country_code)
            .field("playlist_page_limit", &self.playlist_page_limit)
            .field("album_page_limit", &self.album_page_limit)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl BackendAdapter for SpotifySourceManager {
    fn kind(&self) -> BackendKind {
        BackendKind::Spotify
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        if self.has_lyrics_access() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(
                "no sp_dc cookie configured, lyrics requests will fail".to_string(),
            ))
        }
    }
}

impl SourceProvider for SpotifySourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn can_load(&self, identifier: &str) -> bool {
        matches_identifier(identifier, PREFIXES, HOSTS)
    }
}

impl SearchProvider for SpotifySourceManager {
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

impl LyricsProvider for SpotifySourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }
}

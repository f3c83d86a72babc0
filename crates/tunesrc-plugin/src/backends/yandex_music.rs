// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Yandex Music backend: source only.

use std::fmt;

use async_trait::async_trait;
use tunesrc_core::{BackendAdapter, BackendKind, HealthStatus, SourceProvider, TunesrcError};

use super::{matches_identifier, require_credential};

pub const SOURCE_NAME: &str = "yandexmusic";

const PREFIXES: &[&str] = &["ymsearch:"];
const HOSTS: &[&str] = &[
    "music.yandex.ru",
    "music.yandex.com",
    "music.yandex.by",
    "music.yandex.kz",
];

pub struct YandexMusicSourceManager {
    access_token: String,
}

impl YandexMusicSourceManager {
    pub fn new(access_token: impl Into<String>) -> Result<Self, TunesrcError> {
        Ok(Self {
            access_token: require_credential("yandexmusic.access_token", access_token)?,
        })
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("OAuth {}", self.access_token)
    }
}

impl fmt::Debug for YandexMusicSourceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexMusicSourceManager")
            .field("access_token", &"***")
            .finish()
    }
}

#[async_trait]
impl BackendAdapter for YandexMusicSourceManager {
    fn kind(&self) -> BackendKind {
        BackendKind::YandexMusic
    }

    async fn health_check(&self) -> Result<HealthStatus, TunesrcError> {
        Ok(HealthStatus::Healthy)
    }
}

impl SourceProvider for YandexMusicSourceManager {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn can_load(&self, identifier: &str) -> bool {
        matches_identifier(identifier, PREFIXES, HOSTS)
    }
}

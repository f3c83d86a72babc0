// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in backend catalog.
//!
//! Static descriptors for the six compiled-in backends, in declaration
//! order. No network calls are made.

use tunesrc_core::{BackendKind, Capability};

use crate::backends::{apple_music, deezer, flowery_tts, spotify, yandex_music, youtube};

/// Static metadata for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    pub kind: BackendKind,
    /// Name the backend registers under.
    pub source_name: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [Capability],
    /// Every key the backend's section accepts.
    pub config_keys: &'static [&'static str],
    /// Keys that must be set when the backend is enabled.
    pub required_keys: &'static [&'static str],
    /// Host source that must exist before search/lyrics registration.
    pub requires_source: Option<&'static str>,
}

impl BackendDescriptor {
    pub fn provides(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

static CATALOG: [BackendDescriptor; 6] = [
    BackendDescriptor {
        kind: BackendKind::Spotify,
        source_name: spotify::SOURCE_NAME,
        description: "Spotify catalog lookups mirrored to a playable source, with lyrics",
        capabilities: &[Capability::Source, Capability::Search, Capability::Lyrics],
        config_keys: &[
            "spotify.client_id",
            "spotify.client_secret",
            "spotify.sp_dc",
            "spotify.country_code",
            "spotify.playlist_load_limit",
            "spotify.album_load_limit",
        ],
        required_keys: &["spotify.client_id", "spotify.client_secret"],
        requires_source: None,
    },
    BackendDescriptor {
        kind: BackendKind::AppleMusic,
        source_name: apple_music::SOURCE_NAME,
        description: "Apple Music catalog lookups mirrored to a playable source",
        capabilities: &[Capability::Source, Capability::Search],
        config_keys: &[
            "applemusic.media_api_token",
            "applemusic.country_code",
            "applemusic.playlist_load_limit",
            "applemusic.album_load_limit",
        ],
        required_keys: &[],
        requires_source: None,
    },
    BackendDescriptor {
        kind: BackendKind::Deezer,
        source_name: deezer::SOURCE_NAME,
        description: "Deezer streaming with search and lyrics",
        capabilities: &[Capability::Source, Capability::Search, Capability::Lyrics],
        config_keys: &["deezer.master_decryption_key"],
        required_keys: &["deezer.master_decryption_key"],
        requires_source: None,
    },
    BackendDescriptor {
        kind: BackendKind::YandexMusic,
        source_name: yandex_music::SOURCE_NAME,
        description: "Yandex Music streaming",
        capabilities: &[Capability::Source],
        config_keys: &["yandexmusic.access_token"],
        required_keys: &["yandexmusic.access_token"],
        requires_source: None,
    },
    BackendDescriptor {
        kind: BackendKind::FloweryTts,
        source_name: flowery_tts::SOURCE_NAME,
        description: "Flowery text-to-speech synthesis",
        capabilities: &[Capability::Source],
        config_keys: &[
            "flowerytts.voice",
            "flowerytts.translate",
            "flowerytts.silence",
            "flowerytts.speed",
            "flowerytts.audio_format",
        ],
        required_keys: &[],
        requires_source: None,
    },
    BackendDescriptor {
        kind: BackendKind::Youtube,
        source_name: youtube::SOURCE_NAME,
        description: "YouTube search and lyrics through the host's YouTube source",
        capabilities: &[Capability::Search, Capability::Lyrics],
        config_keys: &["youtube.country_code"],
        required_keys: &[],
        requires_source: Some(youtube::AUDIO_SOURCE_NAME),
    },
];

/// All descriptors in declaration order.
pub fn builtin_catalog() -> &'static [BackendDescriptor] {
    &CATALOG
}

/// Descriptor for one backend.
pub fn descriptor(kind: BackendKind) -> &'static BackendDescriptor {
    // CATALOG is laid out in BackendKind declaration order.
    &CATALOG[kind as usize]
}

/// Descriptors whose kind, source name or description contains `query`
/// (case-insensitive). An empty query returns everything.
pub fn search_catalog(query: &str) -> Vec<&'static BackendDescriptor> {
    let query = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|d| {
            query.is_empty()
                || d.kind.to_string().contains(&query)
                || d.source_name.contains(&query)
                || d.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunesrc_config::{TunesrcConfig, missing_credentials};

    #[test]
    fn catalog_follows_declaration_order() {
        let kinds: Vec<BackendKind> = builtin_catalog().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, BackendKind::ALL.to_vec());
        for kind in BackendKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
    }

    #[test]
    fn required_keys_match_config_validation() {
        let config = TunesrcConfig::default();
        for d in builtin_catalog() {
            assert_eq!(
                missing_credentials(&config, d.kind),
                d.required_keys.to_vec(),
                "{} required keys drifted",
                d.kind
            );
        }
    }

    #[test]
    fn config_keys_belong_to_their_section() {
        for d in builtin_catalog() {
            let section = format!("{}.", d.kind);
            assert!(d.config_keys.iter().all(|k| k.starts_with(&section)));
            assert!(d.required_keys.iter().all(|k| d.config_keys.contains(k)));
        }
    }

    #[test]
    fn only_youtube_has_a_cross_dependency() {
        let dependent: Vec<BackendKind> = builtin_catalog()
            .iter()
            .filter(|d| d.requires_source.is_some())
            .map(|d| d.kind)
            .collect();
        assert_eq!(dependent, vec![BackendKind::Youtube]);
        assert!(!descriptor(BackendKind::Youtube).provides(Capability::Source));
    }

    #[test]
    fn search_is_case_insensitive_and_matches_description() {
        let hits = search_catalog("LYRICS");
        let kinds: Vec<BackendKind> = hits.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![BackendKind::Spotify, BackendKind::Deezer, BackendKind::Youtube]
        );
        assert_eq!(search_catalog("flowery-tts").len(), 1);
        assert_eq!(search_catalog("").len(), 6);
        assert!(search_catalog("soundcloud").is_empty());
    }
}

// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend manager objects.
//!
//! Each manager carries its configuration and exposes its capabilities
//! through the core traits. Protocol clients, decryption and track
//! resolution live behind these types and are not part of this crate.

pub mod apple_music;
pub mod deezer;
pub mod flowery_tts;
pub mod mirror;
pub mod spotify;
pub mod yandex_music;
pub mod youtube;

pub use apple_music::AppleMusicSourceManager;
pub use deezer::DeezerAudioSourceManager;
pub use flowery_tts::FloweryTtsSourceManager;
pub use mirror::MirroringResolver;
pub use spotify::SpotifySourceManager;
pub use yandex_music::YandexMusicSourceManager;
pub use youtube::YoutubeSearchManager;

use tunesrc_core::SearchType;

/// Result types offered by the full catalog searches.
pub(crate) const CATALOG_SEARCH_TYPES: &[SearchType] = &[
    SearchType::Track,
    SearchType::Album,
    SearchType::Artist,
    SearchType::Playlist,
    SearchType::Text,
];

/// True when `identifier` starts with one of `prefixes` or is an http(s) URL
/// whose host is one of `hosts`.
pub(crate) fn matches_identifier(identifier: &str, prefixes: &[&str], hosts: &[&str]) -> bool {
    if prefixes.iter().any(|prefix| identifier.starts_with(prefix)) {
        return true;
    }
    url_host(identifier).is_some_and(|host| hosts.iter().any(|h| host.eq_ignore_ascii_case(h)))
}

fn url_host(identifier: &str) -> Option<&str> {
    let rest = identifier
        .strip_prefix("https://")
        .or_else(|| identifier.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    authority.split(':').next().filter(|host| !host.is_empty())
}

/// A credential that must be present, rejected when blank.
pub(crate) fn require_credential(
    key: &str,
    value: impl Into<String>,
) -> Result<String, tunesrc_core::TunesrcError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(tunesrc_core::TunesrcError::Config(format!(
            "{key} must be set when the backend is enabled"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match() {
        assert!(matches_identifier("spsearch:foo", &["spsearch:"], &[]));
        assert!(!matches_identifier("dzsearch:foo", &["spsearch:"], &[]));
    }

    #[test]
    fn host_match_ignores_path_port_and_case() {
        let hosts = &["open.spotify.com"];
        assert!(matches_identifier(
            "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC",
            &[],
            hosts
        ));
        assert!(matches_identifier("http://OPEN.spotify.com:443/album/x", &[], hosts));
        assert!(matches_identifier("https://open.spotify.com?si=1", &[], hosts));
        assert!(!matches_identifier("https://spotify.com.evil.example/track", &[], hosts));
        assert!(!matches_identifier("open.spotify.com/track/x", &[], hosts));
    }

    #[test]
    fn blank_credential_rejected() {
        let err = require_credential("deezer.master_decryption_key", "  ").unwrap_err();
        assert!(err.to_string().contains("deezer.master_decryption_key"));
        assert_eq!(require_credential("k", "v").unwrap(), "v");
    }
}

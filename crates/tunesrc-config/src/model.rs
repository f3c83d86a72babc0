// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the tunesrc plugin.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of silently leaving a backend unconfigured.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tunesrc_core::BackendKind;

/// Top-level plugin configuration.
///
/// Every section is optional. Backend sections are only read when the
/// matching `[sources]` toggle is on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TunesrcConfig {
    /// Settings shared by every backend.
    #[serde(default)]
    pub plugin: PluginConfig,

    /// One enable toggle per backend.
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub spotify: SpotifyConfig,

    #[serde(default)]
    pub applemusic: AppleMusicConfig,

    #[serde(default)]
    pub deezer: DeezerConfig,

    #[serde(default)]
    pub yandexmusic: YandexMusicConfig,

    #[serde(default)]
    pub flowerytts: FloweryTtsConfig,

    #[serde(default)]
    pub youtube: YoutubeConfig,
}

/// Settings shared across backends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Mirror search templates, tried in order when a catalog track has to be
    /// played from another source. Each contains `%ISRC%` or `%QUERY%`.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            log_level: default_log_level(),
        }
    }
}

fn default_providers() -> Vec<String> {
    vec![
        "ytsearch:\"%ISRC%\"".to_string(),
        "ytsearch:%QUERY%".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Global enable toggles. Every backend is off unless switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default)]
    pub spotify: bool,
    #[serde(default)]
    pub applemusic: bool,
    #[serde(default)]
    pub deezer: bool,
    #[serde(default)]
    pub yandexmusic: bool,
    #[serde(default)]
    pub flowerytts: bool,
    #[serde(default)]
    pub youtube: bool,
}

impl SourcesConfig {
    /// Whether `kind` is switched on.
    pub fn is_enabled(&self, kind: BackendKind) -> bool {
        match kind {
            BackendKind::Spotify => self.spotify,
            BackendKind::AppleMusic => self.applemusic,
            BackendKind::Deezer => self.deezer,
            BackendKind::YandexMusic => self.yandexmusic,
            BackendKind::FloweryTts => self.flowerytts,
            BackendKind::Youtube => self.youtube,
        }
    }

    /// Switch `kind` on or off.
    pub fn set_enabled(&mut self, kind: BackendKind, enabled: bool) {
        let toggle = match kind {
            BackendKind::Spotify => &mut self.spotify,
            BackendKind::AppleMusic => &mut self.applemusic,
            BackendKind::Deezer => &mut self.deezer,
            BackendKind::YandexMusic => &mut self.yandexmusic,
            BackendKind::FloweryTts => &mut self.flowerytts,
            BackendKind::Youtube => &mut self.youtube,
        };
        *toggle = enabled;
    }

    /// Enabled backends in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = BackendKind> + '_ {
        BackendKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
    }
}

/// Spotify catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpotifyConfig {
    /// Web API client id. Required when enabled.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Web API client secret. Required when enabled.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// `sp_dc` session cookie. Lyrics are unavailable without it.
    #[serde(default)]
    pub sp_dc: Option<String>,

    #[serde(default = "default_upper_country_code")]
    pub country_code: String,

    /// Playlist pages to load. `0` or less keeps the backend default.
    #[serde(default)]
    pub playlist_load_limit: i32,

    /// Album pages to load. `0` or less keeps the backend default.
    #[serde(default)]
    pub album_load_limit: i32,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            sp_dc: None,
            country_code: default_upper_country_code(),
            playlist_load_limit: 0,
            album_load_limit: 0,
        }
    }
}

fn default_upper_country_code() -> String {
    "US".to_string()
}

/// Apple Music catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppleMusicConfig {
    /// MusicKit media API token. When absent the backend obtains one itself.
    #[serde(default)]
    pub media_api_token: Option<String>,

    #[serde(default = "default_lower_country_code")]
    pub country_code: String,

    #[serde(default)]
    pub playlist_load_limit: i32,

    #[serde(default)]
    pub album_load_limit: i32,
}

impl Default for AppleMusicConfig {
    fn default() -> Self {
        Self {
            media_api_token: None,
            country_code: default_lower_country_code(),
            playlist_load_limit: 0,
            album_load_limit: 0,
        }
    }
}

fn default_lower_country_code() -> String {
    "us".to_string()
}

/// Deezer backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeezerConfig {
    /// Master key used to derive per-track stream keys. Required when enabled.
    #[serde(default)]
    pub master_decryption_key: Option<String>,
}

/// Yandex Music backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct YandexMusicConfig {
    /// OAuth access token. Required when enabled.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Output formats the Flowery TTS service can synthesize.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Deserialize, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    Mp3,
    OggOpus,
    OggVorbis,
    Aac,
    Wav,
    Flac,
}

/// Flowery text-to-speech backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FloweryTtsConfig {
    /// Voice name. The backend default voice is used when absent.
    #[serde(default)]
    pub voice: Option<String>,

    /// Translate the text into the voice's language before synthesis.
    #[serde(default)]
    pub translate: bool,

    /// Silence appended after each sentence, in milliseconds.
    #[serde(default)]
    pub silence: i32,

    /// Speech speed multiplier. `0` keeps the backend default.
    #[serde(default)]
    pub speed: f32,

    #[serde(default)]
    pub audio_format: Option<AudioFormat>,
}

/// YouTube search and lyrics backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct YoutubeConfig {
    #[serde(default = "default_upper_country_code")]
    pub country_code: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            country_code: default_upper_country_code(),
        }
    }
}

impl TunesrcConfig {
    /// Copy of the configuration with every credential replaced by `***`.
    pub fn redacted(&self) -> Self {
        fn mask(value: &Option<String>) -> Option<String> {
            value.as_ref().map(|_| "***".to_string())
        }

        let mut config = self.clone();
        config.spotify.client_id = mask(&self.spotify.client_id);
        config.spotify.client_secret = mask(&self.spotify.client_secret);
        config.spotify.sp_dc = mask(&self.spotify.sp_dc);
        config.applemusic.media_api_token = mask(&self.applemusic.media_api_token);
        config.deezer.master_decryption_key = mask(&self.deezer.master_decryption_key);
        config.yandexmusic.access_token = mask(&self.yandexmusic.access_token);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_backend_disabled_by_default() {
        let config = TunesrcConfig::default();
        assert_eq!(config.sources.enabled().count(), 0);
        for kind in BackendKind::ALL {
            assert!(!config.sources.is_enabled(kind));
        }
    }

    #[test]
    fn set_enabled_round_trips_every_kind() {
        let mut sources = SourcesConfig::default();
        for kind in BackendKind::ALL {
            sources.set_enabled(kind, true);
            assert!(sources.is_enabled(kind), "{kind} should be enabled");
        }
        let enabled: Vec<BackendKind> = sources.enabled().collect();
        assert_eq!(enabled, BackendKind::ALL.to_vec());

        sources.set_enabled(BackendKind::Deezer, false);
        assert!(!sources.is_enabled(BackendKind::Deezer));
    }

    #[test]
    fn audio_format_uses_snake_case() {
        let config: FloweryTtsConfig = toml::from_str("audio_format = \"ogg_opus\"").unwrap();
        assert_eq!(config.audio_format, Some(AudioFormat::OggOpus));
        assert_eq!(AudioFormat::OggVorbis.to_string(), "ogg_vorbis");
    }

    #[test]
    fn unknown_audio_format_rejected() {
        let result = toml::from_str::<FloweryTtsConfig>("audio_format = \"midi\"");
        assert!(result.is_err());
    }

    #[test]
    fn limits_accept_negative_values() {
        let config: SpotifyConfig = toml::from_str("playlist_load_limit = -3").unwrap();
        assert_eq!(config.playlist_load_limit, -3);
        assert_eq!(config.album_load_limit, 0);
    }

    #[test]
    fn redacted_masks_only_present_secrets() {
        let mut config = TunesrcConfig::default();
        config.spotify.client_id = Some("id".into());
        config.deezer.master_decryption_key = Some("key".into());

        let redacted = config.redacted();
        assert_eq!(redacted.spotify.client_id.as_deref(), Some("***"));
        assert!(redacted.spotify.client_secret.is_none());
        assert_eq!(redacted.deezer.master_decryption_key.as_deref(), Some("***"));
        assert_eq!(redacted.spotify.country_code, "US");
    }
}

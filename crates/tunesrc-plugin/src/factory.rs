// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend factory.
//!
//! Turns one backend kind plus the validated configuration into a
//! [`BackendInstance`]. A disabled kind yields `None` without reading its
//! configuration section. Construction never performs I/O.

use std::sync::Arc;

use tunesrc_config::TunesrcConfig;
use tunesrc_core::{BackendKind, TunesrcError};

use crate::backends::{
    AppleMusicSourceManager, DeezerAudioSourceManager, FloweryTtsSourceManager,
    MirroringResolver, SpotifySourceManager, YandexMusicSourceManager, YoutubeSearchManager,
    youtube,
};
use crate::dependency::{CrossDependency, SourceSlot};
use crate::instance::BackendInstance;

/// Construct `kind` if its toggle is on.
pub fn build(
    kind: BackendKind,
    config: &TunesrcConfig,
) -> Result<Option<BackendInstance>, TunesrcError> {
    if !config.sources.is_enabled(kind) {
        tracing::debug!(backend = %kind, "backend disabled, skipping construction");
        return Ok(None);
    }

    let instance = match kind {
        BackendKind::Spotify => {
            let manager = Arc::new(spotify_manager(config)?);
            BackendInstance::new(&manager)
                .with_source(&manager)
                .with_search(&manager)
                .with_lyrics(&manager)
        }
        BackendKind::AppleMusic => {
            let manager = Arc::new(apple_music_manager(config)?);
            BackendInstance::new(&manager)
                .with_source(&manager)
                .with_search(&manager)
        }
        BackendKind::Deezer => {
            let manager = Arc::new(DeezerAudioSourceManager::new(
                config.deezer.master_decryption_key.clone().unwrap_or_default(),
            )?);
            BackendInstance::new(&manager)
                .with_source(&manager)
                .with_search(&manager)
                .with_lyrics(&manager)
        }
        BackendKind::YandexMusic => {
            let manager = Arc::new(YandexMusicSourceManager::new(
                config.yandexmusic.access_token.clone().unwrap_or_default(),
            )?);
            BackendInstance::new(&manager).with_source(&manager)
        }
        BackendKind::FloweryTts => {
            let manager = Arc::new(flowery_tts_manager(config));
            BackendInstance::new(&manager).with_source(&manager)
        }
        BackendKind::Youtube => {
            let slot = SourceSlot::empty(youtube::AUDIO_SOURCE_NAME);
            let manager = Arc::new(YoutubeSearchManager::new(
                slot.clone(),
                config.youtube.country_code.clone(),
            ));
            BackendInstance::new(&manager)
                .with_search(&manager)
                .with_lyrics(&manager)
                .with_dependency(CrossDependency::new(kind, slot))
        }
    };

    tracing::debug!(
        backend = %kind,
        capabilities = ?instance.capabilities(),
        "constructed backend"
    );
    Ok(Some(instance))
}

/// Construct every enabled backend, in declaration order.
///
/// The first construction error aborts; nothing is returned partially.
pub fn build_enabled(config: &TunesrcConfig) -> Result<Vec<BackendInstance>, TunesrcError> {
    let mut instances = Vec::new();
    for kind in BackendKind::ALL {
        if let Some(instance) = build(kind, config)? {
            instances.push(instance);
        }
    }
    Ok(instances)
}

/// `Some(value)` when it is strictly positive, `None` otherwise.
///
/// Every numeric override goes through here so zero and negative values
/// keep the backend default.
pub fn positive_override<T: PartialOrd + Default>(value: T) -> Option<T> {
    (value > T::default()).then_some(value)
}

fn mirroring(config: &TunesrcConfig) -> Result<MirroringResolver, TunesrcError> {
    MirroringResolver::new(&config.plugin.providers)
}

/// The concrete Spotify manager, without wrapping it in an instance.
pub fn spotify_manager(config: &TunesrcConfig) -> Result<SpotifySourceManager, TunesrcError> {
    let section = &config.spotify;
    let mut manager = SpotifySourceManager::new(
        section.client_id.clone().unwrap_or_default(),
        section.client_secret.clone().unwrap_or_default(),
        section.sp_dc.clone(),
        section.country_code.clone(),
        mirroring(config)?,
    )?;
    if let Some(limit) = positive_override(section.playlist_load_limit) {
        tracing::debug!(backend = "spotify", limit, "playlist page limit override");
        manager.set_playlist_page_limit(limit.unsigned_abs());
    }
    if let Some(limit) = positive_override(section.album_load_limit) {
        tracing::debug!(backend = "spotify", limit, "album page limit override");
        manager.set_album_page_limit(limit.unsigned_abs());
    }
    Ok(manager)
}

pub fn apple_music_manager(
    config: &TunesrcConfig,
) -> Result<AppleMusicSourceManager, TunesrcError> {
    let section = &config.applemusic;
    let mut manager = AppleMusicSourceManager::new(
        mirroring(config)?,
        section.media_api_token.clone(),
        section.country_code.clone(),
    );
    if let Some(limit) = positive_override(section.playlist_load_limit) {
        tracing::debug!(backend = "applemusic", limit, "playlist page limit override");
        manager.set_playlist_page_limit(limit.unsigned_abs());
    }
    if let Some(limit) = positive_override(section.album_load_limit) {
        tracing::debug!(backend = "applemusic", limit, "album page limit override");
        manager.set_album_page_limit(limit.unsigned_abs());
    }
    Ok(manager)
}

pub fn flowery_tts_manager(config: &TunesrcConfig) -> FloweryTtsSourceManager {
    let section = &config.flowerytts;
    let mut manager = FloweryTtsSourceManager::new(section.voice.clone());
    if section.translate {
        manager.set_translate(true);
    }
    if let Some(silence) = positive_override(section.silence) {
        manager.set_silence(silence.unsigned_abs());
    }
    if let Some(speed) = positive_override(section.speed) {
        manager.set_speed(speed);
    }
    if let Some(format) = section.audio_format {
        manager.set_audio_format(format);
    }
    manager
}

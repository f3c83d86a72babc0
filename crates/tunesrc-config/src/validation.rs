// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic validation that serde attributes cannot express.
//!
//! Only enabled backends are validated. A disabled backend's section is never
//! read, so a half-filled section for a switched-off backend is not an error.

use tunesrc_core::BackendKind;

use crate::diagnostic::ConfigError;
use crate::model::TunesrcConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted Flowery TTS speed range when a speed is set.
pub const FLOWERY_SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.5..=10.0;

/// Mirror template placeholders.
pub const PROVIDER_PLACEHOLDERS: &[&str] = &["%ISRC%", "%QUERY%"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first.
pub fn validate_config(config: &TunesrcConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.plugin.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "plugin.log_level `{}` must be one of: {}",
                config.plugin.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for kind in config.sources.enabled() {
        for key in missing_credentials(config, kind) {
            errors.push(ConfigError::MissingKey {
                key: key.to_string(),
            });
        }
    }

    let sources = &config.sources;
    if sources.spotify {
        check_country_code(&mut errors, "spotify.country_code", &config.spotify.country_code);
    }
    if sources.applemusic {
        check_country_code(
            &mut errors,
            "applemusic.country_code",
            &config.applemusic.country_code,
        );
    }
    if sources.youtube {
        check_country_code(&mut errors, "youtube.country_code", &config.youtube.country_code);
    }

    if sources.flowerytts {
        let speed = config.flowerytts.speed;
        if speed > 0.0 && !FLOWERY_SPEED_RANGE.contains(&speed) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "flowerytts.speed must be between {} and {}, got {speed}",
                    FLOWERY_SPEED_RANGE.start(),
                    FLOWERY_SPEED_RANGE.end()
                ),
            });
        }
    }

    if sources.spotify || sources.applemusic {
        if config.plugin.providers.is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugin.providers must list at least one mirror template".to_string(),
            });
        }
        for (i, template) in config.plugin.providers.iter().enumerate() {
            if !has_placeholder(template) {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "plugin.providers[{i}] `{template}` must contain {}",
                        PROVIDER_PLACEHOLDERS.join(" or ")
                    ),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "configuration validation failed");
        Err(errors)
    }
}

/// Required credential keys of `kind` that are absent or blank.
///
/// Independent of the toggle; callers decide whether `kind` is enabled.
pub fn missing_credentials(config: &TunesrcConfig, kind: BackendKind) -> Vec<&'static str> {
    let required: Vec<(&'static str, Option<&str>)> = match kind {
        BackendKind::Spotify => vec![
            ("spotify.client_id", config.spotify.client_id.as_deref()),
            ("spotify.client_secret", config.spotify.client_secret.as_deref()),
        ],
        BackendKind::Deezer => vec![(
            "deezer.master_decryption_key",
            config.deezer.master_decryption_key.as_deref(),
        )],
        BackendKind::YandexMusic => vec![(
            "yandexmusic.access_token",
            config.yandexmusic.access_token.as_deref(),
        )],
        BackendKind::AppleMusic | BackendKind::FloweryTts | BackendKind::Youtube => Vec::new(),
    };

    required
        .into_iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(key, _)| key)
        .collect()
}

/// Whether a mirror template contains a placeholder.
pub fn has_placeholder(template: &str) -> bool {
    PROVIDER_PLACEHOLDERS.iter().any(|p| template.contains(p))
}

fn check_country_code(errors: &mut Vec<ConfigError>, key: &str, code: &str) {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.push(ConfigError::Validation {
            message: format!("{key} must be a two-letter country code, got `{code}`"),
        });
    }
}

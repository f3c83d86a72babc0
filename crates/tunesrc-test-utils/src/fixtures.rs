// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ready-made configurations.

use tunesrc_config::TunesrcConfig;
use tunesrc_core::BackendKind;

/// Defaults with every credential filled in and only `enabled` switched on.
pub fn config_with(enabled: &[BackendKind]) -> TunesrcConfig {
    let mut config = TunesrcConfig::default();
    config.spotify.client_id = Some("test-client-id".into());
    config.spotify.client_secret = Some("test-client-secret".into());
    config.spotify.sp_dc = Some("test-sp-dc".into());
    config.applemusic.media_api_token = Some("test-media-api-token".into());
    config.deezer.master_decryption_key = Some("test-master-key".into());
    config.yandexmusic.access_token = Some("test-access-token".into());
    for kind in enabled {
        config.sources.set_enabled(*kind, true);
    }
    config
}

/// TOML enabling `enabled`, with credentials for every backend.
pub fn toml_with(enabled: &[BackendKind]) -> String {
    let toggles: String = BackendKind::ALL
        .iter()
        .map(|kind| format!("{kind} = {}\n", enabled.contains(kind)))
        .collect();
    format!(
        r#"[sources]
{toggles}
[spotify]
client_id = "test-client-id"
client_secret = "test-client-secret"

[deezer]
master_decryption_key = "test-master-key"

[yandexmusic]
access_token = "test-access-token"
"#
    )
}

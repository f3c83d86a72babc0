// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. `/etc/tunesrc/tunesrc.toml`
//! 3. `~/.config/tunesrc/tunesrc.toml`
//! 4. `./tunesrc.toml`
//! 5. `TUNESRC_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TunesrcConfig;

/// Top-level sections, used to turn `TUNESRC_SPOTIFY_CLIENT_ID` into
/// `spotify.client_id`.
const SECTIONS: &[&str] = &[
    "plugin",
    "sources",
    "spotify",
    "applemusic",
    "deezer",
    "yandexmusic",
    "flowerytts",
    "youtube",
];

/// Config file locations from lowest to highest precedence.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/tunesrc/tunesrc.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("tunesrc/tunesrc.toml"));
    }
    paths.push(PathBuf::from("tunesrc.toml"));
    paths
}

/// Build the full layered Figment without extracting it.
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(TunesrcConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard file hierarchy with env overrides.
pub fn load_config() -> Result<TunesrcConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<TunesrcConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TunesrcConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, still honouring env overrides.
pub fn load_config_from_path(path: &Path) -> Result<TunesrcConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TunesrcConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider mapping the leading section with `Env::map`.
///
/// `Env::split("_")` would turn `client_id` into `client.id`, so only the
/// first underscore after a known section name becomes a dot.
fn env_provider() -> Env {
    Env::prefixed("TUNESRC_").map(|key| map_env_key(key.as_str()).into())
}

/// Figment hands keys over with the variable's original case.
fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}

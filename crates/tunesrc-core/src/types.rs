// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the capability traits and the plugin.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies one pluggable backend.
///
/// Variant order is the declaration order every registration pass follows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Spotify,
    AppleMusic,
    Deezer,
    YandexMusic,
    FloweryTts,
    Youtube,
}

impl BackendKind {
    /// All backend kinds in declaration order.
    pub const ALL: [BackendKind; 6] = [
        BackendKind::Spotify,
        BackendKind::AppleMusic,
        BackendKind::Deezer,
        BackendKind::YandexMusic,
        BackendKind::FloweryTts,
        BackendKind::Youtube,
    ];

    /// Human-readable name used in log lines and CLI output.
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::Spotify => "Spotify",
            BackendKind::AppleMusic => "Apple Music",
            BackendKind::Deezer => "Deezer",
            BackendKind::YandexMusic => "Yandex Music",
            BackendKind::FloweryTts => "Flowery TTS",
            BackendKind::Youtube => "YouTube",
        }
    }
}

/// One of the host registries a backend can be registered into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Source,
    Search,
    Lyrics,
}

impl Capability {
    /// Capabilities in registration pass order.
    pub const ALL: [Capability; 3] = [Capability::Source, Capability::Search, Capability::Lyrics];
}

/// Result types a search provider can return.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Track,
    Album,
    Artist,
    Playlist,
    Text,
}

/// Health status reported by backend health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Backend is fully operational.
    Healthy,
    /// Backend works but some feature is unavailable.
    Degraded(String),
    /// Backend cannot serve requests.
    Unhealthy(String),
}

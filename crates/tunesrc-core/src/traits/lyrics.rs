// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lyrics capability.

/// A provider that fetches lyrics for tracks.
pub trait LyricsProvider: Send + Sync + 'static {
    /// Source name the lyrics come from.
    fn source_name(&self) -> &str;

    /// Whether lyrics can be served for a track loaded by `track_source`.
    fn supports_track_source(&self, track_source: &str) -> bool {
        track_source == self.source_name()
    }
}

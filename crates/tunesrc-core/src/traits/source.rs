// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Playback source capability.

/// A provider that resolves identifiers into playable audio.
///
/// Host-side sources owned by other plugins implement this too, which is
/// what lets the source registry be searched by name.
pub trait SourceProvider: Send + Sync + 'static {
    /// Unique source name, e.g. `spotify`.
    fn source_name(&self) -> &str;

    /// Whether this source recognises the identifier (URL or search prefix).
    fn can_load(&self, identifier: &str) -> bool;
}

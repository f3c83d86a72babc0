// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registries the host framework provides.
//!
//! The plugin only registers into these and looks sources up by name; it
//! never owns or implements the host's registries.

use std::sync::Arc;

use crate::traits::{LyricsProvider, SearchProvider, SourceProvider};

/// The host's playback source registry.
pub trait SourceRegistry {
    /// Register a source. Registering the same source twice is a caller error.
    fn register_source_manager(&mut self, source: Arc<dyn SourceProvider>);

    /// Look up an already registered source by name.
    fn source(&self, source_name: &str) -> Option<Arc<dyn SourceProvider>>;
}

/// The host's search registry.
pub trait SearchRegistry {
    fn register_search_manager(&mut self, search: Arc<dyn SearchProvider>);
}

/// The host's lyrics registry.
pub trait LyricsRegistry {
    fn register_lyrics_manager(&mut self, lyrics: Arc<dyn LyricsProvider>);
}

/// A host exposing all three registries.
pub trait HostRegistries: SourceRegistry + SearchRegistry + LyricsRegistry {}

impl<T: SourceRegistry + SearchRegistry + LyricsRegistry + ?Sized> HostRegistries for T {}

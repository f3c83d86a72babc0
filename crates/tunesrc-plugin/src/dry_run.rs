// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-process host that records registrations instead of serving traffic.
//!
//! Used by the `check` command and by tests to observe exactly which
//! registry calls initialization makes, and in what order.

use std::sync::Arc;

use tunesrc_core::{
    Capability, LyricsProvider, LyricsRegistry, SearchProvider, SearchRegistry, SourceProvider,
    SourceRegistry,
};

/// A source owned by the host or another plugin.
#[derive(Debug, Clone)]
pub struct HostSource {
    name: String,
}

impl HostSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SourceProvider for HostSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn can_load(&self, _identifier: &str) -> bool {
        false
    }
}

/// One registry call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub capability: Capability,
    pub source_name: String,
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}", self.capability, self.source_name)
    }
}

#[derive(Default)]
pub struct DryRunHost {
    sources: Vec<Arc<dyn SourceProvider>>,
    search: Vec<Arc<dyn SearchProvider>>,
    lyrics: Vec<Arc<dyn LyricsProvider>>,
    registrations: Vec<Registration>,
}

impl DryRunHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a source as if another plugin had done it. Not recorded.
    pub fn with_host_source(mut self, source: impl SourceProvider) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// Every registration call, in call order.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Source names registered for one capability, in call order.
    pub fn names(&self, capability: Capability) -> Vec<String> {
        self.registrations
            .iter()
            .filter(|r| r.capability == capability)
            .map(|r| r.source_name.clone())
            .collect()
    }

    pub fn search_managers(&self) -> &[Arc<dyn SearchProvider>] {
        &self.search
    }

    pub fn lyrics_managers(&self) -> &[Arc<dyn LyricsProvider>] {
        &self.lyrics
    }

    fn record(&mut self, capability: Capability, source_name: &str) {
        self.registrations.push(Registration {
            capability,
            source_name: source_name.to_string(),
        });
    }
}

impl std::fmt::Debug for DryRunHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DryRunHost")
            .field("sources", &self.sources.len())
            .field("registrations", &self.registrations)
            .finish()
    }
}

impl SourceRegistry for DryRunHost {
    fn register_source_manager(&mut self, source: Arc<dyn SourceProvider>) {
        self.record(Capability::Source, source.source_name());
        self.sources.push(source);
    }

    fn source(&self, source_name: &str) -> Option<Arc<dyn SourceProvider>> {
        self.sources
            .iter()
            .find(|s| s.source_name() == source_name)
            .cloned()
    }
}

impl SearchRegistry for DryRunHost {
    fn register_search_manager(&mut self, search: Arc<dyn SearchProvider>) {
        self.record(Capability::Search, search.source_name());
        self.search.push(search);
    }
}

impl LyricsRegistry for DryRunHost {
    fn register_lyrics_manager(&mut self, lyrics: Arc<dyn LyricsProvider>) {
        self.record(Capability::Lyrics, lyrics.source_name());
        self.lyrics.push(lyrics);
    }
}

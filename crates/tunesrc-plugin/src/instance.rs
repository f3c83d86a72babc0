// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A constructed backend and its explicit capability set.
//!
//! Capabilities are stored as optional trait objects. Each `with_*` builder
//! only accepts a backend implementing that capability's trait, so an
//! instance can never carry a capability its type lacks.

use std::fmt;
use std::sync::Arc;

use tunesrc_core::{
    BackendAdapter, BackendKind, Capability, LyricsProvider, SearchProvider, SourceProvider,
};

use crate::dependency::{CrossDependency, DependencyState};

pub struct BackendInstance {
    kind: BackendKind,
    adapter: Arc<dyn BackendAdapter>,
    source: Option<Arc<dyn SourceProvider>>,
    search: Option<Arc<dyn SearchProvider>>,
    lyrics: Option<Arc<dyn LyricsProvider>>,
    dependencies: Vec<CrossDependency>,
}

impl BackendInstance {
    /// An instance with no capabilities yet.
    pub fn new<T: BackendAdapter>(backend: &Arc<T>) -> Self {
        let adapter: Arc<dyn BackendAdapter> = backend.clone();
        Self {
            kind: adapter.kind(),
            adapter,
            source: None,
            search: None,
            lyrics: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_source<T: SourceProvider>(mut self, backend: &Arc<T>) -> Self {
        let source: Arc<dyn SourceProvider> = backend.clone();
        self.source = Some(source);
        self
    }

    pub fn with_search<T: SearchProvider>(mut self, backend: &Arc<T>) -> Self {
        let search: Arc<dyn SearchProvider> = backend.clone();
        self.search = Some(search);
        self
    }

    pub fn with_lyrics<T: LyricsProvider>(mut self, backend: &Arc<T>) -> Self {
        let lyrics: Arc<dyn LyricsProvider> = backend.clone();
        self.lyrics = Some(lyrics);
        self
    }

    pub fn with_dependency(mut self, dependency: CrossDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn adapter(&self) -> &Arc<dyn BackendAdapter> {
        &self.adapter
    }

    pub fn source(&self) -> Option<&Arc<dyn SourceProvider>> {
        self.source.as_ref()
    }

    pub fn search(&self) -> Option<&Arc<dyn SearchProvider>> {
        self.search.as_ref()
    }

    pub fn lyrics(&self) -> Option<&Arc<dyn LyricsProvider>> {
        self.lyrics.as_ref()
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Source => self.source.is_some(),
            Capability::Search => self.search.is_some(),
            Capability::Lyrics => self.lyrics.is_some(),
        }
    }

    /// Present capabilities, in pass order.
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.has(*capability))
            .collect()
    }

    pub fn dependencies(&self) -> &[CrossDependency] {
        &self.dependencies
    }

    pub(crate) fn dependencies_mut(&mut self) -> &mut [CrossDependency] {
        &mut self.dependencies
    }

    /// True once every dependency of this backend has resolved.
    pub fn dependencies_resolved(&self) -> bool {
        self.dependencies
            .iter()
            .all(|dep| dep.state() == DependencyState::Resolved)
    }
}

impl fmt::Debug for BackendInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendInstance")
            .field("kind", &self.kind)
            .field("capabilities", &self.capabilities())
            .field("dependencies", &self.dependencies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::SourceSlot;
    use tunesrc_test_utils::MockBackend;

    #[test]
    fn capabilities_follow_builders() {
        let backend = Arc::new(MockBackend::new(BackendKind::Deezer));
        let instance = BackendInstance::new(&backend)
            .with_source(&backend)
            .with_lyrics(&backend);

        assert_eq!(instance.kind(), BackendKind::Deezer);
        assert_eq!(
            instance.capabilities(),
            vec![Capability::Source, Capability::Lyrics]
        );
        assert!(!instance.has(Capability::Search));
        assert!(instance.search().is_none());
    }

    #[test]
    fn capability_objects_share_the_backend() {
        let backend = Arc::new(MockBackend::new(BackendKind::Spotify));
        let instance = BackendInstance::new(&backend).with_source(&backend);
        // adapter + source + the local handle
        assert_eq!(Arc::strong_count(&backend), 3);
        drop(instance);
        assert_eq!(Arc::strong_count(&backend), 1);
    }

    #[test]
    fn dependencies_resolved_is_vacuously_true() {
        let backend = Arc::new(MockBackend::new(BackendKind::FloweryTts));
        let plain = BackendInstance::new(&backend);
        assert!(plain.dependencies_resolved());

        let dependent = BackendInstance::new(&backend).with_dependency(CrossDependency::new(
            BackendKind::FloweryTts,
            SourceSlot::empty("youtube"),
        ));
        assert!(!dependent.dependencies_resolved());
        assert_eq!(dependent.dependencies()[0].requires(), "youtube");
    }
}

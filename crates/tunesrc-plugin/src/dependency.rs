// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-backend dependencies on host-side sources.
//!
//! A backend that needs another plugin's source holds a [`SourceSlot`] from
//! construction. The slot stays empty until the orchestrator resolves the
//! matching [`CrossDependency`], which happens once, after every source has
//! been registered and before any search or lyrics registration.

use std::fmt;
use std::sync::{Arc, OnceLock};

use strum::Display;
use tunesrc_core::{BackendKind, SourceProvider, SourceRegistry, TunesrcError};

/// A shared, write-once handle to a host source.
///
/// Clones share the same cell, so the backend sees the source as soon as
/// the orchestrator fills it.
#[derive(Clone)]
pub struct SourceSlot {
    source_name: &'static str,
    cell: Arc<OnceLock<Arc<dyn SourceProvider>>>,
}

impl SourceSlot {
    pub fn empty(source_name: &'static str) -> Self {
        Self {
            source_name,
            cell: Arc::new(OnceLock::new()),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    pub fn get(&self) -> Option<Arc<dyn SourceProvider>> {
        self.cell.get().cloned()
    }

    pub fn is_filled(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns false if the slot was already filled.
    fn fill(&self, source: Arc<dyn SourceProvider>) -> bool {
        self.cell.set(source).is_ok()
    }
}

impl fmt::Debug for SourceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceSlot")
            .field("source_name", &self.source_name)
            .field("filled", &self.is_filled())
            .finish()
    }
}

/// Resolution state. `Resolved` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DependencyState {
    Unresolved,
    Resolved,
    Failed,
}

/// "`dependent` requires the host source named by its slot".
#[derive(Debug)]
pub struct CrossDependency {
    dependent: BackendKind,
    slot: SourceSlot,
    state: DependencyState,
}

impl CrossDependency {
    pub fn new(dependent: BackendKind, slot: SourceSlot) -> Self {
        Self {
            dependent,
            slot,
            state: DependencyState::Unresolved,
        }
    }

    pub fn dependent(&self) -> BackendKind {
        self.dependent
    }

    pub fn requires(&self) -> &'static str {
        self.slot.source_name()
    }

    pub fn state(&self) -> DependencyState {
        self.state
    }

    /// Look the required source up and fill the slot.
    ///
    /// The lookup runs at most once; later calls report the terminal state.
    pub fn resolve<R: SourceRegistry + ?Sized>(&mut self, registry: &R) -> Result<(), TunesrcError> {
        match self.state {
            DependencyState::Resolved => return Ok(()),
            DependencyState::Failed => return Err(self.unresolved()),
            DependencyState::Unresolved => {}
        }

        match registry.source(self.requires()) {
            Some(source) => {
                if !self.slot.fill(source) {
                    tracing::warn!(
                        backend = %self.dependent,
                        requires = self.requires(),
                        "source slot already filled, keeping existing source"
                    );
                }
                self.state = DependencyState::Resolved;
                tracing::info!(
                    backend = %self.dependent,
                    requires = self.requires(),
                    "resolved host source"
                );
                Ok(())
            }
            None => {
                self.state = DependencyState::Failed;
                tracing::error!(
                    backend = %self.dependent,
                    requires = self.requires(),
                    "required host source is not registered"
                );
                Err(self.unresolved())
            }
        }
    }

    fn unresolved(&self) -> TunesrcError {
        TunesrcError::UnresolvedDependency {
            backend: self.dependent,
            requires: self.requires().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use tunesrc_test_utils::MockSource;

    /// Source registry counting lookups.
    struct CountingRegistry {
        sources: Vec<Arc<dyn SourceProvider>>,
        lookups: Cell<usize>,
    }

    impl CountingRegistry {
        fn with(sources: Vec<Arc<dyn SourceProvider>>) -> Self {
            Self {
                sources,
                lookups: Cell::new(0),
            }
        }
    }

    impl SourceRegistry for CountingRegistry {
        fn register_source_manager(&mut self, source: Arc<dyn SourceProvider>) {
            self.sources.push(source);
        }

        fn source(&self, source_name: &str) -> Option<Arc<dyn SourceProvider>> {
            self.lookups.set(self.lookups.get() + 1);
            self.sources
                .iter()
                .find(|s| s.source_name() == source_name)
                .cloned()
        }
    }

    #[test]
    fn resolves_and_fills_shared_slot() {
        let slot = SourceSlot::empty("youtube");
        let backend_view = slot.clone();
        let mut dep = CrossDependency::new(BackendKind::Youtube, slot);
        let registry = CountingRegistry::with(vec![Arc::new(MockSource::new("youtube"))]);

        assert_eq!(dep.state(), DependencyState::Unresolved);
        dep.resolve(&registry).unwrap();
        assert_eq!(dep.state(), DependencyState::Resolved);
        assert!(backend_view.is_filled());
        assert_eq!(backend_view.get().unwrap().source_name(), "youtube");
    }

    #[test]
    fn missing_source_fails_terminally() {
        let slot = SourceSlot::empty("youtube");
        let mut dep = CrossDependency::new(BackendKind::Youtube, slot.clone());
        let registry = CountingRegistry::with(vec![Arc::new(MockSource::new("soundcloud"))]);

        let err = dep.resolve(&registry).unwrap_err();
        assert!(matches!(
            err,
            TunesrcError::UnresolvedDependency { backend: BackendKind::Youtube, ref requires }
                if requires == "youtube"
        ));
        assert_eq!(dep.state(), DependencyState::Failed);
        assert!(!slot.is_filled());

        // Terminal: no second lookup even if the source shows up later.
        let late = CountingRegistry::with(vec![Arc::new(MockSource::new("youtube"))]);
        assert!(dep.resolve(&late).is_err());
        assert_eq!(late.lookups.get(), 0);
    }

    #[test]
    fn lookup_happens_once() {
        let mut dep = CrossDependency::new(BackendKind::Youtube, SourceSlot::empty("youtube"));
        let registry = CountingRegistry::with(vec![Arc::new(MockSource::new("youtube"))]);
        dep.resolve(&registry).unwrap();
        dep.resolve(&registry).unwrap();
        assert_eq!(registry.lookups.get(), 1);
    }

    #[test]
    fn slot_debug_reports_fill_state() {
        let slot = SourceSlot::empty("youtube");
        assert!(format!("{slot:?}").contains("filled: false"));
    }
}

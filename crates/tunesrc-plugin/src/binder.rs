// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability registry binder.
//!
//! One pass per capability. A pass walks the instances in the order given
//! (declaration order from the orchestrator) and registers each one whose
//! capability slot is present. Instances without the capability are skipped,
//! so nothing lands in a registry it does not implement.

use tunesrc_core::{Capability, HostRegistries, LyricsRegistry, SearchRegistry, SourceRegistry};

use crate::instance::BackendInstance;

/// Register every instance's source capability. Returns the number registered.
pub fn bind_source_pass<R: SourceRegistry + ?Sized>(
    instances: &[BackendInstance],
    registry: &mut R,
) -> usize {
    let mut registered = 0;
    for instance in instances {
        if let Some(source) = instance.source() {
            registry.register_source_manager(source.clone());
            log_registration(instance, Capability::Source);
            registered += 1;
        }
    }
    registered
}

/// Register every instance's search capability. Returns the number registered.
pub fn bind_search_pass<R: SearchRegistry + ?Sized>(
    instances: &[BackendInstance],
    registry: &mut R,
) -> usize {
    let mut registered = 0;
    for instance in instances {
        if let Some(search) = instance.search() {
            registry.register_search_manager(search.clone());
            log_registration(instance, Capability::Search);
            registered += 1;
        }
    }
    registered
}

/// Register every instance's lyrics capability. Returns the number registered.
pub fn bind_lyrics_pass<R: LyricsRegistry + ?Sized>(
    instances: &[BackendInstance],
    registry: &mut R,
) -> usize {
    let mut registered = 0;
    for instance in instances {
        if let Some(lyrics) = instance.lyrics() {
            registry.register_lyrics_manager(lyrics.clone());
            log_registration(instance, Capability::Lyrics);
            registered += 1;
        }
    }
    registered
}

/// Bind all capabilities of a single instance, source first.
///
/// Only for backends without cross-dependencies; the orchestrator runs the
/// passes separately so sources of every backend exist before any search
/// registration.
pub fn bind<H: HostRegistries + ?Sized>(instance: &BackendInstance, host: &mut H) -> usize {
    let instances = std::slice::from_ref(instance);
    bind_source_pass(instances, host)
        + bind_search_pass(instances, host)
        + bind_lyrics_pass(instances, host)
}

fn log_registration(instance: &BackendInstance, capability: Capability) {
    tracing::info!(
        backend = %instance.kind(),
        capability = %capability,
        "registered {capability} manager"
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dry_run::DryRunHost;
    use tracing_test::traced_test;
    use tunesrc_core::BackendKind;
    use tunesrc_test_utils::MockBackend;

    fn instance(kind: BackendKind, caps: &[Capability]) -> BackendInstance {
        let backend = Arc::new(MockBackend::new(kind));
        let mut instance = BackendInstance::new(&backend);
        for cap in caps {
            instance = match cap {
                Capability::Source => instance.with_source(&backend),
                Capability::Search => instance.with_search(&backend),
                Capability::Lyrics => instance.with_lyrics(&backend),
            };
        }
        instance
    }

    #[test]
    fn passes_skip_missing_capabilities() {
        let instances = vec![
            instance(BackendKind::Spotify, &[Capability::Source, Capability::Search]),
            instance(BackendKind::Youtube, &[Capability::Search, Capability::Lyrics]),
        ];
        let mut host = DryRunHost::new();

        assert_eq!(bind_source_pass(&instances, &mut host), 1);
        assert_eq!(bind_search_pass(&instances, &mut host), 2);
        assert_eq!(bind_lyrics_pass(&instances, &mut host), 1);

        assert_eq!(host.names(Capability::Source), vec!["spotify"]);
        assert_eq!(host.names(Capability::Search), vec!["spotify", "youtube"]);
        assert_eq!(host.names(Capability::Lyrics), vec!["youtube"]);
    }

    #[test]
    fn single_instance_bind_registers_source_first() {
        let deezer = instance(
            BackendKind::Deezer,
            &[Capability::Lyrics, Capability::Search, Capability::Source],
        );
        let mut host = DryRunHost::new();
        assert_eq!(bind(&deezer, &mut host), 3);

        let order: Vec<Capability> = host.registrations().iter().map(|r| r.capability).collect();
        assert_eq!(
            order,
            vec![Capability::Source, Capability::Search, Capability::Lyrics]
        );
    }

    #[test]
    fn no_capabilities_no_calls() {
        let bare = instance(BackendKind::FloweryTts, &[]);
        let mut host = DryRunHost::new();
        assert_eq!(bind(&bare, &mut host), 0);
        assert!(host.registrations().is_empty());
    }

    #[test]
    #[traced_test]
    fn one_event_per_registration() {
        let instances = vec![instance(BackendKind::YandexMusic, &[Capability::Source])];
        let mut host = DryRunHost::new();
        bind_source_pass(&instances, &mut host);

        assert!(logs_contain("registered source manager"));
        assert!(logs_contain("backend=yandexmusic"));
        assert!(logs_contain("capability=source"));
    }
}

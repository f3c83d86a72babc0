// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin orchestrator.
//!
//! Initialization is a fixed sequence of passes over every constructed
//! backend:
//!
//! 1. construct enabled backends in declaration order
//! 2. register all source capabilities
//! 3. resolve cross-dependencies against the source registry
//! 4. register all search capabilities
//! 5. register all lyrics capabilities
//!
//! Passes are never interleaved per backend. Each step checks the current
//! [`Phase`] and refuses to run out of order. A failed dependency moves the
//! plugin to [`Phase::Failed`]; registrations already made stay in place.

use strum::Display;
use tunesrc_config::TunesrcConfig;
use tunesrc_core::{
    BackendKind, HealthStatus, HostRegistries, LyricsRegistry, SearchRegistry, SourceRegistry,
    TunesrcError,
};

use crate::binder;
use crate::factory;
use crate::instance::BackendInstance;

/// Where the plugin is in its initialization sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Constructed,
    SourcesBound,
    DependenciesResolved,
    SearchBound,
    LyricsBound,
    Failed,
}

/// Registration counts from a full initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub sources: usize,
    pub dependencies: usize,
    pub search: usize,
    pub lyrics: usize,
}

impl InitSummary {
    pub fn registrations(&self) -> usize {
        self.sources + self.search + self.lyrics
    }
}

/// Owns every constructed backend for the life of the process.
#[derive(Debug)]
pub struct TunesrcPlugin {
    instances: Vec<BackendInstance>,
    phase: Phase,
}

impl TunesrcPlugin {
    /// Construct every enabled backend. No registry is touched yet.
    pub fn new(config: &TunesrcConfig) -> Result<Self, TunesrcError> {
        Ok(Self::from_instances(factory::build_enabled(config)?))
    }

    /// Wrap already constructed instances, reordered into declaration order.
    pub fn from_instances(mut instances: Vec<BackendInstance>) -> Self {
        instances.sort_by_key(BackendInstance::kind);
        Self {
            instances,
            phase: Phase::Constructed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn instances(&self) -> &[BackendInstance] {
        &self.instances
    }

    pub fn instance(&self, kind: BackendKind) -> Option<&BackendInstance> {
        self.instances.iter().find(|i| i.kind() == kind)
    }

    /// Source pass.
    pub fn bind_sources<R: SourceRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
    ) -> Result<usize, TunesrcError> {
        self.advance(Phase::Constructed)?;
        let count = binder::bind_source_pass(&self.instances, registry);
        self.phase = Phase::SourcesBound;
        Ok(count)
    }

    /// Resolve every cross-dependency against the now complete source
    /// registry. The first failure aborts.
    pub fn resolve_dependencies<R: SourceRegistry + ?Sized>(
        &mut self,
        registry: &R,
    ) -> Result<usize, TunesrcError> {
        self.advance(Phase::SourcesBound)?;
        let resolved = self
            .instances
            .iter_mut()
            .flat_map(|instance| instance.dependencies_mut().iter_mut())
            .try_fold(0, |count, dependency| {
                dependency.resolve(registry).map(|()| count + 1)
            });

        match resolved {
            Ok(count) => {
                self.phase = Phase::DependenciesResolved;
                Ok(count)
            }
            Err(err) => {
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }

    /// Search pass.
    pub fn bind_search<R: SearchRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
    ) -> Result<usize, TunesrcError> {
        self.advance(Phase::DependenciesResolved)?;
        let count = binder::bind_search_pass(&self.instances, registry);
        self.phase = Phase::SearchBound;
        Ok(count)
    }

    /// Lyrics pass.
    pub fn bind_lyrics<R: LyricsRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
    ) -> Result<usize, TunesrcError> {
        self.advance(Phase::SearchBound)?;
        let count = binder::bind_lyrics_pass(&self.instances, registry);
        self.phase = Phase::LyricsBound;
        Ok(count)
    }

    /// Run every remaining pass against one host.
    pub fn initialize<H: HostRegistries + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> Result<InitSummary, TunesrcError> {
        let sources = self.bind_sources(host)?;
        let dependencies = self.resolve_dependencies(&*host)?;
        let search = self.bind_search(host)?;
        let lyrics = self.bind_lyrics(host)?;

        let summary = InitSummary {
            sources,
            dependencies,
            search,
            lyrics,
        };
        tracing::info!(
            backends = self.instances.len(),
            registrations = summary.registrations(),
            "tunesrc plugin initialized"
        );
        Ok(summary)
    }

    /// Health of every constructed backend, in declaration order.
    pub async fn health_report(&self) -> Vec<(BackendKind, HealthStatus)> {
        let mut report = Vec::with_capacity(self.instances.len());
        for instance in &self.instances {
            let status = match instance.adapter().health_check().await {
                Ok(status) => status,
                Err(err) => HealthStatus::Unhealthy(err.to_string()),
            };
            report.push((instance.kind(), status));
        }
        report
    }

    fn advance(&self, expected: Phase) -> Result<(), TunesrcError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TunesrcError::PhaseOrder {
                expected: expected.to_string(),
                current: self.phase.to_string(),
            })
        }
    }
}

/// Construct and fully initialize the plugin against `host`.
pub fn initialize<H: HostRegistries + ?Sized>(
    config: &TunesrcConfig,
    host: &mut H,
) -> Result<TunesrcPlugin, TunesrcError> {
    let mut plugin = TunesrcPlugin::new(config)?;
    plugin.initialize(host)?;
    Ok(plugin)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dry_run::{DryRunHost, HostSource};
    use tunesrc_core::Capability;
    use tunesrc_test_utils::MockBackend;
    use tunesrc_test_utils::fixtures::config_with;

    #[test]
    fn phases_must_run_in_order() {
        let mut plugin = TunesrcPlugin::new(&config_with(&[BackendKind::Deezer])).unwrap();
        let mut host = DryRunHost::new();

        let err = plugin.bind_search(&mut host).unwrap_err();
        assert!(matches!(
            err,
            TunesrcError::PhaseOrder { ref expected, ref current }
                if expected == "dependencies-resolved" && current == "constructed"
        ));
        assert!(host.registrations().is_empty());

        plugin.bind_sources(&mut host).unwrap();
        assert!(plugin.bind_sources(&mut host).is_err());
        assert_eq!(plugin.phase(), Phase::SourcesBound);
    }

    #[test]
    fn full_initialization_reaches_lyrics_bound() {
        let config = config_with(&[BackendKind::Spotify, BackendKind::Youtube]);
        let mut host = DryRunHost::new().with_host_source(HostSource::new("youtube"));
        let plugin = initialize(&config, &mut host).unwrap();

        assert_eq!(plugin.phase(), Phase::LyricsBound);
        assert!(plugin.instance(BackendKind::Youtube).unwrap().dependencies_resolved());
        assert!(plugin.instance(BackendKind::Deezer).is_none());
    }

    #[test]
    fn failed_dependency_is_terminal() {
        let config = config_with(&[BackendKind::Youtube]);
        let mut plugin = TunesrcPlugin::new(&config).unwrap();
        let mut host = DryRunHost::new();

        assert!(plugin.initialize(&mut host).is_err());
        assert_eq!(plugin.phase(), Phase::Failed);
        // Nothing can be bound after a failure.
        assert!(plugin.bind_search(&mut host).is_err());
        assert!(plugin.bind_lyrics(&mut host).is_err());
        assert!(host.names(Capability::Search).is_empty());
    }

    #[test]
    fn registries_receive_the_backend_objects() {
        let config = config_with(&[BackendKind::Deezer]);
        let mut host = DryRunHost::new();
        let plugin = initialize(&config, &mut host).unwrap();
        let deezer = plugin.instance(BackendKind::Deezer).unwrap();

        assert_eq!(host.search_managers().len(), 1);
        assert_eq!(host.lyrics_managers().len(), 1);
        assert!(Arc::ptr_eq(&host.search_managers()[0], deezer.search().unwrap()));
        assert!(Arc::ptr_eq(&host.lyrics_managers()[0], deezer.lyrics().unwrap()));
        assert!(Arc::ptr_eq(
            &host.source("deezer").unwrap(),
            deezer.source().unwrap()
        ));
    }

    #[test]
    fn summary_counts_every_pass() {
        let config = config_with(&[BackendKind::Deezer, BackendKind::FloweryTts]);
        let mut plugin = TunesrcPlugin::new(&config).unwrap();
        let summary = plugin.initialize(&mut DryRunHost::new()).unwrap();
        assert_eq!(
            summary,
            InitSummary {
                sources: 2,
                dependencies: 0,
                search: 1,
                lyrics: 1,
            }
        );
        assert_eq!(summary.registrations(), 4);
    }

    #[test]
    fn from_instances_restores_declaration_order() {
        let yandex = Arc::new(MockBackend::new(BackendKind::YandexMusic));
        let spotify = Arc::new(MockBackend::new(BackendKind::Spotify));
        let plugin = TunesrcPlugin::from_instances(vec![
            BackendInstance::new(&yandex).with_source(&yandex),
            BackendInstance::new(&spotify).with_source(&spotify),
        ]);
        let kinds: Vec<BackendKind> = plugin.instances().iter().map(|i| i.kind()).collect();
        assert_eq!(kinds, vec![BackendKind::Spotify, BackendKind::YandexMusic]);
    }

    #[tokio::test]
    async fn health_report_covers_constructed_backends() {
        let mut config = config_with(&[BackendKind::Spotify, BackendKind::AppleMusic]);
        config.spotify.sp_dc = None;
        config.applemusic.media_api_token = Some("token".into());
        let plugin = TunesrcPlugin::new(&config).unwrap();

        let report = plugin.health_report().await;
        assert_eq!(report.len(), 2);
        assert!(matches!(report[0], (BackendKind::Spotify, HealthStatus::Degraded(_))));
        assert_eq!(report[1], (BackendKind::AppleMusic, HealthStatus::Healthy));
    }
}

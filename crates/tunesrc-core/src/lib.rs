// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the tunesrc plugin.
//!
//! Defines the capability traits backends implement, the registry traits the
//! host provides, and the error and common types shared by every crate in
//! the workspace.

pub mod error;
pub mod traits;
pub mod types;

pub use error::TunesrcError;
pub use types::{BackendKind, Capability, HealthStatus, SearchType};

pub use traits::{
    BackendAdapter, HostRegistries, LyricsProvider, LyricsRegistry, SearchProvider,
    SearchRegistry, SourceProvider, SourceRegistry,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn backend_kind_declaration_order() {
        let mut sorted = BackendKind::ALL;
        sorted.sort();
        assert_eq!(sorted, BackendKind::ALL);
        assert_eq!(BackendKind::ALL[0], BackendKind::Spotify);
        assert_eq!(BackendKind::ALL[5], BackendKind::Youtube);
    }

    #[test]
    fn backend_kind_string_forms_match_config_sections() {
        let names: Vec<String> = BackendKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "spotify",
                "applemusic",
                "deezer",
                "yandexmusic",
                "flowerytts",
                "youtube"
            ]
        );
        for kind in BackendKind::ALL {
            assert_eq!(BackendKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn backend_kind_serde_uses_section_names() {
        let json = serde_json::to_string(&BackendKind::AppleMusic).unwrap();
        assert_eq!(json, "\"applemusic\"");
        let parsed: BackendKind = serde_json::from_str("\"flowerytts\"").unwrap();
        assert_eq!(parsed, BackendKind::FloweryTts);
    }

    #[test]
    fn capability_pass_order() {
        assert_eq!(
            Capability::ALL,
            [Capability::Source, Capability::Search, Capability::Lyrics]
        );
        assert_eq!(Capability::Lyrics.to_string(), "lyrics");
    }

    #[test]
    fn unresolved_dependency_message_names_both_sides() {
        let err = TunesrcError::UnresolvedDependency {
            backend: BackendKind::Youtube,
            requires: "youtube".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("youtube requires"));
        assert!(msg.contains("`youtube` source"));
        assert!(err.is_configuration());
        assert!(!TunesrcError::Internal("x".into()).is_configuration());
    }

    struct Prefixed;

    impl SearchProvider for Prefixed {
        fn source_name(&self) -> &str {
            "prefixed"
        }

        fn search_prefixes(&self) -> &[&'static str] {
            &["pxsearch:", "pxrec:"]
        }

        fn search_types(&self) -> &[SearchType] {
            &[SearchType::Track]
        }
    }

    impl LyricsProvider for Prefixed {
        fn source_name(&self) -> &str {
            "prefixed"
        }
    }

    #[test]
    fn search_provider_routes_by_prefix() {
        assert!(Prefixed.handles_query("pxsearch:never gonna"));
        assert!(Prefixed.handles_query("pxrec:seed_tracks=1"));
        assert!(!Prefixed.handles_query("spsearch:never gonna"));
    }

    #[test]
    fn lyrics_provider_defaults_to_own_source() {
        assert!(Prefixed.supports_track_source("prefixed"));
        assert!(!Prefixed.supports_track_source("deezer"));
    }

    #[test]
    fn all_traits_are_object_safe() {
        fn _source(_: &dyn SourceProvider) {}
        fn _search(_: &dyn SearchProvider) {}
        fn _lyrics(_: &dyn LyricsProvider) {}
        fn _backend(_: &dyn BackendAdapter) {}
        fn _host(_: &mut dyn HostRegistries) {}
    }
}

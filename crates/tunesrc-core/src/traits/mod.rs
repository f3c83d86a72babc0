// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability and host registry traits.
//!
//! A backend implements [`BackendAdapter`] plus any subset of
//! [`SourceProvider`], [`SearchProvider`] and [`LyricsProvider`]. The host
//! exposes one registry per capability.

pub mod backend;
pub mod host;
pub mod lyrics;
pub mod search;
pub mod source;

pub use backend::BackendAdapter;
pub use host::{HostRegistries, LyricsRegistry, SearchRegistry, SourceRegistry};
pub use lyrics::LyricsProvider;
pub use search::SearchProvider;
pub use source::SourceProvider;

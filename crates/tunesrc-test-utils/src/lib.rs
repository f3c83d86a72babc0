// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for tunesrc.
//!
//! Mock backends and host sources for deterministic tests without any
//! streaming service.
//!
//! # Components
//!
//! - [`MockBackend`] - backend implementing every capability trait
//! - [`MockSource`] - a host-side source registered by some other plugin
//! - [`fixtures`] - configurations with credentials filled in

pub mod fixtures;
pub mod mock_backend;
pub mod mock_source;

pub use mock_backend::MockBackend;
pub use mock_source::MockSource;

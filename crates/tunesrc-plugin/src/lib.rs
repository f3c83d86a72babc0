// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend wiring for the tunesrc plugin.
//!
//! Builds the enabled music backends from configuration and registers each
//! capability they provide (source, search, lyrics) into the host's
//! registries, in declaration order, one pass per capability. Backends that
//! depend on a host source are resolved between the source and search passes.

pub mod backends;
pub mod binder;
pub mod catalog;
pub mod dependency;
pub mod dry_run;
pub mod factory;
pub mod instance;
pub mod orchestrator;
pub mod status;

pub use catalog::{BackendDescriptor, builtin_catalog, descriptor, search_catalog};
pub use dependency::{CrossDependency, DependencyState, SourceSlot};
pub use dry_run::{DryRunHost, HostSource, Registration};
pub use instance::BackendInstance;
pub use orchestrator::{InitSummary, Phase, TunesrcPlugin, initialize};
pub use status::{BackendReport, BackendStatus, backend_statuses};

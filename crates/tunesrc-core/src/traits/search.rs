// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search capability.

use crate::types::SearchType;

/// A provider that answers catalog searches.
pub trait SearchProvider: Send + Sync + 'static {
    /// Source name the search results belong to.
    fn source_name(&self) -> &str;

    /// Query prefixes routed to this provider, e.g. `spsearch:`.
    fn search_prefixes(&self) -> &[&'static str];

    /// Result types this provider can return.
    fn search_types(&self) -> &[SearchType];

    /// Whether a query with this prefix belongs here.
    fn handles_query(&self, query: &str) -> bool {
        self.search_prefixes()
            .iter()
            .any(|prefix| query.starts_with(prefix))
    }
}

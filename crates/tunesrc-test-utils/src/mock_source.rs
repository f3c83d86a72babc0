// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock host-side audio source.

use tunesrc_core::SourceProvider;

/// A named source that loads identifiers starting with `<name>:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSource {
    name: String,
}

impl MockSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SourceProvider for MockSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn can_load(&self, identifier: &str) -> bool {
        identifier
            .strip_prefix(self.name.as_str())
            .is_some_and(|rest| rest.starts_with(':'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_own_scheme_only() {
        let source = MockSource::new("youtube");
        assert!(source.can_load("youtube:dQw4w9WgXcQ"));
        assert!(!source.can_load("youtubemusic:abc"));
        assert!(!source.can_load("spotify:track:1"));
    }
}

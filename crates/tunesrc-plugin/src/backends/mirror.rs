// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mirror query templates for catalog-only backends.
//!
//! Catalog backends (Spotify, Apple Music) have metadata but no audio. A track
//! is played by searching another source with these templates, in order.

use tunesrc_config::validation::has_placeholder;
use tunesrc_core::TunesrcError;

pub const ISRC_PLACEHOLDER: &str = "%ISRC%";
pub const QUERY_PLACEHOLDER: &str = "%QUERY%";

/// Ordered mirror search templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirroringResolver {
    providers: Vec<String>,
}

impl MirroringResolver {
    /// Fails when the list is empty or a template has no placeholder.
    pub fn new(providers: &[String]) -> Result<Self, TunesrcError> {
        if providers.is_empty() {
            return Err(TunesrcError::Config(
                "plugin.providers must list at least one mirror template".to_string(),
            ));
        }
        if let Some(bad) = providers.iter().find(|p| !has_placeholder(p)) {
            return Err(TunesrcError::Config(format!(
                "mirror template `{bad}` contains neither {ISRC_PLACEHOLDER} nor {QUERY_PLACEHOLDER}"
            )));
        }
        Ok(Self {
            providers: providers.to_vec(),
        })
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Expand every usable template for one track, in order.
    ///
    /// ISRC templates are skipped when the track has no ISRC.
    pub fn queries(&self, isrc: Option<&str>, query: &str) -> Vec<String> {
        let isrc = isrc.map(str::trim).filter(|isrc| !isrc.is_empty());
        self.providers
            .iter()
            .filter_map(|template| {
                if template.contains(ISRC_PLACEHOLDER) {
                    isrc.map(|isrc| template.replace(ISRC_PLACEHOLDER, isrc))
                } else {
                    Some(template.replace(QUERY_PLACEHOLDER, query))
                }
            })
            .collect()
    }
}

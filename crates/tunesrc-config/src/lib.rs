// SPDX-FileCopyrightText: 2026 tunesrc Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the tunesrc plugin.
//!
//! TOML parsing with `deny_unknown_fields`, a layered file hierarchy with
//! `TUNESRC_*` environment overrides, validation of enabled backends, and
//! miette diagnostics with typo suggestions.
//!
//! ```no_run
//! let config = tunesrc_config::load_and_validate().expect("config errors");
//! println!("spotify enabled: {}", config.sources.spotify);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TunesrcConfig;
pub use validation::{missing_credentials, validate_config};

/// Load from the standard hierarchy and validate.
pub fn load_and_validate() -> Result<TunesrcConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &read_sources(&loader::config_file_paths()),
        )),
    }
}

/// Load one explicit file (plus environment) and validate.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<TunesrcConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &read_sources(&[path.to_path_buf()]),
        )),
    }
}

/// Load from `path` (or the standard hierarchy) without validating.
///
/// For commands that report on a configuration, such as which enabled
/// backends still lack credentials. Parse and type errors are still returned.
pub fn load_unvalidated(path: Option<&std::path::Path>) -> Result<TunesrcConfig, Vec<ConfigError>> {
    let (loaded, paths) = match path {
        Some(path) => (loader::load_config_from_path(path), vec![path.to_path_buf()]),
        None => (loader::load_config(), loader::config_file_paths()),
    };
    loaded.map_err(|err| diagnostic::figment_to_config_errors(err, &read_sources(&paths)))
}

/// Load a TOML string and validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<TunesrcConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the files that exist, keyed by the path figment reports.
fn read_sources(paths: &[std::path::PathBuf]) -> Vec<(String, String)> {
    paths
        .iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(path).ok()?;
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.clone());
            Some((absolute.display().to_string(), content))
        })
        .collect()
}

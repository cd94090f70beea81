//! Registry data embedded in the binary at compile time.
//!
//! Enables zero-configuration usage: every command works against the DSC
//! documentation site data unless `--registry` names another file.

use crate::config::loader::{LoaderOptions, RegistryLoader};
use crate::error::ConfigError;
use crate::registry::Registry;

/// Origin label used in logs and errors for the embedded data.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Raw YAML of the embedded data set.
pub const BUILTIN_REGISTRY_YAML: &str = include_str!("../../data/registry.yaml");

impl Registry {
    /// Builds the registry of the DSC documentation site.
    ///
    /// Data issues in the embedded set are reported by [`Registry::validate`]
    /// like any other data; they never prevent construction.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` only if the embedded YAML is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        let options = LoaderOptions {
            strict: false,
            ..LoaderOptions::default()
        };
        RegistryLoader::new(options)
            .load_from_str(BUILTIN_REGISTRY_YAML, BUILTIN_ORIGIN)
            .map(|loaded| loaded.registry)
    }
}

//! Configuration module
//!
//! Handles loading of registry data files: the YAML schema and the one-time
//! loading pipeline that turns a file into a validated `Registry`.

pub mod loader;
pub mod schema;

pub use loader::{LoadResult, LoaderOptions, RegistryLimits, RegistryLoader};
pub use schema::{CategoryConfig, RegistryConfig, ShadowingMap, SlugTable, TitleTable};

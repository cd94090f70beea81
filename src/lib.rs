//! `dsc-docs` - navigation registry for the DSC documentation site
//!
//! Maps documentation slugs to topic identifiers and display titles, per
//! category, and checks the data for integrity problems. Rendering and
//! routing are left to the consumers of the registry.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod registry;

pub use error::{DocsError, LookupError, Result};
pub use registry::{Category, DisplayTitle, Registry, TopicId};

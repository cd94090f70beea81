//! `version` command handler

use serde_json::json;

use super::print_json;
use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::DocsError;
use crate::registry::builtin::BUILTIN_REGISTRY_YAML;

/// Print the crate version and the size of the embedded data set.
///
/// # Errors
///
/// Returns `DocsError::Json` if the JSON report cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), DocsError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let embedded_bytes = BUILTIN_REGISTRY_YAML.len();

    match args.format {
        OutputFormat::Human => {
            println!("{name} {version} (embedded registry: {embedded_bytes} bytes)");
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "name": name,
            "version": version,
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "embedded_registry_bytes": embedded_bytes,
        })),
    }
}

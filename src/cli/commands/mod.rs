//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler. Data
//! commands load the registry once and hand it to their handler by
//! reference; `completions` and `version` never touch it.

pub mod completions;
pub mod lookup;
pub mod validate;
pub mod version;

use std::path::Path;

use crate::cli::args::{Cli, Commands};
use crate::config::loader::{LoaderOptions, RegistryLoader};
use crate::error::DocsError;
use crate::registry::Registry;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded or the dispatched
/// command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), DocsError> {
    let registry = cli.registry.as_deref();
    match &cli.command {
        Commands::Resolve(args) => lookup::resolve(&load_registry(registry)?, args),
        Commands::Title(args) => lookup::title(&load_registry(registry)?, args),
        Commands::List(args) => lookup::list(&load_registry(registry)?, args),
        Commands::Images(args) => lookup::images(&load_registry(registry)?, args),
        Commands::Validate(args) => validate::run(&load_registry(registry)?, args),
        Commands::Completions(args) => {
            completions::run(args);
            Ok(())
        }
        Commands::Version(args) => version::run(args),
    }
}

/// Loads the registry named on the command line, or the embedded one.
///
/// Integrity issues never block loading here: lookups keep working and
/// `validate` reports them.
///
/// # Errors
///
/// Returns a config error if the file is missing, unreadable, or malformed.
pub fn load_registry(path: Option<&Path>) -> Result<Registry, DocsError> {
    let Some(path) = path else {
        tracing::debug!("using embedded registry");
        return Ok(Registry::builtin()?);
    };

    let options = LoaderOptions {
        strict: false,
        ..LoaderOptions::default()
    };
    let loaded = RegistryLoader::new(options).load(path)?;
    Ok(loaded.registry)
}

/// Pretty-prints a JSON document to stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), DocsError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

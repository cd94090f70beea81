//! Registry loader
//!
//! Loading is a one-time, fallible initialization phase that completes
//! before any lookup is served:
//! 1. Size check against `RegistryLimits`
//! 2. Read, strip UTF-8 BOM, reject empty input
//! 3. YAML parsing into `RegistryConfig`
//! 4. Construction of the typed `Registry`
//! 5. Validation (warnings logged; errors fatal in strict mode)

use crate::config::schema::RegistryConfig;
use crate::error::{ConfigError, Severity, ValidationIssue};
use crate::registry::Registry;
use crate::registry::validation::has_errors;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Options for the registry loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Reject data whose validation reports error-severity issues.
    pub strict: bool,

    /// Limits for registry size.
    pub limits: RegistryLimits,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            strict: true,
            limits: RegistryLimits::default(),
        }
    }
}

/// Limits for registry size to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct RegistryLimits {
    /// Maximum registry file size in bytes.
    pub max_registry_size: usize,

    /// Maximum number of categories.
    pub max_categories: usize,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self {
            max_registry_size: env_or("DSC_DOCS_MAX_REGISTRY_SIZE", 10 * 1024 * 1024),
            max_categories: env_or("DSC_DOCS_MAX_CATEGORIES", 256),
        }
    }
}

/// Result of loading a registry.
#[derive(Debug)]
pub struct LoadResult {
    /// The constructed registry.
    pub registry: Registry,

    /// Everything validation reported, warnings included.
    pub issues: Vec<ValidationIssue>,
}

/// Registry loader.
#[derive(Debug, Clone, Default)]
pub struct RegistryLoader {
    options: LoaderOptions,
}

impl RegistryLoader {
    /// Creates a new loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads a registry file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or exceeds the size limit
    /// - The file is empty or is not valid registry YAML
    /// - A name is blank
    /// - Strict mode is on and validation reports errors
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|e| unreadable(path, e))?;

        let max = self.options.limits.max_registry_size;
        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > max {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {max} bytes"),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: e.to_string(),
            },
            _ => unreadable(path, e),
        })?;

        tracing::info!(registry = %path.display(), bytes = file_size, "loading registry");
        self.load_from_str(&raw, &path.display().to_string())
    }

    /// Loads a registry from YAML text. `origin` names the source in logs
    /// and errors.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryLoader::load`], minus file access.
    pub fn load_from_str(&self, content: &str, origin: &str) -> Result<LoadResult, ConfigError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        if content.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: PathBuf::from(origin),
            });
        }

        let config: RegistryConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: PathBuf::from(origin),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        if config.categories.len() > self.options.limits.max_categories {
            return Err(ConfigError::InvalidValue {
                field: "categories".to_string(),
                value: config.categories.len().to_string(),
                expected: format!(
                    "at most {} categories (set DSC_DOCS_MAX_CATEGORIES to raise the limit)",
                    self.options.limits.max_categories
                ),
            });
        }

        let registry = Registry::from_config(config)?;
        let issues = registry.validate();

        // Findings are reported in full by `validate`; keep lookups quiet.
        for issue in &issues {
            tracing::debug!(origin, "{issue}");
        }
        if !issues.is_empty() {
            tracing::info!(
                origin,
                issues = issues.len(),
                "registry has integrity issues; run `dsc-docs validate` for details"
            );
        }

        if self.options.strict && has_errors(&issues) {
            return Err(ConfigError::ValidationFailed {
                path: origin.to_string(),
                issues: issues
                    .into_iter()
                    .filter(|i| i.severity == Severity::Error)
                    .collect(),
            });
        }

        tracing::debug!(
            origin,
            categories = registry.categories().count(),
            images = registry.list_images().len(),
            "registry loaded"
        );

        Ok(LoadResult { registry, issues })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Classifies a failed file access: a missing file is reported as such,
/// anything else as an I/O failure.
fn unreadable(path: &Path, err: std::io::Error) -> ConfigError {
    if err.kind() == ErrorKind::NotFound {
        ConfigError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Reads a numeric setting from the environment, falling back to `default`.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================

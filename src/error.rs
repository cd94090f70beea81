//! Error types for `dsc-docs`
//!
//! Lookup misses, registry loading failures, and the validation findings
//! reported by `Registry::validate`, together with the CLI exit codes they
//! map to.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `dsc-docs` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (validation found errors)
    pub const ERROR: i32 = 1;

    /// Registry data could not be loaded or failed strict validation
    pub const CONFIG_ERROR: i32 = 2;

    /// Registry file exists but cannot be read (permission denied, not a file)
    pub const IO_ERROR: i32 = 3;

    /// Lookup miss (unknown category, slug, or identifier)
    pub const NOT_FOUND: i32 = 4;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `dsc-docs` operations.
///
/// Aggregates the domain errors and maps each of them to an exit code.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Registry loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Lookup miss
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// `validate` found error-severity issues
    #[error("{count} validation error(s) found")]
    ValidationFailed {
        /// Number of error-severity issues
        count: usize,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Io { .. }) => ExitCode::IO_ERROR,
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Lookup(_) => ExitCode::NOT_FOUND,
            Self::ValidationFailed { .. } | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Lookup Errors
// ============================================================================

/// A registry lookup that found nothing.
///
/// Always recoverable: an unresolved slug means a broken external link and
/// callers are expected to render a "page not found" view for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The category is not registered.
    #[error("unknown category '{category}'")]
    UnknownCategory {
        /// Requested category name
        category: String,
    },

    /// The slug is absent from the category's slug map.
    #[error("slug '{slug}' not found in category '{category}'{}", did_you_mean(.suggestion.as_deref()))]
    SlugNotFound {
        /// Category that was searched
        category: String,
        /// Requested slug
        slug: String,
        /// Closest known slug, if one is near enough
        suggestion: Option<String>,
    },

    /// The identifier has no title in the category.
    #[error("topic '{topic}' not found in category '{category}'")]
    TopicNotFound {
        /// Category that was searched
        category: String,
        /// Requested topic identifier
        topic: String,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Registry loading errors.
///
/// Any of these aborts initialization; a partially loaded registry is never
/// handed to consumers.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the registry file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Registry file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Registry file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Registry file has no content
    #[error("registry file is empty: {path}")]
    Empty {
        /// Path to the empty file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// Strict loading rejected data with error-severity issues
    #[error("validation failed for {path}: {} error(s)", .issues.len())]
    ValidationFailed {
        /// Path (or `<builtin>`) of the rejected data
        path: String,
        /// Error-severity issues that caused the rejection
        issues: Vec<ValidationIssue>,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// What kind of integrity problem a `ValidationIssue` describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Identifier is listed but has no display title.
    MissingTitle {
        /// The orphan identifier
        topic: String,
    },
    /// Display title is blank.
    EmptyTitle {
        /// Identifier with the blank title
        topic: String,
    },
    /// Title registered for an identifier that is not in the ordered list.
    UnlistedTitle {
        /// Identifier that only appears in the title map
        topic: String,
    },
    /// Slug points at an identifier that is not in the ordered list.
    DanglingSlug {
        /// The slug
        slug: String,
        /// Its unlisted target
        target: String,
    },
    /// Identifier listed more than once in the same category.
    DuplicateIdentifier {
        /// The repeated identifier
        topic: String,
        /// How many times it is listed
        occurrences: usize,
    },
    /// Slug key given more than once with different targets.
    InconsistentSlug {
        /// The slug
        slug: String,
        /// Every target given for it, in declaration order
        targets: Vec<String>,
    },
    /// Identifier given more than one distinct title.
    InconsistentTitle {
        /// The identifier
        topic: String,
        /// Every title given for it, in declaration order
        titles: Vec<String>,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle { topic } => write!(f, "identifier '{topic}' has no display title"),
            Self::EmptyTitle { topic } => write!(f, "identifier '{topic}' has an empty title"),
            Self::UnlistedTitle { topic } => {
                write!(f, "title given for '{topic}', which is not in the ordered list")
            }
            Self::DanglingSlug { slug, target } => write!(
                f,
                "slug '{slug}' points to '{target}', which is not in the ordered list"
            ),
            Self::DuplicateIdentifier { topic, occurrences } => {
                write!(f, "identifier '{topic}' is listed {occurrences} times")
            }
            Self::InconsistentSlug { slug, targets } => write!(
                f,
                "slug '{slug}' maps to several identifiers ({}); the last one wins",
                targets.join(", ")
            ),
            Self::InconsistentTitle { topic, titles } => write!(
                f,
                "identifier '{topic}' has several titles ({}); the last one wins",
                titles.join(", ")
            ),
        }
    }
}

/// A single data-integrity finding from `Registry::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Category the issue was found in
    pub category: String,
    /// What is wrong
    pub kind: IssueKind,
    /// Severity level of the issue
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} in {}", self.severity, self.kind, self.category)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Potential issue; lookups still behave predictably
    Warning,
    /// Broken invariant; some lookup will fail or mislead
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `dsc-docs` operations.
pub type Result<T> = std::result::Result<T, DocsError>;

// ============================================================================
// Tests
// ============================================================================

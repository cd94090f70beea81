//! `validate` command handler
//!
//! Reports every integrity issue in the loaded registry in one pass.

use serde_json::json;

use super::print_json;
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{DocsError, Severity, ValidationIssue};
use crate::registry::Registry;

/// Validate the registry and print all findings.
///
/// Error-severity issues (and, with `--strict`, warnings) make the command
/// fail after everything has been reported.
///
/// # Errors
///
/// Returns `DocsError::ValidationFailed` if failing issues were found.
pub fn run(registry: &Registry, args: &ValidateArgs) -> Result<(), DocsError> {
    let issues = registry.validate();
    let failing = count_failing(&issues, args.strict);
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let errors = issues.len() - warnings;

    tracing::info!(errors, warnings, strict = args.strict, "validation finished");

    match args.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = issues.iter().map(issue_json).collect();
            let report = json!({
                "issues": entries,
                "summary": {
                    "errors": errors,
                    "warnings": warnings,
                    "valid": failing == 0,
                },
            });
            print_json(&report)?;
        }
        OutputFormat::Human => {
            for issue in &issues {
                println!("{issue}");
            }
            if issues.is_empty() {
                println!("Validation passed");
            } else {
                println!("\n{errors} error(s), {warnings} warning(s)");
            }
        }
    }

    if failing > 0 {
        return Err(DocsError::ValidationFailed { count: failing });
    }

    Ok(())
}

/// Counts issues that fail validation under the given strictness.
fn count_failing(issues: &[ValidationIssue], strict: bool) -> usize {
    issues
        .iter()
        .filter(|i| strict || i.severity == Severity::Error)
        .count()
}

fn issue_json(issue: &ValidationIssue) -> serde_json::Value {
    json!({
        "category": issue.category,
        "severity": issue.severity.to_string(),
        "message": issue.kind.to_string(),
    })
}

//! Registry integrity checks.
//!
//! Validation collects every finding in one pass instead of stopping at the
//! first, so a maintainer sees all defects of a data set at once. Nothing is
//! repaired: duplicated identifiers and shadowed slugs stay exactly as given.

use crate::error::{IssueKind, Severity, ValidationIssue};
use crate::registry::{Category, Registry, TopicId};

use indexmap::IndexMap;

/// Registry validator.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every category and returns all findings, in category order.
    pub fn validate(&mut self, registry: &Registry) -> Vec<ValidationIssue> {
        self.issues.clear();

        for category in registry.category_records() {
            self.check_duplicates(category);
            self.check_titles(category);
            self.check_slugs(category);
        }

        let issues = std::mem::take(&mut self.issues);
        tracing::debug!(issues = issues.len(), "registry validated");
        issues
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// Identifiers listed more than once.
    fn check_duplicates(&mut self, category: &Category) {
        let mut counts: IndexMap<&TopicId, usize> = IndexMap::new();
        for id in category.identifiers() {
            *counts.entry(id).or_default() += 1;
        }

        for (id, occurrences) in counts {
            if occurrences > 1 {
                self.add_warning(
                    category,
                    IssueKind::DuplicateIdentifier {
                        topic: id.to_string(),
                        occurrences,
                    },
                );
            }
        }
    }

    /// Orphan identifiers, blank or conflicting titles, and titles nobody lists.
    fn check_titles(&mut self, category: &Category) {
        let mut reported: Vec<&TopicId> = Vec::new();
        for id in category.identifiers() {
            if reported.contains(&id) {
                continue;
            }
            reported.push(id);

            match category.title(id.as_str()) {
                None => self.add_error(
                    category,
                    IssueKind::MissingTitle {
                        topic: id.to_string(),
                    },
                ),
                Some(title) if title.as_str().trim().is_empty() => self.add_error(
                    category,
                    IssueKind::EmptyTitle {
                        topic: id.to_string(),
                    },
                ),
                Some(_) => {}
            }
        }

        for (id, titles) in category.title_collisions() {
            if titles.iter().all(|t| t == &titles[0]) {
                continue;
            }
            self.add_error(
                category,
                IssueKind::InconsistentTitle {
                    topic: id.to_string(),
                    titles: titles.iter().map(ToString::to_string).collect(),
                },
            );
        }

        for (id, _) in category.titles() {
            if !category.lists(id.as_str()) {
                self.add_warning(
                    category,
                    IssueKind::UnlistedTitle {
                        topic: id.to_string(),
                    },
                );
            }
        }
    }

    /// Slug targets outside the ordered list, and slugs given twice.
    fn check_slugs(&mut self, category: &Category) {
        for (slug, target) in category.slugs() {
            if !category.lists(target.as_str()) {
                self.add_warning(
                    category,
                    IssueKind::DanglingSlug {
                        slug: slug.to_string(),
                        target: target.to_string(),
                    },
                );
            }
        }

        for (slug, targets) in category.slug_collisions() {
            // Repeating the same mapping is harmless.
            if targets.iter().all(|t| t == &targets[0]) {
                continue;
            }
            self.add_error(
                category,
                IssueKind::InconsistentSlug {
                    slug: slug.clone(),
                    targets: targets.iter().map(ToString::to_string).collect(),
                },
            );
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn add_error(&mut self, category: &Category, kind: IssueKind) {
        self.issues.push(ValidationIssue {
            category: category.name().to_string(),
            kind,
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, category: &Category, kind: IssueKind) {
        self.issues.push(ValidationIssue {
            category: category.name().to_string(),
            kind,
            severity: Severity::Warning,
        });
    }
}

/// Returns `true` if any issue has error severity.
#[must_use]
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

// ============================================================================
// Tests
// ============================================================================

//! Documentation registry.
//!
//! Per category, the registry holds the ordered topic identifiers that make
//! up the navigation menu, the slug map that resolves external links to
//! those identifiers, and the display titles shown for them. It also keeps
//! the flat set of image assets the site references.
//!
//! A `Registry` is built once from a [`RegistryConfig`] and is read-only
//! afterwards, so a single instance can be shared by reference with any
//! number of readers.

pub mod builtin;
pub mod validation;

use crate::config::schema::RegistryConfig;
use crate::error::{ConfigError, LookupError, ValidationIssue};

use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::{Borrow, Cow};
use std::collections::BTreeSet;
use std::fmt;

/// Largest edit distance at which a known slug is offered as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

// ============================================================================
// Value Types
// ============================================================================

/// Canonical internal name of a documentation page, e.g. `DSC_Configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Wraps an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TopicId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TopicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TopicId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TopicId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable navigation text for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayTitle(String);

impl DisplayTitle {
    /// Wraps a title string.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// The full title.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title cut to at most `max_chars` characters, ending in an
    /// ellipsis when anything was removed.
    #[must_use]
    pub fn truncated(&self, max_chars: usize) -> Cow<'_, str> {
        if self.0.chars().count() <= max_chars {
            return Cow::Borrowed(&self.0);
        }
        if max_chars == 0 {
            return Cow::Borrowed("");
        }
        let kept: String = self.0.chars().take(max_chars - 1).collect();
        Cow::Owned(format!("{}\u{2026}", kept.trim_end()))
    }
}

impl PartialEq<str> for DisplayTitle {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DisplayTitle {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for DisplayTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// One navigational grouping and its three correlated tables.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    identifiers: Vec<TopicId>,
    slugs: IndexMap<String, TopicId>,
    titles: IndexMap<TopicId, DisplayTitle>,
    slug_collisions: IndexMap<String, Vec<TopicId>>,
    title_collisions: IndexMap<TopicId, Vec<DisplayTitle>>,
}

impl Category {
    /// Category name, e.g. `tutorials`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Topic identifiers in menu order, duplicates included.
    #[must_use]
    pub fn identifiers(&self) -> &[TopicId] {
        &self.identifiers
    }

    /// Identifier a slug maps to.
    #[must_use]
    pub fn resolve(&self, slug: &str) -> Option<&TopicId> {
        self.slugs.get(slug)
    }

    /// Display title registered for an identifier.
    #[must_use]
    pub fn title(&self, topic: &str) -> Option<&DisplayTitle> {
        self.titles.get(topic)
    }

    /// Returns `true` if the identifier is in the ordered list.
    #[must_use]
    pub fn lists(&self, topic: &str) -> bool {
        self.identifiers.iter().any(|id| id == topic)
    }

    /// All slug entries in declaration order.
    pub fn slugs(&self) -> impl Iterator<Item = (&str, &TopicId)> {
        self.slugs.iter().map(|(slug, id)| (slug.as_str(), id))
    }

    /// All title entries in declaration order.
    pub fn titles(&self) -> impl Iterator<Item = (&TopicId, &DisplayTitle)> {
        self.titles.iter()
    }

    /// Every slug that resolves to `topic`.
    pub fn slugs_for<'a>(&'a self, topic: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.slugs
            .iter()
            .filter(move |(_, id)| *id == topic)
            .map(|(slug, _)| slug.as_str())
    }

    /// Slugs given more than once, with every target they were given.
    #[must_use]
    pub const fn slug_collisions(&self) -> &IndexMap<String, Vec<TopicId>> {
        &self.slug_collisions
    }

    /// Identifiers given more than one title, with every title they were given.
    #[must_use]
    pub const fn title_collisions(&self) -> &IndexMap<TopicId, Vec<DisplayTitle>> {
        &self.title_collisions
    }

    fn suggest_slug(&self, input: &str) -> Option<String> {
        self.slugs
            .keys()
            .map(|slug| (slug, strsim::damerau_levenshtein(input, slug)))
            .filter(|(_, dist)| *dist <= MAX_SUGGESTION_DISTANCE)
            .min_by_key(|(_, dist)| *dist)
            .map(|(slug, _)| slug.clone())
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable documentation registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    categories: IndexMap<String, Category>,
    images: BTreeSet<String>,
}

impl Registry {
    /// Builds a registry from parsed data.
    ///
    /// Integrity problems (missing titles, dangling slugs, duplicates) are
    /// kept as given and reported by [`Registry::validate`]. Only blank
    /// names, which cannot be looked up at all, are rejected here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank category name,
    /// identifier, slug, slug target, or image filename.
    pub fn from_config(config: RegistryConfig) -> Result<Self, ConfigError> {
        let mut categories = IndexMap::with_capacity(config.categories.len());

        for (name, data) in config.categories {
            require_non_blank("categories", &name)?;
            let location = format!("categories.{name}");

            for id in &data.identifiers {
                require_non_blank(&format!("{location}.identifiers[]"), id)?;
            }
            for (slug, target) in data.slug_to_id.entries() {
                require_non_blank(&format!("{location}.slug_to_id"), slug)?;
                require_non_blank(&format!("{location}.slug_to_id.{slug}"), target)?;
            }
            for id in data.id_to_title.entries().keys() {
                require_non_blank(&format!("{location}.id_to_title"), id)?;
            }

            let slug_collisions = data
                .slug_to_id
                .collisions()
                .iter()
                .map(|(slug, targets)| {
                    (slug.clone(), targets.iter().map(TopicId::new).collect())
                })
                .collect();
            let title_collisions = data
                .id_to_title
                .collisions()
                .iter()
                .map(|(id, titles)| {
                    (
                        TopicId::new(id.clone()),
                        titles.iter().cloned().map(DisplayTitle::new).collect(),
                    )
                })
                .collect();

            let category = Category {
                name: name.clone(),
                identifiers: data.identifiers.into_iter().map(TopicId::new).collect(),
                slugs: data
                    .slug_to_id
                    .entries()
                    .iter()
                    .map(|(slug, target)| (slug.clone(), TopicId::new(target.clone())))
                    .collect(),
                titles: data
                    .id_to_title
                    .entries()
                    .iter()
                    .map(|(id, title)| {
                        (TopicId::new(id.clone()), DisplayTitle::new(title.clone()))
                    })
                    .collect(),
                slug_collisions,
                title_collisions,
            };

            tracing::debug!(
                category = %name,
                identifiers = category.identifiers.len(),
                slugs = category.slugs.len(),
                titles = category.titles.len(),
                "registered category"
            );
            categories.insert(name, category);
        }

        for image in &config.images {
            require_non_blank("images[]", image)?;
        }

        Ok(Self {
            categories,
            images: config.images.into_iter().collect(),
        })
    }

    /// Category names in navigation order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Borrows a category record.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownCategory` if the category is not registered.
    pub fn category(&self, name: &str) -> Result<&Category, LookupError> {
        self.categories.get(name).ok_or_else(|| {
            tracing::debug!(category = name, "unknown category");
            LookupError::UnknownCategory {
                category: name.to_string(),
            }
        })
    }

    /// Resolves an external slug to its topic identifier.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::SlugNotFound` when the slug is absent from the
    /// category's map, with the nearest known slug as a suggestion, or
    /// `LookupError::UnknownCategory`.
    pub fn resolve_slug(&self, category: &str, slug: &str) -> Result<&TopicId, LookupError> {
        let cat = self.category(category)?;
        cat.resolve(slug).ok_or_else(|| {
            let suggestion = cat.suggest_slug(slug);
            tracing::debug!(category, slug, ?suggestion, "unresolved slug");
            LookupError::SlugNotFound {
                category: category.to_string(),
                slug: slug.to_string(),
                suggestion,
            }
        })
    }

    /// Looks up the display title of a topic.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::TopicNotFound` if the identifier has no title in
    /// the category, or `LookupError::UnknownCategory`.
    pub fn title_of(&self, category: &str, topic: &str) -> Result<&DisplayTitle, LookupError> {
        self.category(category)?.title(topic).ok_or_else(|| {
            tracing::debug!(category, topic, "topic has no title");
            LookupError::TopicNotFound {
                category: category.to_string(),
                topic: topic.to_string(),
            }
        })
    }

    /// Resolves a slug and returns the title of the topic it names.
    ///
    /// # Errors
    ///
    /// Returns any error of [`Registry::resolve_slug`] or [`Registry::title_of`].
    pub fn resolve_title(&self, category: &str, slug: &str) -> Result<&DisplayTitle, LookupError> {
        let topic = self.resolve_slug(category, slug)?;
        self.title_of(category, topic.as_str())
    }

    /// Topic identifiers of a category in canonical navigation order.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownCategory` if the category is not registered.
    pub fn list_category(&self, category: &str) -> Result<&[TopicId], LookupError> {
        Ok(self.category(category)?.identifiers())
    }

    /// Known image asset filenames.
    #[must_use]
    pub const fn list_images(&self) -> &BTreeSet<String> {
        &self.images
    }

    /// Checks every integrity invariant and returns all findings.
    ///
    /// An empty result means the data set is well formed. Findings never
    /// change lookup behavior.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validation::Validator::new().validate(self)
    }

    pub(crate) fn category_records(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: "a non-empty string".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CategoryConfig, SlugTable};

    fn reference_config() -> RegistryConfig {
        let identifiers = [
            "DSC_Configuration",
            "DSC_Execution",
            "DSC_Filtering",
            "Command_Options",
            "Road_Map",
            "Terminology",
        ];
        let titles = [
            "Syntax: DSC configuration",
            "Syntax: DSC execution",
            "Syntax: DSC filter",
            "Command interface",
            "Road map",
            "Terminology",
        ];
        let mut categories = IndexMap::new();
        categories.insert(
            "reference".to_string(),
            CategoryConfig {
                identifiers: identifiers.iter().map(ToString::to_string).collect(),
                slug_to_id: [
                    ("DSC-filter-syntax-1", "DSC_Filtering"),
                    ("Command-interface-1", "Command_Options"),
                    ("Command-options", "Command_Options"),
                ]
                .into_iter()
                .collect(),
                id_to_title: identifiers
                    .iter()
                    .zip(titles)
                    .map(|(id, title)| ((*id).to_string(), title.to_string()))
                    .collect(),
            },
        );
        RegistryConfig {
            categories,
            images: vec!["cmd.png".to_string(), "setup.png".to_string()],
        }
    }

    fn reference_registry() -> Registry {
        Registry::from_config(reference_config()).unwrap()
    }

    #[test]
    fn test_resolve_slug() {
        let registry = reference_registry();
        assert_eq!(
            registry
                .resolve_slug("reference", "DSC-filter-syntax-1")
                .unwrap(),
            "DSC_Filtering"
        );
    }

    #[test]
    fn test_resolve_slug_not_found() {
        let registry = reference_registry();
        let err = registry
            .resolve_slug("reference", "nonexistent-slug")
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::SlugNotFound { ref slug, suggestion: None, .. } if slug == "nonexistent-slug"
        ));
    }

    #[test]
    fn test_resolve_slug_suggests_near_match() {
        let registry = reference_registry();
        let err = registry
            .resolve_slug("reference", "DSC-filter-syntax-2")
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::SlugNotFound {
                category: "reference".to_string(),
                slug: "DSC-filter-syntax-2".to_string(),
                suggestion: Some("DSC-filter-syntax-1".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_category() {
        let registry = reference_registry();
        assert_eq!(
            registry.list_category("faq").unwrap_err(),
            LookupError::UnknownCategory {
                category: "faq".to_string()
            }
        );
        assert!(registry.resolve_slug("faq", "anything").is_err());
        assert!(registry.title_of("faq", "Terminology").is_err());
    }

    #[test]
    fn test_title_of() {
        let registry = reference_registry();
        assert_eq!(
            registry.title_of("reference", "Command_Options").unwrap(),
            "Command interface"
        );
        assert_eq!(
            registry.title_of("reference", "Missing").unwrap_err(),
            LookupError::TopicNotFound {
                category: "reference".to_string(),
                topic: "Missing".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_title_chains_lookups() {
        let registry = reference_registry();
        assert_eq!(
            registry
                .resolve_title("reference", "Command-interface-1")
                .unwrap(),
            "Command interface"
        );
    }

    #[test]
    fn test_list_category_order() {
        let registry = reference_registry();
        let ids: Vec<&str> = registry
            .list_category("reference")
            .unwrap()
            .iter()
            .map(TopicId::as_str)
            .collect();
        assert_eq!(
            ids,
            vec![
                "DSC_Configuration",
                "DSC_Execution",
                "DSC_Filtering",
                "Command_Options",
                "Road_Map",
                "Terminology",
            ]
        );
    }

    #[test]
    fn test_list_images() {
        let registry = reference_registry();
        let images: Vec<&str> = registry.list_images().iter().map(String::as_str).collect();
        assert_eq!(images, vec!["cmd.png", "setup.png"]);
    }

    #[test]
    fn test_slugs_for_collects_cross_links() {
        let registry = reference_registry();
        let category = registry.category("reference").unwrap();
        let slugs: Vec<&str> = category.slugs_for("Command_Options").collect();
        assert_eq!(slugs, vec!["Command-interface-1", "Command-options"]);
    }

    #[test]
    fn test_blank_identifier_rejected() {
        let mut config = reference_config();
        config.categories["reference"]
            .identifiers
            .push("  ".to_string());
        let err = Registry::from_config(config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. }
            if field == "categories.reference.identifiers[]"));
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut config = RegistryConfig::default();
        config
            .categories
            .insert(String::new(), CategoryConfig::default());
        assert!(Registry::from_config(config).is_err());
    }

    #[test]
    fn test_slug_collisions_recorded() {
        let mut config = reference_config();
        config.categories["reference"].slug_to_id = SlugTable::from_iter([
            ("Command-interface-1", "Command_Options"),
            ("Command-interface-1", "Terminology"),
        ]);
        let registry = Registry::from_config(config).unwrap();
        assert_eq!(
            registry
                .resolve_slug("reference", "Command-interface-1")
                .unwrap(),
            "Terminology"
        );
        let collisions = registry
            .category("reference")
            .unwrap()
            .slug_collisions();
        assert_eq!(collisions["Command-interface-1"].len(), 2);
    }

    #[test]
    fn test_title_collisions_recorded() {
        let mut config = reference_config();
        let titles = &mut config.categories["reference"].id_to_title;
        titles.insert("Road_Map", "Roadmap");
        let registry = Registry::from_config(config).unwrap();
        assert_eq!(registry.title_of("reference", "Road_Map").unwrap(), "Roadmap");
        let collisions = registry
            .category("reference")
            .unwrap()
            .title_collisions();
        assert_eq!(collisions["Road_Map"].len(), 2);
    }

    #[test]
    fn test_truncated_title() {
        let title = DisplayTitle::new("An R example: ashr benchmark");
        assert_eq!(title.truncated(100), "An R example: ashr benchmark");
        assert_eq!(title.truncated(13), "An R example\u{2026}");
        assert_eq!(title.truncated(0), "");
    }

    #[test]
    fn test_truncated_title_counts_chars_not_bytes() {
        let title = DisplayTitle::new("Résumé détaillé");
        assert_eq!(title.truncated(7), "Résumé\u{2026}");
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}

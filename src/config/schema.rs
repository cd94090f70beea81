//! Registry data file schema.
//!
//! Plain serde structures mirroring the YAML layout. They carry no
//! invariants of their own; `Registry::from_config` turns them into the
//! typed, read-only registry.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Root of a registry data file.
///
/// ```yaml
/// categories:
///   documentation:
///     identifiers: [Terminology, Command_Options]
///     slug_to_id:
///       Command-interface-1: Command_Options
///     id_to_title:
///       Terminology: Terminology
///       Command_Options: Command interface
/// images: [cmd.png]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Categories in navigation order.
    #[serde(default)]
    pub categories: IndexMap<String, CategoryConfig>,

    /// Image asset filenames.
    #[serde(default)]
    pub images: Vec<String>,
}

/// The three correlated tables of one category.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    /// Topic identifiers in menu order.
    #[serde(default)]
    pub identifiers: Vec<String>,

    /// External slug to topic identifier.
    #[serde(default, alias = "slugToId")]
    pub slug_to_id: SlugTable,

    /// Topic identifier to display title.
    #[serde(default, alias = "idToTitle")]
    pub id_to_title: TitleTable,
}

/// String map that remembers overwritten entries.
///
/// Deserializing keeps the last value for a repeated key, like any map, but
/// the shadowed values are kept in `collisions` so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowingMap {
    entries: IndexMap<String, String>,
    collisions: IndexMap<String, Vec<String>>,
}

/// External slug to topic identifier.
pub type SlugTable = ShadowingMap;

/// Topic identifier to display title.
pub type TitleTable = ShadowingMap;

impl ShadowingMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A repeated key overwrites the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.entries.get(&key) {
            let seen = self
                .collisions
                .entry(key.clone())
                .or_insert_with(|| vec![previous.clone()]);
            seen.push(value.clone());
        }
        self.entries.insert(key, value);
    }

    /// Removes a key and any shadowed values recorded for it.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.collisions.shift_remove(key);
        self.entries.shift_remove(key)
    }

    /// Value currently stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.entries.get(key)
    }

    /// Final entries, in first-seen order.
    #[must_use]
    pub const fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// Every value given for each repeated key, in declaration order.
    #[must_use]
    pub const fn collisions(&self) -> &IndexMap<String, Vec<String>> {
        &self.collisions
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ShadowingMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de> Deserialize<'de> for ShadowingMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadowingMapVisitor;

        impl<'de> Visitor<'de> for ShadowingMapVisitor {
            type Value = ShadowingMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ShadowingMap, A::Error> {
                let mut shadowing = ShadowingMap::new();
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    shadowing.insert(key, value);
                }
                Ok(shadowing)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<ShadowingMap, E> {
                Ok(ShadowingMap::new())
            }
        }

        deserializer.deserialize_map(ShadowingMapVisitor)
    }
}

impl Serialize for ShadowingMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

//! Category to prefix mapping
//!
//! Each [`Messenger`](crate::Messenger) owns one table. A fresh table carries
//! the built-in prefixes and can always be reset back to them.

use super::category::Category;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Built-in prefixes used by [`PrefixTable::default`]
pub const DEFAULT_PREFIXES: [(Category, &str); 8] = [
    (Category::Debug, "[#]"),
    (Category::Err, "[!]"),
    (Category::ErrX, "[!]"),
    (Category::Good, "[+]"),
    (Category::Info, "[*]"),
    (Category::Msg, ""),
    (Category::SubInfo, "[=]"),
    (Category::Warn, "[-]"),
];

/// Mutable mapping from [`Category`] to its display prefix
///
/// # Examples
///
/// ```
/// use status_messenger::{Category, PrefixTable};
///
/// let mut table = PrefixTable::default();
/// assert_eq!(table.get(Category::Good), "[+]");
///
/// table.set(Category::Good, "OK");
/// assert_eq!(table.get(Category::Good), "OK");
///
/// table.reset();
/// assert!(table.is_default());
/// ```
///
/// Serialized as a map keyed by the category's display name, so custom
/// categories appear as `"CUSTOM(n)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    prefixes: HashMap<Category, String>,
}

impl PrefixTable {
    /// A table with no prefixes at all
    pub fn empty() -> Self {
        Self {
            prefixes: HashMap::new(),
        }
    }

    /// Prefix for `category`, empty when none is configured
    pub fn get(&self, category: Category) -> &str {
        self.prefixes
            .get(&category)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, category: Category, prefix: impl Into<String>) {
        self.prefixes.insert(category, prefix.into());
    }

    pub fn remove(&mut self, category: Category) -> Option<String> {
        self.prefixes.remove(&category)
    }

    /// Restore the built-in prefixes, dropping every customization
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES
                .iter()
                .map(|(category, prefix)| (*category, prefix.to_string()))
                .collect(),
        }
    }
}

impl Serialize for PrefixTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sorted: BTreeMap<&Category, &String> = self.prefixes.iter().collect();
        serializer.collect_map(
            sorted
                .into_iter()
                .map(|(category, prefix)| (category.to_string(), prefix)),
        )
    }
}

impl<'de> Deserialize<'de> for PrefixTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        let prefixes = raw
            .into_iter()
            .map(|(key, prefix)| {
                key.parse::<Category>()
                    .map(|category| (category, prefix))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<Category, String>, D::Error>>()?;
        Ok(Self { prefixes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_builtin() {
        let table = PrefixTable::default();
        for category in Category::BUILTIN {
            assert!(table.prefixes.contains_key(&category), "{} missing", category);
        }
        assert_eq!(table.get(Category::Msg), "");
    }

    #[test]
    fn test_unknown_category_has_no_prefix() {
        let table = PrefixTable::default();
        assert_eq!(table.get(Category::Custom(99)), "");
    }

    #[test]
    fn test_set_remove_reset() {
        let mut table = PrefixTable::default();
        table.set(Category::Custom(1), ">>");
        table.set(Category::Warn, "WARN:");
        assert!(!table.is_default());
        assert_eq!(table.get(Category::Custom(1)), ">>");

        assert_eq!(table.remove(Category::Warn).as_deref(), Some("WARN:"));
        assert_eq!(table.get(Category::Warn), "");

        table.reset();
        assert!(table.is_default());
        assert_eq!(table.get(Category::Warn), "[-]");
    }

    #[test]
    fn test_load_from_json() {
        let table: PrefixTable =
            serde_json::from_str(r#"{"Info": "(i)", "Warn": "(!)"}"#).expect("valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Category::Info), "(i)");
        assert_eq!(table.get(Category::Debug), "");
    }

    #[test]
    fn test_json_roundtrip_with_custom_category() {
        let mut table = PrefixTable::default();
        table.set(Category::Custom(1), "[~]");
        table.set(Category::Warn, "WARN:");

        let json = serde_json::to_string(&table).expect("table serializes");
        assert!(json.contains(r#""CUSTOM(1)":"[~]""#), "{}", json);

        let back: PrefixTable = serde_json::from_str(&json).expect("table deserializes");
        assert_eq!(back, table);
        assert_eq!(back.get(Category::Custom(1)), "[~]");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = serde_json::from_str::<PrefixTable>(r#"{"LOUD": "!!"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid category"), "{}", err);
    }
}

//! The fixed placeholder vocabulary shared by all rule templates.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A named slot in a template, written as `__Token__`.
///
/// Declaration order is the iteration order of a [`PlaceholderMap`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum Placeholder {
    #[strum(serialize = "__Package__")]
    Package,
    /// Kebab-case package, used as a directory segment.
    #[strum(serialize = "__package__")]
    PackageDirectory,
    #[strum(serialize = "__Category__")]
    Category,
    #[strum(serialize = "__Description__")]
    Description,
    #[strum(serialize = "__Name__")]
    Name,
    #[strum(serialize = "__CodeBefore__")]
    CodeBefore,
    #[strum(serialize = "__CodeBeforeExample__")]
    CodeBeforeExample,
    #[strum(serialize = "__CodeAfter__")]
    CodeAfter,
    #[strum(serialize = "__CodeAfterExample__")]
    CodeAfterExample,
    #[strum(serialize = "__Resources__")]
    Resources,
    #[strum(serialize = "__TestRuleConfiguration__")]
    TestRuleConfiguration,
    #[strum(serialize = "__RuleConfiguration__")]
    RuleConfiguration,
    #[strum(serialize = "__ConfigurationProperties__")]
    ConfigurationProperties,
    #[strum(serialize = "__ConfigurationConstants__")]
    ConfigurationConstants,
    #[strum(serialize = "__ConfigureClassMethod__")]
    ConfigureClassMethod,
    #[strum(serialize = "__ExtraFileName__")]
    ExtraFileName,
    #[strum(serialize = "__ExtraFileContent__")]
    ExtraFileContent,
    #[strum(serialize = "__ExtraFileContentExample__")]
    ExtraFileContentExample,
    #[strum(serialize = "__NodeTypesPhp__")]
    NodeTypesPhp,
    #[strum(serialize = "__NodeTypesDoc__")]
    NodeTypesDoc,
}

impl Placeholder {
    /// Tokens present in every derived map.
    pub const BASE: [Self; 12] = [
        Self::Package,
        Self::PackageDirectory,
        Self::Category,
        Self::Description,
        Self::Name,
        Self::CodeBefore,
        Self::CodeBeforeExample,
        Self::CodeAfter,
        Self::CodeAfterExample,
        Self::Resources,
        Self::NodeTypesPhp,
        Self::NodeTypesDoc,
    ];

    /// Tokens present only when the recipe carries configuration.
    pub const CONFIGURATION: [Self; 5] = [
        Self::TestRuleConfiguration,
        Self::RuleConfiguration,
        Self::ConfigurationProperties,
        Self::ConfigurationConstants,
        Self::ConfigureClassMethod,
    ];

    /// Tokens present only when the recipe carries an extra file.
    pub const EXTRA_FILE: [Self; 3] =
        [Self::ExtraFileName, Self::ExtraFileContent, Self::ExtraFileContentExample];

    /// Tokens a fully-qualified rule name cannot be rendered without.
    pub const IDENTITY: [Self; 3] = [Self::Package, Self::Category, Self::Name];

    /// The literal token text, e.g. `__Name__`.
    #[must_use]
    pub fn token(self) -> &'static str {
        self.into()
    }
}

/// Derived placeholder values, iterated in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap(BTreeMap<Placeholder, String>);

impl PlaceholderMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning the previous one if any.
    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) -> Option<String> {
        self.0.insert(placeholder, value.into())
    }

    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.0.get(&placeholder).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.0.contains_key(&placeholder)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.0.iter().map(|(placeholder, value)| (*placeholder, value.as_str()))
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.0.keys().copied()
    }

    /// Returns the subset of `required` not present in this map, in the given order.
    #[must_use]
    pub fn missing(&self, required: &[Placeholder]) -> Vec<Placeholder> {
        required.iter().copied().filter(|placeholder| !self.contains(*placeholder)).collect()
    }
}

impl<V: Into<String>> FromIterator<(Placeholder, V)> for PlaceholderMap {
    fn from_iter<I: IntoIterator<Item = (Placeholder, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(placeholder, value)| (placeholder, value.into())).collect())
    }
}

impl<V: Into<String>> Extend<(Placeholder, V)> for PlaceholderMap {
    fn extend<I: IntoIterator<Item = (Placeholder, V)>>(&mut self, iter: I) {
        for (placeholder, value) in iter {
            self.insert(placeholder, value);
        }
    }
}

/// Serializes as a `token -> value` mapping.
impl Serialize for PlaceholderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (placeholder, value) in &self.0 {
            map.serialize_entry(placeholder.token(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tokens_round_trip_through_from_str() {
        for placeholder in Placeholder::iter() {
            assert_eq!(Placeholder::from_str(placeholder.token()), Ok(placeholder));
        }
    }

    #[test]
    fn test_package_tokens_are_case_sensitive() {
        assert_eq!(Placeholder::from_str("__Package__"), Ok(Placeholder::Package));
        assert_eq!(Placeholder::from_str("__package__"), Ok(Placeholder::PackageDirectory));
        assert!(Placeholder::from_str("__PACKAGE__").is_err());
    }

    #[test]
    fn test_groups_partition_the_vocabulary() {
        let grouped = Placeholder::BASE.len()
            + Placeholder::CONFIGURATION.len()
            + Placeholder::EXTRA_FILE.len();
        assert_eq!(grouped, Placeholder::iter().count());
    }

    #[test]
    fn test_missing_reports_in_requested_order() {
        let map: PlaceholderMap = [(Placeholder::Category, "Enum")].into_iter().collect();
        assert_eq!(map.missing(&Placeholder::IDENTITY), [Placeholder::Package, Placeholder::Name]);
    }

    #[test]
    fn test_serializes_with_token_keys_in_vocabulary_order() {
        let map: PlaceholderMap =
            [(Placeholder::Name, "SomeRector"), (Placeholder::Package, "Php80")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"__Package__":"Php80","__Name__":"SomeRector"}"#);
    }
}

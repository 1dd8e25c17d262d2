//! Filter and sort requests driving the results table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected value meaning "no constraint" for an attribute.
pub const ALL_OPTION: &str = "all";

/// Search term plus per-attribute selections, applied before sorting.
///
/// Deserializes from the filter panel payload:
/// `{ "searchTerm": "...", "selectedOptions": { "operatingSystem": "macOS" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Case-insensitive substring of the package name.
    pub search_term: Option<String>,
    /// Attribute key to selected value. Ordered, so evaluation is deterministic.
    pub selected_options: Option<BTreeMap<String, String>>,
}

impl FilterSpec {
    /// Filter that keeps every row.
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter on a package name substring.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            selected_options: None,
        }
    }

    /// Add an attribute selection.
    pub fn with_option(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.selected_options
            .get_or_insert_with(BTreeMap::new)
            .insert(attribute.into(), value.into());
        self
    }

    /// The search term, if present and non-empty.
    pub fn active_search(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// `aria-sort` attribute value.
    pub fn aria(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// Column and direction for ordering filtered rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Row key, e.g. `"size"` or `"packageName"`.
    pub column: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_payload_deserializes() {
        let spec: FilterSpec = serde_json::from_str(
            r#"{"searchTerm":"acro","selectedOptions":{"operatingSystem":"macOS","provider":"all"}}"#,
        )
        .unwrap();
        assert_eq!(spec.active_search(), Some("acro"));
        assert_eq!(
            spec,
            FilterSpec::search("acro")
                .with_option("operatingSystem", "macOS")
                .with_option("provider", "all")
        );
    }

    #[test]
    fn test_partial_payloads() {
        let empty: FilterSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FilterSpec::none());

        let null_term: FilterSpec = serde_json::from_str(r#"{"searchTerm":null}"#).unwrap();
        assert_eq!(null_term.active_search(), None);
        assert_eq!(FilterSpec::search("").active_search(), None);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.toggled().toggled(), SortOrder::Asc);
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), r#""asc""#);
    }
}

//! Results table state and the commands the UI drives it with.
//!
//! [`TableState`] is owned by whoever renders the table. The presentation
//! layer never touches the engine directly: it calls
//! [`TableState::set_filter`], [`TableState::set_sort`] and
//! [`TableState::select_row`], then re-renders from [`TableState::view`].

use super::collation::Collator;
use super::query;
use crate::models::{Dataset, FilterSpec, Row, SortOrder, SortSpec};
use crate::utils::string_to_key;

/// Display columns plus the current filter and sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Column labels as authored, e.g. `"Date Published"`.
    columns: Vec<String>,
    filter: FilterSpec,
    /// Explicitly requested sort; `None` until the user picks a column.
    sort: Option<SortSpec>,
}

impl TableState {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            filter: FilterSpec::default(),
            sort: None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        log::debug!("filter changed: {:?}", filter);
        self.filter = filter;
    }

    /// Sort by `column` (a label or a row key).
    ///
    /// Picking the column that is already sorted flips the direction;
    /// any other column starts descending.
    pub fn set_sort(&mut self, column: &str) {
        let key = string_to_key(column);
        if let Some(current) = self.sort.as_mut().filter(|s| s.column == key) {
            current.order = current.order.toggled();
        } else {
            self.sort = Some(SortSpec::desc(key));
        }
    }

    /// Effective sort: the requested one, or the last column descending.
    pub fn sort(&self) -> SortSpec {
        match &self.sort {
            Some(sort) => sort.clone(),
            None => SortSpec::desc(
                self.columns
                    .last()
                    .map(|label| string_to_key(label))
                    .unwrap_or_default(),
            ),
        }
    }

    /// Sort direction shown on the header of `label`, if it is the sorted column.
    pub fn header_order(&self, label: &str) -> Option<SortOrder> {
        let sort = self.sort();
        (sort.column == string_to_key(label)).then_some(sort.order)
    }

    /// Rows to display, filtered then sorted.
    pub fn view<'a, C>(&self, dataset: &'a Dataset, collator: &C) -> Vec<&'a Row>
    where
        C: Collator + ?Sized,
    {
        query::apply(dataset.rows(), &self.filter, &self.sort(), collator)
    }

    /// Canonical record behind a clicked row.
    ///
    /// Looks up the unfiltered, unsorted data so the displayed order never
    /// affects which record is returned.
    pub fn select_row<'a>(&self, dataset: &'a Dataset, package_name: &str) -> Option<&'a Row> {
        dataset.find_by_name(package_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collation::UnicodeCollator;

    fn columns() -> Vec<String> {
        ["Package Name", "Size", "Date Published"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_default_sort_is_last_column_desc() {
        let state = TableState::new(columns());
        assert_eq!(state.sort(), SortSpec::desc("datePublished"));
        assert_eq!(state.header_order("Date Published"), Some(SortOrder::Desc));
        assert_eq!(state.header_order("Size"), None);
    }

    #[test]
    fn test_no_columns_sorts_nothing() {
        let state = TableState::new(Vec::new());
        assert_eq!(state.sort(), SortSpec::desc(""));
    }

    #[test]
    fn test_same_column_toggles() {
        let mut state = TableState::new(columns());
        state.set_sort("Size");
        assert_eq!(state.sort(), SortSpec::desc("size"));
        state.set_sort("Size");
        assert_eq!(state.sort(), SortSpec::asc("size"));
        state.set_sort("size");
        assert_eq!(state.sort(), SortSpec::desc("size"));
    }

    #[test]
    fn test_new_column_resets_to_desc() {
        let mut state = TableState::new(columns());
        state.set_sort("Size");
        state.set_sort("Size");
        state.set_sort("Package Name");
        assert_eq!(state.sort(), SortSpec::desc("packageName"));
        assert_eq!(state.header_order("Package Name"), Some(SortOrder::Desc));
    }

    #[test]
    fn test_first_pick_of_default_column_starts_desc() {
        let mut state = TableState::new(columns());
        state.set_sort("Date Published");
        assert_eq!(state.sort(), SortSpec::desc("datePublished"));
        state.set_sort("Date Published");
        assert_eq!(state.sort(), SortSpec::asc("datePublished"));
    }

    #[test]
    fn test_view_and_select_row() {
        let dataset = Dataset::new(vec![Row::new("Zeta", "5"), Row::new("Alpha", "50")]);
        let mut state = TableState::new(columns());
        state.set_sort("Size");

        let view: Vec<_> = state
            .view(&dataset, &UnicodeCollator)
            .iter()
            .map(|r| r.package_name.as_str())
            .collect();
        assert_eq!(view, ["Alpha", "Zeta"]);

        // Lookup ignores the displayed order and the active filter.
        state.set_filter(FilterSpec::search("alpha"));
        let zeta = state.select_row(&dataset, "ZETA");
        assert_eq!(zeta.map(|r| r.size.as_str()), Some("5"));
        assert_eq!(dataset.rows()[0].package_name, "Zeta");
    }
}

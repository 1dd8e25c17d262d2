//! Result-set query engine: filter, then sort.
//!
//! Everything here is pure. The input rows are never mutated or reordered;
//! each call returns a fresh view of borrowed rows.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::collation::Collator;
use crate::models::{ALL_OPTION, FieldValue, FilterSpec, Row, SortOrder, SortSpec};
use crate::utils::parse_float_prefix;

/// Column compared by numeric magnitude instead of collation.
pub const SIZE_COLUMN: &str = "size";

/// Filter `rows` with `filter`, then order them by `sort`.
pub fn apply<'a, C>(
    rows: &'a [Row],
    filter: &FilterSpec,
    sort: &SortSpec,
    collator: &C,
) -> Vec<&'a Row>
where
    C: Collator + ?Sized,
{
    let filtered = filter_rows(rows.iter(), filter);
    sort_rows(filtered, sort, collator)
}

// =============================================================================
// Filter Stage
// =============================================================================

/// Keep the rows matching `filter`, in input order.
pub fn filter_rows<'a, I>(rows: I, filter: &FilterSpec) -> Vec<&'a Row>
where
    I: IntoIterator<Item = &'a Row>,
{
    let search = filter.active_search().map(str::to_lowercase);
    rows.into_iter()
        .filter(|row| matches_search(row, search.as_deref()))
        .filter(|row| matches_options(row, filter))
        .collect()
}

/// Whether a single row passes `filter`.
pub fn matches(row: &Row, filter: &FilterSpec) -> bool {
    let search = filter.active_search().map(str::to_lowercase);
    matches_search(row, search.as_deref()) && matches_options(row, filter)
}

fn matches_search(row: &Row, search_lower: Option<&str>) -> bool {
    match search_lower {
        Some(term) => row.package_name.to_lowercase().contains(term),
        None => true,
    }
}

/// Every active attribute constraint must hold.
fn matches_options(row: &Row, filter: &FilterSpec) -> bool {
    let Some(options) = &filter.selected_options else {
        return true;
    };
    options
        .iter()
        .all(|(attribute, value)| matches_option(row, attribute, value))
}

/// One constraint. Skipped constraints (`"all"`, absent attribute) pass.
fn matches_option(row: &Row, attribute: &str, value: &str) -> bool {
    let wanted = value.to_lowercase();
    if wanted == ALL_OPTION {
        return true;
    }

    match row.field(attribute) {
        None => true,
        Some(FieldValue::List(items)) => items.iter().any(|item| item.to_lowercase() == wanted),
        Some(FieldValue::Text(text)) => text.to_lowercase() == wanted,
        Some(FieldValue::Date(date)) => date
            .sort_text()
            .is_some_and(|text| text.to_lowercase() == wanted),
    }
}

// =============================================================================
// Sort Stage
// =============================================================================

/// Precomputed ordering key of one row.
#[derive(Debug)]
enum SortKey<'a> {
    Number(f64),
    Text(Cow<'a, str>),
    /// NaN, invalid date or absent field. Always ordered last.
    Missing,
}

impl<'a> SortKey<'a> {
    fn of(row: &'a Row, column: &str) -> Self {
        if column == SIZE_COLUMN {
            let size = parse_float_prefix(&row.size);
            return if size.is_nan() { Self::Missing } else { Self::Number(size) };
        }

        match row.field(column) {
            Some(FieldValue::Text(text)) => Self::Text(text),
            Some(FieldValue::List(items)) => Self::Text(Cow::Owned(items.join(","))),
            Some(FieldValue::Date(date)) => date.sort_text().map_or(Self::Missing, Self::Text),
            None => Self::Missing,
        }
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn compare_keys<C>(a: &SortKey<'_>, b: &SortKey<'_>, order: SortOrder, collator: &C) -> Ordering
where
    C: Collator + ?Sized,
{
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => {
            directed(x.partial_cmp(y).unwrap_or(Ordering::Equal), order)
        }
        (SortKey::Text(x), SortKey::Text(y)) => directed(collator.compare(x, y), order),
        // Keys of one column share a kind; mixed kinds carry no signal.
        _ => Ordering::Equal,
    }
}

/// Order `rows` by `sort`.
///
/// Keys are computed once per row and the sort is stable, so rows with
/// equal keys keep their input order in both directions.
pub fn sort_rows<'a, C>(rows: Vec<&'a Row>, sort: &SortSpec, collator: &C) -> Vec<&'a Row>
where
    C: Collator + ?Sized,
{
    let mut keyed: Vec<(SortKey<'a>, &'a Row)> = rows
        .into_iter()
        .map(|row| (SortKey::of(row, &sort.column), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sort.order, collator));

    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collation::UnicodeCollator;
    use crate::models::{AttrValue, PublishedDate, SerialDate};
    use chrono::NaiveDate;

    fn text(value: &str) -> AttrValue {
        AttrValue::Text(value.to_string())
    }

    fn list(values: &[&str]) -> AttrValue {
        AttrValue::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new("Acrobat Reader", "512")
                .with_attr("softwareType", text("Application"))
                .with_attr("operatingSystem", list(&["Windows", "macOS"])),
            Row::new("Photoshop", "2048")
                .with_attr("softwareType", text("Application"))
                .with_attr("operatingSystem", list(&["macOS"])),
            Row::new("Reader Fonts", "12")
                .with_attr("softwareType", text("Font Pack"))
                .with_attr("operatingSystem", text("Windows")),
            Row::new("Legacy Tool", "n/a"),
        ]
    }

    fn names(view: &[&Row]) -> Vec<String> {
        view.iter().map(|r| r.package_name.clone()).collect()
    }

    fn run(rows: &[Row], filter: &FilterSpec, sort: &SortSpec) -> Vec<String> {
        names(&apply(rows, filter, sort, &UnicodeCollator))
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_term_case_insensitive_substring() {
        let rows = sample_rows();
        let view = filter_rows(&rows, &FilterSpec::search("READER"));
        assert_eq!(names(&view), ["Acrobat Reader", "Reader Fonts"]);

        for row in &rows {
            let kept = view.iter().any(|v| std::ptr::eq(*v, row));
            assert_eq!(kept, row.package_name.to_lowercase().contains("reader"));
        }
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let rows = sample_rows();
        assert_eq!(filter_rows(&rows, &FilterSpec::search("")).len(), rows.len());
        assert_eq!(filter_rows(&rows, &FilterSpec::none()).len(), rows.len());
    }

    #[test]
    fn test_scalar_option_matches_case_insensitively() {
        let rows = sample_rows();
        let filter = FilterSpec::none().with_option("softwareType", "application");
        // Legacy Tool has no softwareType, so the constraint is skipped for it.
        assert_eq!(
            names(&filter_rows(&rows, &filter)),
            ["Acrobat Reader", "Photoshop", "Legacy Tool"]
        );
    }

    #[test]
    fn test_list_option_matches_any_element() {
        let rows = sample_rows();
        let filter = FilterSpec::none().with_option("operatingSystem", "WINDOWS");
        assert_eq!(
            names(&filter_rows(&rows, &filter)),
            ["Acrobat Reader", "Reader Fonts", "Legacy Tool"]
        );
    }

    #[test]
    fn test_all_option_is_noop() {
        let rows = sample_rows();
        let base = FilterSpec::search("r");
        let with_all = base.clone().with_option("softwareType", "ALL");
        let sort = SortSpec::asc("packageName");
        assert_eq!(run(&rows, &with_all, &sort), run(&rows, &base, &sort));
    }

    #[test]
    fn test_failed_constraint_not_reset_by_skipped_one() {
        let rows = sample_rows();
        // "operatingSystem" fails for Photoshop; "provider" is absent and
        // "softwareType" is "all". Neither may resurrect the row.
        let filter = FilterSpec::none()
            .with_option("operatingSystem", "Windows")
            .with_option("provider", "Adobe")
            .with_option("softwareType", "all");
        let view = names(&filter_rows(&rows, &filter));
        assert!(!view.contains(&"Photoshop".to_string()));
    }

    #[test]
    fn test_all_constraints_must_hold() {
        let rows = sample_rows();
        let filter = FilterSpec::none()
            .with_option("operatingSystem", "windows")
            .with_option("softwareType", "Font Pack");
        assert_eq!(names(&filter_rows(&rows, &filter)), ["Reader Fonts", "Legacy Tool"]);
        assert!(matches(&rows[2], &filter));
        assert!(!matches(&rows[0], &filter));
    }

    #[test]
    fn test_unknown_attribute_is_skipped() {
        let rows = sample_rows();
        let filter = FilterSpec::none().with_option("colour", "blue");
        assert_eq!(filter_rows(&rows, &filter).len(), rows.len());
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    #[test]
    fn test_size_sorts_numerically() {
        let rows = vec![Row::new("Ten", "10"), Row::new("Two", "2")];
        assert_eq!(run(&rows, &FilterSpec::none(), &SortSpec::asc("size")), ["Two", "Ten"]);
        assert_eq!(run(&rows, &FilterSpec::none(), &SortSpec::desc("size")), ["Ten", "Two"]);
    }

    #[test]
    fn test_unparseable_size_sorts_last_in_both_directions() {
        let rows = sample_rows();
        let asc = run(&rows, &FilterSpec::none(), &SortSpec::asc("size"));
        let desc = run(&rows, &FilterSpec::none(), &SortSpec::desc("size"));
        assert_eq!(asc, ["Reader Fonts", "Acrobat Reader", "Photoshop", "Legacy Tool"]);
        assert_eq!(desc, ["Photoshop", "Acrobat Reader", "Reader Fonts", "Legacy Tool"]);
    }

    #[test]
    fn test_text_columns_use_collation() {
        let rows = vec![Row::new("beta", "1"), Row::new("Alpha", "1"), Row::new("Émile", "1")];
        assert_eq!(
            run(&rows, &FilterSpec::none(), &SortSpec::asc("packageName")),
            ["Alpha", "beta", "Émile"]
        );
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let rows = vec![
            Row::new("A", "5").with_attr("softwareType", text("Tool")),
            Row::new("B", "5").with_attr("softwareType", text("Tool")),
            Row::new("C", "1").with_attr("softwareType", text("App")),
        ];
        let filter = FilterSpec::none();
        assert_eq!(run(&rows, &filter, &SortSpec::asc("size")), ["C", "A", "B"]);
        assert_eq!(run(&rows, &filter, &SortSpec::desc("size")), ["A", "B", "C"]);
        assert_eq!(run(&rows, &filter, &SortSpec::asc("softwareType")), ["C", "A", "B"]);
        assert_eq!(run(&rows, &filter, &SortSpec::desc("softwareType")), ["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_column_keeps_input_order() {
        let rows = sample_rows();
        let view = run(&rows, &FilterSpec::none(), &SortSpec::desc("nonexistent"));
        assert_eq!(view, names(&rows.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_dates_sort_chronologically_with_invalid_last() {
        let date = |y, m, d| {
            PublishedDate::At(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap())
        };
        let mut old = Row::new("Old", "1");
        old.date_published = date(2019, 12, 1);
        let mut new = Row::new("New", "1");
        new.date_published = date(2023, 2, 1);
        let mut broken = Row::new("Broken", "1");
        broken.date_published = PublishedDate::Invalid;
        let mut raw = Row::new("Raw", "1");
        raw.date_published = PublishedDate::Raw(SerialDate::Number(1.0));
        let rows = vec![broken, old, new];

        assert_eq!(
            run(&rows, &FilterSpec::none(), &SortSpec::desc("datePublished")),
            ["New", "Old", "Broken"]
        );
        assert_eq!(
            run(&rows, &FilterSpec::none(), &SortSpec::asc("datePublished")),
            ["Old", "New", "Broken"]
        );
        assert!(matches!(SortKey::of(&raw, "datePublished"), SortKey::Text(_)));
    }

    #[test]
    fn test_apply_is_idempotent_and_pure() {
        let rows = sample_rows();
        let snapshot = rows.clone();
        let filter = FilterSpec::search("e").with_option("operatingSystem", "macos");
        let sort = SortSpec::asc("packageName");

        let once: Vec<Row> = apply(&rows, &filter, &sort, &UnicodeCollator)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Row> = apply(&once, &filter, &sort, &UnicodeCollator)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once, twice);
        assert_eq!(rows, snapshot);
    }
}

//! Per-column filters for table views.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::model::Value;

use super::column::ColumnSet;

/// A filter value attached to one column.
///
/// # Example
///
/// ```
/// use lavado_lib::table::ColumnFilter;
///
/// // Free-text search box
/// let search = ColumnFilter::text("beta");
///
/// // Faceted filter from the toolbar
/// let status = ColumnFilter::set(["todo", "in progress"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnFilter {
    /// Case-insensitive substring match.
    Text(String),
    /// Value must be one of the listed values.
    Set(BTreeSet<String>),
}

impl ColumnFilter {
    /// Creates a text filter.
    pub fn text(value: impl Into<String>) -> Self {
        ColumnFilter::Text(value.into())
    }

    /// Creates a set filter.
    pub fn set<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        ColumnFilter::Set(values.into_iter().map(Into::into).collect())
    }

    /// An empty filter places no constraint on its column.
    pub fn is_empty(&self) -> bool {
        match self {
            ColumnFilter::Text(text) => text.is_empty(),
            ColumnFilter::Set(values) => values.is_empty(),
        }
    }

    /// Check a cell value against this filter.
    ///
    /// A missing value only passes an empty filter.
    pub fn matches(&self, value: &Value) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(text) = value.to_text() else {
            return false;
        };
        match self {
            ColumnFilter::Text(needle) => text.to_lowercase().contains(&needle.to_lowercase()),
            ColumnFilter::Set(values) => values.contains(&text),
        }
    }
}

/// Active filters keyed by column id.
///
/// Empty filters are never stored, so `is_empty()` means "nothing filtered".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: BTreeMap<String, ColumnFilter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the filter on a column. Empty filters clear.
    ///
    /// Returns true if the stored state changed.
    pub fn set(&mut self, column_id: impl Into<String>, filter: Option<ColumnFilter>) -> bool {
        let column_id = column_id.into();
        match filter.filter(|f| !f.is_empty()) {
            Some(filter) => self.filters.insert(column_id, filter.clone()) != Some(filter),
            None => self.filters.remove(&column_id).is_some(),
        }
    }

    /// Get the filter on a column.
    pub fn get(&self, column_id: &str) -> Option<&ColumnFilter> {
        self.filters.get(column_id)
    }

    /// Remove every filter. Returns true if any was set.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.filters.is_empty();
        self.filters.clear();
        had_any
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnFilter)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check one row against every filter except the one on `skip`.
    ///
    /// Filters on unknown or non-filterable columns are ignored.
    fn row_passes<R>(&self, columns: &ColumnSet<R>, row: &R, skip: Option<&str>) -> bool {
        self.filters
            .iter()
            .filter(|(id, _)| Some(id.as_str()) != skip)
            .all(|(id, filter)| match columns.filterable(id) {
                Some(column) => filter.matches(&column.value(row)),
                None => true,
            })
    }
}

/// Indices of rows passing every active filter, in input order.
pub fn filter_rows<R>(rows: &[R], columns: &ColumnSet<R>, state: &FilterState) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| state.row_passes(columns, row, None))
        .map(|(index, _)| index)
        .collect()
}

/// Count the distinct values of one column, as faceted filter options show.
///
/// Rows are narrowed by every filter except the one on `column_id`, so the
/// counts reflect what selecting an option would yield. Missing values are
/// not counted. Unknown columns yield an empty map.
pub fn faceted_unique_values<R>(
    rows: &[R],
    columns: &ColumnSet<R>,
    state: &FilterState,
    column_id: &str,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    let Some(column) = columns.get(column_id) else {
        return counts;
    };
    for row in rows {
        if !state.row_passes(columns, row, Some(column_id)) {
            continue;
        }
        if let Some(text) = column.value(row).to_text() {
            *counts.entry(text).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[derive(Clone)]
    struct Item {
        title: Option<&'static str>,
        status: &'static str,
    }

    fn columns() -> ColumnSet<Item> {
        ColumnSet::new(vec![
            Column::new("title", "Título", |i: &Item| Value::from(i.title)),
            Column::new("status", "Estado", |i: &Item| Value::from(i.status)),
            Column::new("secret", "Secreto", |i: &Item| Value::from(i.status)).filterable(false),
        ])
        .unwrap()
    }

    fn rows() -> Vec<Item> {
        vec![
            Item { title: Some("Alpha"), status: "open" },
            Item { title: Some("Beta"), status: "closed" },
            Item { title: None, status: "open" },
            Item { title: Some("beta2"), status: "open" },
        ]
    }

    #[test]
    fn test_text_filter_case_insensitive() {
        let mut state = FilterState::new();
        state.set("title", Some(ColumnFilter::text("BETA")));
        assert_eq!(filter_rows(&rows(), &columns(), &state), vec![1, 3]);
    }

    #[test]
    fn test_missing_value_excluded_by_active_filter() {
        let mut state = FilterState::new();
        state.set("title", Some(ColumnFilter::text("a")));
        assert!(!filter_rows(&rows(), &columns(), &state).contains(&2));

        // Empty filter is not stored and constrains nothing.
        assert!(state.set("title", Some(ColumnFilter::text(""))));
        assert!(state.is_empty());
        assert_eq!(filter_rows(&rows(), &columns(), &state).len(), 4);
    }

    #[test]
    fn test_set_filter_and_combination() {
        let mut state = FilterState::new();
        state.set("status", Some(ColumnFilter::set(["open"])));
        assert_eq!(filter_rows(&rows(), &columns(), &state), vec![0, 2, 3]);

        state.set("title", Some(ColumnFilter::text("beta")));
        assert_eq!(filter_rows(&rows(), &columns(), &state), vec![3]);

        state.set("status", Some(ColumnFilter::set(Vec::<String>::new())));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_unknown_and_non_filterable_ignored() {
        let mut state = FilterState::new();
        state.set("nope", Some(ColumnFilter::text("zzz")));
        state.set("secret", Some(ColumnFilter::text("zzz")));
        assert_eq!(filter_rows(&rows(), &columns(), &state).len(), 4);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = rows();
        let columns = columns();
        let mut state = FilterState::new();
        state.set("title", Some(ColumnFilter::text("a")));
        let once: Vec<Item> = filter_rows(&rows, &columns, &state)
            .into_iter()
            .map(|i| rows[i].clone())
            .collect();
        let twice = filter_rows(&once, &columns, &state);
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_faceted_counts_ignore_own_filter() {
        let mut state = FilterState::new();
        state.set("status", Some(ColumnFilter::set(["closed"])));
        state.set("title", Some(ColumnFilter::text("a")));

        let counts = faceted_unique_values(&rows(), &columns(), &state, "status");
        assert_eq!(counts.get("open"), Some(&2));
        assert_eq!(counts.get("closed"), Some(&1));

        let titles = faceted_unique_values(&rows(), &columns(), &FilterState::new(), "title");
        assert_eq!(titles.values().sum::<usize>(), 3);
        assert!(faceted_unique_values(&rows(), &columns(), &state, "nope").is_empty());
    }

    #[test]
    fn test_set_reports_change() {
        let mut state = FilterState::new();
        assert!(state.set("title", Some(ColumnFilter::text("a"))));
        assert!(!state.set("title", Some(ColumnFilter::text("a"))));
        assert!(state.set("title", None));
        assert!(!state.clear());
    }
}

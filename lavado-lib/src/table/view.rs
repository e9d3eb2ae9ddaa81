//! Table view: filter, sort, paginate and select over a row set.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::ops::Range;

use super::column::{Column, ColumnSet, Row};
use super::filter::{ColumnFilter, FilterState, faceted_unique_values, filter_rows};
use super::page::Pagination;
use super::selection::{Selection, SelectionMode};
use super::sort::{Direction, SortState, sort_indices};

/// Derived pipeline output, rebuilt after every mutation.
#[derive(Debug, Clone, Default)]
struct Derived {
    /// Indices into `rows` that pass the filters, in sorted order.
    ordered: Vec<usize>,
    /// Range of `ordered` shown on the current page.
    page: Range<usize>,
}

/// A table over a set of rows with filter, sort, pagination and selection.
///
/// `TableView<R>` owns its state exclusively and recomputes the visible rows
/// once per mutation, in fixed order: filter, then sort, then paginate.
///
/// - Filters on unknown or non-filterable columns are ignored.
/// - Sorts on unknown or non-sortable columns are ignored.
/// - A page past the end is empty, not an error.
/// - Individual selection works on the full row set, so a row stays
///   selected while filtered out. "Select all" works on the visible page.
/// - Replacing the rows prunes selected keys that disappeared.
///
/// # Example
///
/// ```
/// use lavado_lib::model::Value;
/// use lavado_lib::table::{Column, ColumnFilter, Direction, Row, TableView};
///
/// #[derive(Clone)]
/// struct Item { id: u32, title: &'static str }
///
/// impl Row for Item {
///     type Key = u32;
///     fn key(&self) -> u32 { self.id }
/// }
///
/// let columns = vec![Column::new("title", "Title", |i: &Item| Value::from(i.title))];
/// let mut view = TableView::new(columns).unwrap();
/// view.set_rows(vec![Item { id: 1, title: "Alpha" }, Item { id: 2, title: "Beta" }]);
/// view.set_column_filter("title", Some(ColumnFilter::text("b")));
/// view.set_sort("title", Some(Direction::Desc));
/// assert_eq!(view.visible_keys(), vec![2]);
/// ```
#[derive(Debug)]
pub struct TableView<R: Row> {
    columns: ColumnSet<R>,
    rows: Vec<R>,
    filters: FilterState,
    sort: Option<SortState>,
    pagination: Pagination,
    selection: Selection<R::Key>,
    visibility: HashMap<String, bool>,
    derived: Derived,
}

impl<R: Row> TableView<R> {
    /// Create an empty view over the given columns.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, crate::error::TableError> {
        let columns = ColumnSet::new(columns)?;
        let visibility = columns
            .iter()
            .map(|c| (c.id.clone(), c.visible))
            .collect();
        Ok(Self {
            columns,
            rows: Vec::new(),
            filters: FilterState::new(),
            sort: None,
            pagination: Pagination::default(),
            selection: Selection::multi(),
            visibility,
            derived: Derived::default(),
        })
    }

    /// Start with a page size other than the default. Zero is ignored.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Set the selection mode. Switching to `None` clears the selection.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection = match mode {
            SelectionMode::None => Selection::none(),
            SelectionMode::Single => Selection::single(),
            SelectionMode::Multi => Selection::multi(),
        };
        self
    }

    fn recompute(&mut self) {
        let mut ordered = filter_rows(&self.rows, &self.columns, &self.filters);
        sort_indices(&self.rows, &mut ordered, &self.columns, self.sort.as_ref());
        let page = self.pagination.range(ordered.len());
        self.derived = Derived { ordered, page };
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the row set (a refetch).
    ///
    /// Selected keys no longer present are dropped; the rest stay selected.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        let keys: HashSet<R::Key> = rows.iter().map(|row| row.key()).collect();
        let pruned = self.selection.retain(|key| keys.contains(key));
        if pruned > 0 {
            log::debug!("pruned {} stale selected row(s) after refetch", pruned);
        }
        self.rows = rows;
        self.recompute();
    }

    /// All rows, in the order they were supplied.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Find a row by key.
    pub fn row(&self, key: &R::Key) -> Option<&R> {
        self.rows.iter().find(|row| &row.key() == key)
    }

    pub fn columns(&self) -> &ColumnSet<R> {
        &self.columns
    }

    // -------------------------------------------------------------------------
    // Derived output
    // -------------------------------------------------------------------------

    /// Rows on the current page, filtered and sorted.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.derived.ordered[self.derived.page.clone()]
            .iter()
            .map(|&index| &self.rows[index])
            .collect()
    }

    /// Keys of the rows on the current page.
    pub fn visible_keys(&self) -> Vec<R::Key> {
        self.visible_rows().into_iter().map(|row| row.key()).collect()
    }

    /// All rows passing the filters, sorted, across every page.
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.derived
            .ordered
            .iter()
            .map(|&index| &self.rows[index])
            .collect()
    }

    /// Number of rows passing the filters.
    pub fn filtered_count(&self) -> usize {
        self.derived.ordered.len()
    }

    /// Number of rows before filtering.
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered_count())
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next_page(self.filtered_count())
    }

    pub fn has_previous_page(&self) -> bool {
        self.pagination.has_previous_page()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Set or clear the filter on a column.
    ///
    /// Unknown and non-filterable columns are ignored. Returns true if the
    /// filter state changed.
    pub fn set_column_filter(&mut self, column_id: &str, filter: Option<ColumnFilter>) -> bool {
        if self.columns.filterable(column_id).is_none() {
            log::warn!("ignoring filter on unknown or unfilterable column '{}'", column_id);
            return false;
        }
        let changed = self.filters.set(column_id, filter);
        if changed {
            log::debug!("filter on '{}' changed", column_id);
            self.recompute();
        }
        changed
    }

    /// Remove every filter.
    pub fn reset_column_filters(&mut self) -> bool {
        let changed = self.filters.clear();
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn column_filter(&self, column_id: &str) -> Option<&ColumnFilter> {
        self.filters.get(column_id)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// True if any filter is active.
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Value counts for a faceted filter on `column_id`.
    pub fn faceted_unique_values(&self, column_id: &str) -> BTreeMap<String, usize> {
        faceted_unique_values(&self.rows, &self.columns, &self.filters, column_id)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Sort by a column, or clear the sort with `None`.
    ///
    /// Clearing always applies. Sorting on an unknown or non-sortable column
    /// is ignored. Returns true if the sort state changed.
    pub fn set_sort(&mut self, column_id: &str, direction: Option<Direction>) -> bool {
        let next = match direction {
            None => None,
            Some(direction) => {
                if self.columns.sortable(column_id).is_none() {
                    log::warn!("ignoring sort on unknown or unsortable column '{}'", column_id);
                    return false;
                }
                Some(SortState {
                    column_id: column_id.to_string(),
                    direction,
                })
            }
        };
        if next == self.sort {
            return false;
        }
        self.sort = next;
        self.recompute();
        true
    }

    /// Cycle a column's sort: none, ascending, descending, none.
    ///
    /// Sorting a different column starts ascending. Returns the new state.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<&SortState> {
        let direction = match &self.sort {
            Some(sort) if sort.column_id == column_id => match sort.direction {
                Direction::Asc => Some(Direction::Desc),
                Direction::Desc => None,
            },
            _ => Some(Direction::Asc),
        };
        self.set_sort(column_id, direction);
        self.sort.as_ref()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Move to a page. Indices past the end are allowed and show nothing.
    pub fn set_page(&mut self, index: usize) {
        if self.pagination.page_index() != index {
            self.pagination.set_page_index(index);
            self.recompute();
        }
    }

    /// Change rows per page. Zero is ignored and returns false.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == self.pagination.page_size() {
            return true;
        }
        if !self.pagination.set_page_size(size) {
            log::warn!("ignoring page size of zero");
            return false;
        }
        self.recompute();
        true
    }

    /// Advance one page if there is one.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.set_page(self.pagination.page_index() + 1);
        true
    }

    /// Go back one page if there is one.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.set_page(self.pagination.page_index() - 1);
        true
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle one row's selection. Keys not in the row set are ignored.
    pub fn toggle_row_selected(&mut self, key: &R::Key) -> bool {
        if !self.rows.iter().any(|row| &row.key() == key) {
            log::warn!("ignoring selection of unknown row {:?}", key);
            return false;
        }
        self.selection.toggle(key.clone())
    }

    /// Select every row on the current page, or deselect exactly those rows
    /// if they are all selected.
    pub fn toggle_all_visible_selected(&mut self) -> bool {
        let keys = self.visible_keys();
        self.selection.toggle_all(&keys)
    }

    /// True if the current page is non-empty and fully selected.
    pub fn is_all_visible_selected(&self) -> bool {
        let keys = self.visible_keys();
        self.selection.contains_all(&keys)
    }

    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.is_selected(key)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    /// Selected rows in row-set order, including filtered-out ones.
    pub fn selected_rows(&self) -> Vec<&R> {
        self.rows
            .iter()
            .filter(|row| self.selection.is_selected(&row.key()))
            .collect()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Show or hide a column. Unknown columns are ignored.
    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> bool {
        match self.visibility.get_mut(column_id) {
            Some(current) if *current != visible => {
                *current = visible;
                true
            }
            Some(_) => false,
            None => {
                log::warn!("ignoring visibility of unknown column '{}'", column_id);
                false
            }
        }
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.visibility.get(column_id).copied().unwrap_or(false)
    }

    /// Visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&Column<R>> {
        self.columns
            .iter()
            .filter(|c| self.is_column_visible(&c.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        title: &'static str,
        status: &'static str,
    }

    impl Row for Item {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, title: &'static str, status: &'static str) -> Item {
        Item { id, title, status }
    }

    fn view() -> TableView<Item> {
        let mut view = TableView::new(vec![
            Column::new("id", "Id", |i: &Item| Value::from(i.id)).hidden(),
            Column::new("title", "Título", |i: &Item| Value::from(i.title)),
            Column::new("status", "Estado", |i: &Item| Value::from(i.status)),
            Column::new("actions", "", |_: &Item| Value::Missing)
                .sortable(false)
                .filterable(false),
        ])
        .unwrap();
        view.set_rows(vec![
            item(1, "Alpha", "open"),
            item(2, "Beta", "closed"),
            item(3, "beta2", "open"),
        ]);
        view
    }

    #[test]
    fn test_filter_then_sort_descending() {
        let mut view = view();
        view.set_column_filter("title", Some(ColumnFilter::text("beta")));
        assert_eq!(view.visible_keys(), vec![2, 3]);
        view.set_sort("title", Some(Direction::Desc));
        assert_eq!(view.visible_keys(), vec![3, 2]);
        assert!(view.is_filtered());
        assert_eq!(view.total_count(), 3);
        assert_eq!(view.filtered_count(), 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut view = view().with_page_size(1);
        view.set_column_filter("title", Some(ColumnFilter::text("beta")));
        view.set_page(5);
        assert!(view.visible_rows().is_empty());
        assert_eq!(view.page_count(), 2);
        assert!(!view.has_next_page());
        assert!(view.has_previous_page());
    }

    #[test]
    fn test_refetch_prunes_selection() {
        let mut view = view();
        assert!(view.toggle_row_selected(&2));
        view.set_rows(vec![item(1, "Alpha", "open"), item(3, "beta2", "open")]);
        assert_eq!(view.selected_count(), 0);
        assert!(view.toggle_row_selected(&3));
        assert!(view.is_selected(&3));
        assert_eq!(view.selected_count(), 1);
    }

    #[test]
    fn test_refetch_keeps_surviving_selection() {
        let mut view = view();
        view.toggle_row_selected(&1);
        view.toggle_row_selected(&2);
        view.set_rows(vec![item(1, "Alpha (edited)", "closed"), item(4, "Delta", "open")]);
        assert!(view.is_selected(&1));
        assert_eq!(view.selected_count(), 1);
        assert_eq!(view.selected_rows()[0].title, "Alpha (edited)");
    }

    #[test]
    fn test_selection_survives_filter() {
        let mut view = view();
        view.toggle_row_selected(&1);
        view.set_column_filter("status", Some(ColumnFilter::set(["closed"])));
        assert_eq!(view.visible_keys(), vec![2]);
        assert!(view.is_selected(&1));

        // A filtered-out row can still be toggled.
        assert!(view.toggle_row_selected(&3));
        assert_eq!(view.selected_count(), 2);
        assert!(!view.toggle_row_selected(&42));
    }

    #[test]
    fn test_select_all_visible_is_page_scoped() {
        let mut view = view().with_page_size(2);
        view.toggle_row_selected(&3);
        assert!(view.toggle_all_visible_selected());
        assert_eq!(view.selected_count(), 3);
        assert!(view.is_all_visible_selected());

        assert!(view.toggle_all_visible_selected());
        assert_eq!(view.selected_rows(), vec![&item(3, "beta2", "open")]);
    }

    #[test]
    fn test_invalid_references_ignored() {
        let mut view = view();
        assert!(!view.set_column_filter("actions", Some(ColumnFilter::text("x"))));
        assert!(!view.set_column_filter("nope", Some(ColumnFilter::text("x"))));
        assert!(!view.set_sort("actions", Some(Direction::Asc)));
        assert!(!view.set_sort("nope", Some(Direction::Asc)));
        assert!(!view.is_filtered());
        assert!(view.sort().is_none());
        assert_eq!(view.visible_keys(), vec![1, 2, 3]);
        assert!(!view.set_page_size(0));
        assert_eq!(view.pagination().page_size(), crate::table::DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let mut view = view();
        assert_eq!(view.toggle_sort("title").map(|s| s.direction), Some(Direction::Asc));
        assert_eq!(view.toggle_sort("title").map(|s| s.direction), Some(Direction::Desc));
        assert_eq!(view.visible_keys(), vec![3, 2, 1]);
        assert!(view.toggle_sort("title").is_none());
        assert_eq!(view.visible_keys(), vec![1, 2, 3]);
        view.toggle_sort("title");
        assert_eq!(view.toggle_sort("status").map(|s| s.direction), Some(Direction::Asc));
    }

    #[test]
    fn test_reset_filters() {
        let mut view = view();
        view.set_column_filter("status", Some(ColumnFilter::set(["open"])));
        view.set_column_filter("title", Some(ColumnFilter::text("a")));
        assert!(view.reset_column_filters());
        assert!(!view.reset_column_filters());
        assert_eq!(view.filtered_count(), 3);
    }

    #[test]
    fn test_page_navigation() {
        let mut view = view().with_page_size(2);
        assert!(!view.previous_page());
        assert!(view.next_page());
        assert_eq!(view.visible_keys(), vec![3]);
        assert!(!view.next_page());
        assert!(view.previous_page());
        assert_eq!(view.visible_keys(), vec![1, 2]);
    }

    #[test]
    fn test_column_visibility() {
        let mut view = view();
        assert!(!view.is_column_visible("id"));
        let ids: Vec<_> = view.visible_columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["title", "status", "actions"]);

        assert!(view.set_column_visible("id", true));
        assert!(!view.set_column_visible("id", true));
        assert!(!view.set_column_visible("nope", true));
        assert_eq!(view.visible_columns().len(), 4);
    }

    #[test]
    fn test_faceted_counts_through_view() {
        let mut view = view();
        view.set_column_filter("title", Some(ColumnFilter::text("beta")));
        let counts = view.faceted_unique_values("status");
        assert_eq!(counts.get("open"), Some(&1));
        assert_eq!(counts.get("closed"), Some(&1));
    }
}

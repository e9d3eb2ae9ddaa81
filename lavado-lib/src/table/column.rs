//! Column definitions and the row trait.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::TableError;
use crate::model::Value;

// =============================================================================
// Row Trait
// =============================================================================

/// Trait for records that can be displayed in a [`TableView`](super::TableView).
///
/// Rows are treated as immutable: the view never changes a row, it only
/// replaces the whole set on refetch.
///
/// # Example
///
/// ```
/// use lavado_lib::table::Row;
///
/// #[derive(Clone)]
/// struct Item {
///     id: u32,
///     title: String,
/// }
///
/// impl Row for Item {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait Row: Clone {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + std::fmt::Debug;

    /// Return a unique key for this row.
    fn key(&self) -> Self::Key;
}

// =============================================================================
// Column
// =============================================================================

/// Extracts a cell value from a row. Must be pure and total.
pub type Accessor<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// Turns a cell value into display text.
pub type Renderer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// A table column definition.
///
/// Columns are sortable, filterable and visible unless told otherwise.
pub struct Column<R> {
    /// Unique identifier for this column.
    pub id: String,
    /// Header text displayed at the top.
    pub header: String,
    accessor: Accessor<R>,
    renderer: Renderer,
    /// Whether the column can be sorted on.
    pub sortable: bool,
    /// Whether the column accepts filters.
    pub filterable: bool,
    /// Default visibility.
    pub visible: bool,
}

impl<R> Column<R> {
    /// Create a new column with the given id, header and accessor.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Arc::new(accessor),
            renderer: Arc::new(default_render),
            sortable: true,
            filterable: true,
            visible: true,
        }
    }

    /// Set a custom cell renderer.
    pub fn render(mut self, renderer: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Enable or disable sorting on this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enable or disable filtering on this column.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Hide this column by default.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Read this column's value from a row.
    pub fn value(&self, row: &R) -> Value {
        (self.accessor)(row)
    }

    /// Render a value the way this column displays it.
    pub fn display(&self, value: &Value) -> String {
        (self.renderer)(value)
    }

    /// Read and render in one go.
    pub fn cell(&self, row: &R) -> String {
        self.display(&self.value(row))
    }
}

fn default_render(value: &Value) -> String {
    value.to_text().unwrap_or_default()
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            renderer: Arc::clone(&self.renderer),
            sortable: self.sortable,
            filterable: self.filterable,
            visible: self.visible,
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ColumnSet
// =============================================================================

/// An ordered set of columns with unique ids.
pub struct ColumnSet<R> {
    columns: Vec<Column<R>>,
}

impl<R> ColumnSet<R> {
    /// Build a column set, rejecting empty or duplicate ids.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.id.is_empty() {
                return Err(TableError::EmptyColumnId);
            }
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::duplicate(&column.id));
            }
        }
        Ok(Self { columns })
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Column that accepts filters, if `id` names one.
    pub fn filterable(&self, id: &str) -> Option<&Column<R>> {
        self.get(id).filter(|c| c.filterable)
    }

    /// Column that can be sorted on, if `id` names one.
    pub fn sortable(&self, id: &str) -> Option<&Column<R>> {
        self.get(id).filter(|c| c.sortable)
    }

    /// All columns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<R> std::fmt::Debug for ColumnSet<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<R> Clone for ColumnSet<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        name: Option<String>,
    }

    fn name_column() -> Column<Item> {
        Column::new("name", "Nombre", |i: &Item| Value::from(i.name.clone()))
    }

    #[test]
    fn test_defaults() {
        let column = name_column();
        assert!(column.sortable && column.filterable && column.visible);
        let column = column.sortable(false).filterable(false).hidden();
        assert!(!column.sortable && !column.filterable && !column.visible);
    }

    #[test]
    fn test_cell_uses_renderer() {
        let column = name_column().render(|v| v.to_text().unwrap_or_else(|| "-".into()));
        assert_eq!(column.cell(&Item { name: None }), "-");
        assert_eq!(column.cell(&Item { name: Some("Ana".into()) }), "Ana");
        assert_eq!(name_column().cell(&Item { name: None }), "");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ColumnSet::new(vec![name_column(), name_column()]).unwrap_err();
        assert_eq!(err, TableError::duplicate("name"));

        let empty = Column::new("", "?", |_: &Item| Value::Missing);
        assert_eq!(ColumnSet::new(vec![empty]).unwrap_err(), TableError::EmptyColumnId);
    }

    #[test]
    fn test_lookup_respects_flags() {
        let set = ColumnSet::new(vec![
            name_column(),
            Column::new("actions", "", |_: &Item| Value::Missing)
                .sortable(false)
                .filterable(false),
        ])
        .unwrap();
        assert!(set.filterable("name").is_some());
        assert!(set.filterable("actions").is_none());
        assert!(set.sortable("actions").is_none());
        assert!(set.get("unknown").is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_without_row_debug() {
        let set = ColumnSet::new(vec![name_column()]).unwrap();
        let out = format!("{:?}", set);
        assert!(out.contains("\"name\""));
    }
}

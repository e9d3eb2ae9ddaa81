//! Load records into a table view and print the visible page.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use lavado_lib::model::{Entity, Value};
use lavado_lib::table::{Column, ColumnFilter, Direction, Row, TableView};

use crate::error::CliError;

/// What to show, already parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: Vec<(String, String)>,
    pub facets: Vec<(String, Vec<String>)>,
    pub sort: Option<(String, Direction)>,
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
    pub counts: Option<String>,
    pub all_columns: bool,
}

pub fn load_records<E: Entity>(path: &Path) -> Result<Vec<E>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<E> = serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} {} records from {}", records.len(), E::KIND.noun(), path.display());
    Ok(records)
}

/// Build the view and apply the query, rejecting unknown columns.
pub fn build_view<E: Entity>(rows: Vec<E>, query: &Query) -> Result<TableView<E>, CliError> {
    let mut view = TableView::new(E::columns())?;
    view.set_rows(rows);

    if !view.set_page_size(query.page_size) {
        return Err(CliError::args("page size must be at least 1"));
    }

    for (column, text) in &query.filters {
        require_filterable(&view, column)?;
        view.set_column_filter(column, Some(ColumnFilter::text(text.as_str())));
    }
    for (column, values) in &query.facets {
        require_filterable(&view, column)?;
        view.set_column_filter(column, Some(ColumnFilter::set(values.iter().cloned())));
    }
    if let Some((column, direction)) = &query.sort {
        if view.columns().sortable(column).is_none() {
            return Err(CliError::args(format!("cannot sort on column `{}`", column)));
        }
        view.set_sort(column, Some(*direction));
    }
    if query.all_columns {
        let ids: Vec<String> = view.columns().iter().map(|c| c.id.clone()).collect();
        for id in ids {
            view.set_column_visible(&id, true);
        }
    }
    view.set_page(query.page);
    Ok(view)
}

fn require_filterable<R: Row>(view: &TableView<R>, column: &str) -> Result<(), CliError> {
    match view.columns().filterable(column) {
        Some(_) => Ok(()),
        None => Err(CliError::args(format!("cannot filter on column `{}`", column))),
    }
}

/// Dates use `date_format`; a format the value cannot satisfy falls back to
/// the column's own rendering.
fn cell<R>(column: &Column<R>, row: &R, date_format: &str) -> String {
    let value = column.value(row);
    let mut out = String::new();
    let formatted = match &value {
        Value::Date(date) => write!(out, "{}", date.format(date_format)),
        Value::DateTime(at) => write!(out, "{}", at.format(date_format)),
        _ => return column.display(&value),
    };
    match formatted {
        Ok(()) => out,
        Err(_) => column.display(&value),
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Render the visible page as an aligned text table with a page footer.
pub fn render_page<R: Row>(view: &TableView<R>, date_format: &str) -> String {
    let columns = view.visible_columns();
    let rows: Vec<Vec<String>> = view
        .visible_rows()
        .into_iter()
        .map(|row| columns.iter().map(|c| cell(c, row, date_format)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .map(|r| width(&r[i]))
                .chain(std::iter::once(width(&c.header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(text, w)| format!("{}{}", text, " ".repeat(w - width(text))))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", line(columns.iter().map(|c| c.header.as_str()).collect()));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ")
    );
    if rows.is_empty() {
        let _ = writeln!(out, "Sin resultados.");
    }
    for row in &rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }

    let pagination = view.pagination();
    let _ = write!(
        out,
        "Página {} de {} · {} de {} filas",
        pagination.page_index() + 1,
        view.page_count().max(1),
        view.filtered_count(),
        view.total_count()
    );
    out
}

/// Render value counts for one column under the current filters.
pub fn render_counts<R: Row>(view: &TableView<R>, column: &str) -> Result<String, CliError> {
    require_filterable(view, column)?;
    let counts: BTreeMap<String, usize> = view.faceted_unique_values(column);
    let mut out = String::new();
    for (value, count) in &counts {
        let _ = writeln!(out, "{:>6}  {}", count, value);
    }
    Ok(out)
}

/// Load, query and render one file of records.
pub fn run<E: Entity>(path: &Path, query: &Query, date_format: &str) -> Result<String, CliError> {
    let records = load_records::<E>(path)?;
    let view = build_view(records, query)?;
    match &query.counts {
        Some(column) => render_counts(&view, column),
        None => Ok(render_page(&view, date_format)),
    }
}

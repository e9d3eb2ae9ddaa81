//! Single-column ordering for table views.

use std::cmp::Ordering;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::model::Value;

use super::column::ColumnSet;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

/// Rank used when two values of unrelated types meet in one column.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) | Value::Decimal(_) => 1,
        Value::Text(_) => 2,
        Value::Date(_) | Value::DateTime(_) => 3,
        Value::Missing => 4,
    }
}

/// Every numeric variant mapped onto one ordered line.
/// Floats outside the decimal range land at the ends; NaN goes last.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum NumberKey {
    NegInfinity,
    Finite(Decimal),
    PosInfinity,
    NaN,
}

fn number_key(value: &Value) -> Option<NumberKey> {
    match value {
        Value::Int(v) => Some(NumberKey::Finite(Decimal::from(*v))),
        Value::Decimal(v) => Some(NumberKey::Finite(*v)),
        Value::Float(v) if v.is_nan() => Some(NumberKey::NaN),
        Value::Float(v) => Some(match Decimal::from_f64_retain(*v) {
            Some(d) => NumberKey::Finite(d),
            None if *v > 0.0 => NumberKey::PosInfinity,
            None => NumberKey::NegInfinity,
        }),
        _ => None,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two cell values in ascending order.
///
/// Numbers compare numerically across `Int`/`Float`/`Decimal` (integers
/// against decimals exactly, floats by their exact binary value), text
/// compares case-insensitively with the raw string as tiebreak, dates and
/// date-times compare chronologically (a date counts as its midnight UTC).
/// `Missing` sorts after everything.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Decimal(x), Value::Decimal(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => compare_text(x, y),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
        (Value::Date(x), Value::DateTime(y)) => x.and_time(NaiveTime::MIN).and_utc().cmp(y),
        (Value::DateTime(x), Value::Date(y)) => x.cmp(&y.and_time(NaiveTime::MIN).and_utc()),
        _ => match (number_key(a), number_key(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

/// Reorder row indices according to `sort`.
///
/// The sort is stable: rows comparing equal keep their relative order.
/// Missing values go last regardless of direction. With no sort, or a sort
/// on an unknown or non-sortable column, the order is left untouched.
pub fn sort_indices<R>(
    rows: &[R],
    indices: &mut Vec<usize>,
    columns: &ColumnSet<R>,
    sort: Option<&SortState>,
) {
    let Some(sort) = sort else { return };
    let Some(column) = columns.sortable(&sort.column_id) else {
        log::warn!("ignoring sort on unknown or unsortable column '{}'", sort.column_id);
        return;
    };

    let mut keyed: Vec<(usize, Value)> = indices
        .iter()
        .map(|&index| (index, column.value(&rows[index])))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_values(a, b);
            match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        }
    });

    *indices = keyed.into_iter().map(|(index, _)| index).collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[derive(Clone)]
    struct Item {
        title: &'static str,
        amount: Value,
    }

    fn columns() -> ColumnSet<Item> {
        ColumnSet::new(vec![
            Column::new("title", "Título", |i: &Item| Value::from(i.title)),
            Column::new("amount", "Monto", |i: &Item| i.amount.clone()),
            Column::new("fixed", "Fijo", |i: &Item| Value::from(i.title)).sortable(false),
        ])
        .unwrap()
    }

    fn sorted(rows: &[Item], sort: Option<SortState>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..rows.len()).collect();
        sort_indices(rows, &mut indices, &columns(), sort.as_ref());
        indices
    }

    #[test]
    fn test_text_sort_case_insensitive() {
        let rows = vec![
            Item { title: "beta2", amount: Value::Missing },
            Item { title: "Alpha", amount: Value::Missing },
            Item { title: "Beta", amount: Value::Missing },
        ];
        assert_eq!(sorted(&rows, Some(SortState::asc("title"))), vec![1, 2, 0]);
        assert_eq!(sorted(&rows, Some(SortState::desc("title"))), vec![0, 2, 1]);
    }

    #[test]
    fn test_numeric_sort_mixes_number_types() {
        let rows = vec![
            Item { title: "a", amount: Value::Int(10) },
            Item { title: "b", amount: Value::Decimal(Decimal::new(95, 1)) },
            Item { title: "c", amount: Value::Float(100.5) },
            Item { title: "d", amount: Value::Int(2) },
        ];
        assert_eq!(sorted(&rows, Some(SortState::asc("amount"))), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_large_integers_compare_exactly_across_types() {
        let two_53 = 9_007_199_254_740_992_i64;
        let int = Value::Int(two_53 + 1);
        let dec = Value::Decimal(Decimal::from(two_53));
        let float = Value::Float(two_53 as f64);

        assert_eq!(compare_values(&int, &dec), Ordering::Greater);
        assert_eq!(compare_values(&dec, &float), Ordering::Equal);
        assert_eq!(compare_values(&int, &float), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(two_53), &float), Ordering::Equal);

        assert_eq!(compare_values(&Value::Float(f64::INFINITY), &int), Ordering::Greater);
        assert_eq!(compare_values(&Value::Float(f64::NEG_INFINITY), &dec), Ordering::Less);
        assert_eq!(
            compare_values(&Value::Float(f64::NAN), &Value::Float(f64::INFINITY)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_is_stable_and_missing_last() {
        let rows = vec![
            Item { title: "a", amount: Value::Missing },
            Item { title: "b", amount: Value::Int(1) },
            Item { title: "c", amount: Value::Int(1) },
            Item { title: "d", amount: Value::Int(0) },
            Item { title: "e", amount: Value::Int(1) },
        ];
        assert_eq!(sorted(&rows, Some(SortState::asc("amount"))), vec![3, 1, 2, 4, 0]);
        assert_eq!(sorted(&rows, Some(SortState::desc("amount"))), vec![1, 2, 4, 3, 0]);
    }

    #[test]
    fn test_no_sort_or_unsortable_is_identity() {
        let rows = vec![
            Item { title: "z", amount: Value::Missing },
            Item { title: "a", amount: Value::Missing },
        ];
        assert_eq!(sorted(&rows, None), vec![0, 1]);
        assert_eq!(sorted(&rows, Some(SortState::asc("fixed"))), vec![0, 1]);
        assert_eq!(sorted(&rows, Some(SortState::asc("unknown"))), vec![0, 1]);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(compare_values(&Value::Date(d1), &Value::Date(d2)), Ordering::Less);
        let noon = d1.and_hms_opt(12, 0, 0).unwrap().and_utc();
        assert_eq!(compare_values(&Value::Date(d1), &Value::DateTime(noon)), Ordering::Less);
        assert_eq!(compare_values(&Value::DateTime(noon), &Value::Date(d2)), Ordering::Less);
    }

    #[test]
    fn test_unrelated_types_use_rank() {
        assert_eq!(compare_values(&Value::Int(5), &Value::from("5")), Ordering::Less);
        assert_eq!(compare_values(&Value::Bool(true), &Value::Int(0)), Ordering::Less);
    }
}

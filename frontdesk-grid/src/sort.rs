//! Sortable-data engine.
//!
//! Sorting is a pure function of `(input sequence, sort state)`:
//! - missing and `null` values always sort last, whichever the direction
//! - numbers compare numerically, strings case-insensitively, `false < true`
//! - values of different JSON types fall back to a fixed type rank
//! - ties keep their input order (the sort is stable in both directions)
//!
//! The last rule matters on list screens: re-sorting after a refresh must not
//! reshuffle rows that rank equal.

use frontdesk_model::{FieldPath, FieldSource};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;
use tracing::debug;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The single active sort key of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: FieldPath,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub fn new(key: impl Into<FieldPath>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    #[must_use]
    pub fn ascending(key: impl Into<FieldPath>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    #[must_use]
    pub fn descending(key: impl Into<FieldPath>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Applies a column-header click to `current`.
    ///
    /// A new key starts ascending; the active key flips direction.
    #[must_use]
    pub fn requested(current: Option<&SortState>, key: FieldPath) -> SortState {
        match current {
            Some(active) if active.key == key => SortState {
                key,
                direction: active.direction.toggled(),
            },
            _ => SortState::ascending(key),
        }
    }

    /// Tri-state header indicator for `path` under `current`.
    #[must_use]
    pub fn icon_for(current: Option<&SortState>, path: &str) -> SortIcon {
        match current {
            Some(active) if active.key.as_str() == path => match active.direction {
                SortDirection::Asc => SortIcon::Ascending,
                SortDirection::Desc => SortIcon::Descending,
            },
            _ => SortIcon::None,
        }
    }
}

/// Column header affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIcon {
    None,
    Ascending,
    Descending,
}

/// Compares two resolved field values under `direction`.
///
/// Missing and `null` values sort after every present value in both
/// directions; `direction` only reverses the order among present values.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = compare_present(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

// Integers compare exactly; f64 only when a float is involved.
fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x.cmp(&y);
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => Ordering::Equal,
    }
}

// Keeps mixed-type columns totally ordered.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}

/// Returns the input positions of `items` in sorted order.
///
/// With no sort state the input order is returned unchanged.
#[must_use]
pub fn sort_indices<T: FieldSource>(items: &[T], state: Option<&SortState>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    let Some(state) = state else {
        return order;
    };
    let keys: Vec<Option<&Value>> = items.iter().map(|item| item.field(&state.key)).collect();
    // slice::sort_by is stable
    order.sort_by(|&a, &b| compare_values(keys[a], keys[b], state.direction));
    order
}

/// Returns references to `items` in sorted order.
#[must_use]
pub fn sort_records<'a, T: FieldSource>(items: &'a [T], state: Option<&SortState>) -> Vec<&'a T> {
    sort_indices(items, state)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// A sortable sequence bound to one grid.
///
/// Holds the input records and the active [`SortState`]; the sorted order is
/// recomputed whenever either changes.
#[derive(Debug, Clone)]
pub struct SortableData<T> {
    data: Vec<T>,
    state: Option<SortState>,
    order: Vec<usize>,
}

impl<T: FieldSource> SortableData<T> {
    /// Creates an empty handle with an optional initial sort.
    ///
    /// A direction without a key is ignored; a key without a direction sorts
    /// ascending.
    #[must_use]
    pub fn configure(initial_key: Option<&str>, initial_direction: Option<SortDirection>) -> Self {
        let state = initial_key
            .map(|key| SortState::new(key, initial_direction.unwrap_or_default()));
        Self {
            data: Vec::new(),
            state,
            order: Vec::new(),
        }
    }

    /// Creates a handle over `data` with no active sort.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let mut sortable = Self::configure(None, None);
        sortable.set_data(data);
        sortable
    }

    /// Replaces the input sequence.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.recompute();
    }

    /// Applies a column-header click for `path`.
    pub fn request_sort(&mut self, path: impl Into<FieldPath>) {
        let next = SortState::requested(self.state.as_ref(), path.into());
        debug!(key = %next.key, direction = ?next.direction, "sort requested");
        self.state = Some(next);
        self.recompute();
    }

    /// Drops the active sort, restoring input order.
    pub fn clear_sort(&mut self) {
        self.state = None;
        self.recompute();
    }

    /// Header indicator for `path`.
    #[must_use]
    pub fn sort_icon(&self, path: &str) -> SortIcon {
        SortState::icon_for(self.state.as_ref(), path)
    }

    #[must_use]
    pub fn sort_state(&self) -> Option<&SortState> {
        self.state.as_ref()
    }

    /// The input sequence in sorted order.
    #[must_use]
    pub fn sorted_data(&self) -> Vec<&T> {
        self.order.iter().map(|&i| &self.data[i]).collect()
    }

    /// The input sequence in its original order.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn recompute(&mut self) {
        self.order = sort_indices(&self.data, self.state.as_ref());
    }
}

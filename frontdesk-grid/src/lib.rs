//! Client-side data-grid engines shared by every front-desk list screen.
//!
//! - [`SortableData<T>`] — stable sort over a dotted field path with a
//!   toggleable per-column direction
//! - [`Paginator`] — page slicing with clamped navigation
//! - [`SearchFilter`] — case-insensitive substring search over field paths
//! - [`GridView<T>`] — the filter → sort → paginate pipeline a screen binds to
//!
//! All engines are synchronous and pure over in-memory data. None of them
//! return errors: unresolvable paths tie, out-of-range pages clamp, invalid
//! page sizes are rejected as no-ops.

mod config;
mod filter;
mod pagination;
mod sort;
mod view;

pub use config::GridConfig;
pub use filter::SearchFilter;
pub use pagination::{Page, Paginator};
pub use sort::{
    compare_values, sort_indices, sort_records, SortDirection, SortIcon, SortState, SortableData,
};
pub use view::{GridPage, GridView};

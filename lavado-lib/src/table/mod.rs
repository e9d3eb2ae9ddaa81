//! Table views over CRM records
//!
//! A [`TableView`] takes rows and [`Column`] definitions and derives the
//! rows to show: filtered, sorted, paginated, with a selection on top.
//! Rendering is left to the caller.

mod actions;
mod column;
mod filter;
mod page;
mod selection;
mod sort;
mod view;

pub use actions::*;
pub use column::*;
pub use filter::*;
pub use page::*;
pub use selection::*;
pub use sort::*;
pub use view::*;

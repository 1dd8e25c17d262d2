//! Core logic behind the results table.
//!
//! This module provides:
//! - [`apply`] - the filter/sort query engine
//! - [`TableState`] - table state driven by `set_filter`, `set_sort`, `select_row`
//! - [`DataSource`] - one-shot loading of the package feed
//! - [`serial_to_local`] - spreadsheet serial date conversion

pub mod collation;
pub mod error;
pub mod query;
pub mod serial_date;
pub mod source;
mod table;

pub use collation::{Collator, PlatformCollator, UnicodeCollator};
pub use query::apply;
pub use serial_date::{serial_to_datetime, serial_to_local};
pub use source::{DataSource, HttpRowSource, LoadOutcome, RowSource};
pub use table::TableState;

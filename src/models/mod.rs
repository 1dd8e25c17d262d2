//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Row`], [`Dataset`], [`ResultSet`] - Package records and the feed document
//! - [`FilterSpec`], [`SortSpec`], [`SortOrder`] - Results table queries
//! - [`DialogTab`], [`DownloadGate`] - Package details dialog

mod dialog;
mod query;
mod row;

pub use dialog::{DialogTab, DownloadGate};
pub use query::{ALL_OPTION, FilterSpec, SortOrder, SortSpec};
pub use row::{AttrValue, Dataset, FieldValue, PublishedDate, ResultSet, Row, SerialDate};

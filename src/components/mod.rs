//! UI components built with Leptos.
//!
//! - [`ResultsTable`] - Sortable, filterable package table
//! - [`PackageDialog`] - Package details, EULA gate, share and download

mod dialog;
mod results;
mod tooltip;

pub use dialog::{DialogState, PackageDialog};
pub use results::ResultsTable;
pub use tooltip::Flash;

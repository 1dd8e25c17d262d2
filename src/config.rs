//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use log::LevelFilter;

// =============================================================================
// Page Integration
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Authored results block whose child `div`s carry the column labels.
pub const RESULTS_BLOCK_SELECTOR: &str = ".results";

/// Filter panel that emits [`FILTERS_CHANGED_EVENT`].
pub const FILTERS_SELECTOR: &str = "sd-filters";

/// Custom event carrying a filter payload in its `detail`.
pub const FILTERS_CHANGED_EVENT: &str = "change:filters";

/// Column labels used when the page does not author any.
///
/// The last column is the default sort column.
pub const DEFAULT_COLUMNS: &[&str] = &["Package Name", "Size", "Software Type", "Date Published"];

// =============================================================================
// Network Configuration
// =============================================================================

/// Path of the package result set.
pub const DATA_PATH: &str = "/general-packages.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Suffix appended to a EULA page path to get its plain HTML rendition.
pub const EULA_PLAIN_SUFFIX: &str = ".plain.html";

/// Query parameter carrying the package name in share links.
pub const SHARE_QUERY_PARAM: &str = "package";

// =============================================================================
// Assets
// =============================================================================

/// Base path of package thumbnails.
pub const ICON_BASE_PATH: &str = "/icons/thumbnails/";

// =============================================================================
// Display Configuration
// =============================================================================

/// Display format for publication dates (e.g. "Jan 01, 2023").
pub const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Placeholder for values that cannot be displayed.
pub const MISSING_VALUE: &str = "-";

/// Package size units. Sizes in the feed are expressed in megabytes.
pub mod package_size {
    /// Unit step between consecutive units.
    pub const UNIT_STEP: f64 = 1024.0;
    /// Unit suffixes, smallest first.
    pub const UNITS: &[&str] = &["MB", "GB", "TB", "PB"];
}

/// Tooltip visibility durations (milliseconds).
pub mod tooltips {
    /// "You need to accept the EULA terms" warning.
    pub const EULA_WARNING_MS: u32 = 3000;
    /// "Copied URL" confirmation.
    pub const SHARE_COPIED_MS: u32 = 1000;
}

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

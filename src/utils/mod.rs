//! Utility modules for web, DOM, and text operations.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_text`] - Network fetching with timeout
//! - [`sanitize_html`] - XSS-safe HTML for fetched documents
//! - [`parse_float_prefix`] - Lenient number parsing for text fields
//! - [`string_to_key`], [`ClassList`] - Column keys and CSS class lists

pub mod dom;
mod fetch;
pub mod format;
mod html;
pub mod logger;
mod number;
mod text;
mod url;

pub use fetch::{RaceResult, fetch_json, fetch_text, race_with_timeout};
pub use html::sanitize_html;
pub use number::parse_float_prefix;
pub use text::{ClassList, camel_case, snake_case, string_to_key};
pub use url::{eula_plain_url, share_url};

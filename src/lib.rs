//! Client-side results table for a software-distribution page.
//!
//! The package feed is loaded once, its spreadsheet serial dates are
//! normalized, and the table is filtered and sorted locally.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;

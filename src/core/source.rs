//! One-shot loading of the package feed.
//!
//! A [`DataSource`] fetches the result set once, normalizes publication
//! dates, and reports a single [`LoadOutcome`]. Failures never escape as
//! errors: the outcome then carries an empty dataset so the table can
//! render instead of waiting forever.

use std::future::Future;

use chrono::{Local, TimeZone};

use super::error::FetchError;
use super::serial_date::normalize_rows;
use crate::models::{Dataset, ResultSet};
use crate::utils::fetch_json;

/// Anything that can produce the raw result set.
pub trait RowSource {
    fn fetch(&self) -> impl Future<Output = Result<ResultSet, FetchError>>;
}

/// Fetches the result set over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRowSource {
    url: String,
}

impl HttpRowSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RowSource for HttpRowSource {
    async fn fetch(&self) -> Result<ResultSet, FetchError> {
        fetch_json(&self.url).await
    }
}

/// Result of the single load: always a dataset, plus the error if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    pub error: Option<FetchError>,
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Loads a row source exactly once.
///
/// [`DataSource::load`] consumes the loader, so a second fetch cannot be
/// issued through the same instance.
#[derive(Debug)]
pub struct DataSource<S, Tz = Local> {
    source: S,
    tz: Tz,
}

impl<S: RowSource> DataSource<S> {
    /// Loader normalizing dates in the local time zone.
    pub fn new(source: S) -> Self {
        Self { source, tz: Local }
    }
}

impl<S: RowSource, Tz: TimeZone> DataSource<S, Tz> {
    /// Loader normalizing dates in `tz`.
    pub fn with_time_zone(source: S, tz: Tz) -> Self {
        Self { source, tz }
    }

    /// Fetch, normalize and report.
    pub async fn load(self) -> LoadOutcome {
        match self.source.fetch().await {
            Ok(result_set) => {
                let rows = normalize_rows(result_set.data, &self.tz);
                log::debug!("loaded {} packages", rows.len());
                LoadOutcome {
                    dataset: Dataset::new(rows),
                    error: None,
                }
            }
            Err(err) => {
                if err.is_http_status() {
                    log::warn!("package feed rejected: {}", err);
                } else {
                    log::warn!("package feed unavailable: {}", err);
                }
                LoadOutcome {
                    dataset: Dataset::empty(),
                    error: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PublishedDate, Row, SerialDate};
    use chrono::{NaiveDate, Utc};
    use std::cell::Cell;

    /// In-memory source counting how often it is fetched.
    struct StaticSource {
        result: Result<ResultSet, FetchError>,
        fetches: Cell<usize>,
    }

    impl StaticSource {
        fn new(result: Result<ResultSet, FetchError>) -> Self {
            Self {
                result,
                fetches: Cell::new(0),
            }
        }
    }

    impl RowSource for &StaticSource {
        async fn fetch(&self) -> Result<ResultSet, FetchError> {
            self.fetches.set(self.fetches.get() + 1);
            self.result.clone()
        }
    }

    fn dated_row(name: &str, serial: &str) -> Row {
        let mut row = Row::new(name, "1");
        row.date_published = PublishedDate::Raw(SerialDate::Text(serial.to_string()));
        row
    }

    #[tokio::test]
    async fn test_load_normalizes_dates() {
        let source = StaticSource::new(Ok(ResultSet {
            data: vec![dated_row("Acrobat", "44927.5"), dated_row("Broken", "soon")],
        }));

        let outcome = DataSource::with_time_zone(&source, Utc).load().await;

        assert!(outcome.is_ok());
        assert_eq!(source.fetches.get(), 1);
        let rows = outcome.dataset.rows();
        let noon = NaiveDate::from_ymd_opt(2023, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        assert_eq!(rows[0].date_published, PublishedDate::At(noon));
        assert_eq!(rows[1].date_published, PublishedDate::Invalid);
    }

    #[tokio::test]
    async fn test_failure_yields_empty_dataset() {
        let source = StaticSource::new(Err(FetchError::HttpError(503)));

        let outcome = DataSource::with_time_zone(&source, Utc).load().await;

        assert!(outcome.dataset.is_empty());
        assert_eq!(outcome.error, Some(FetchError::HttpError(503)));
        assert_eq!(source.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_parse_failure_is_reported() {
        let source = StaticSource::new(Err(FetchError::JsonParseError("eof".into())));

        let outcome = DataSource::new(&source).load().await;

        assert!(!outcome.is_ok());
        assert!(outcome.dataset.is_empty());
    }
}

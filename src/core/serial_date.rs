//! Spreadsheet serial date conversion.
//!
//! A serial date counts days since 1899-12-30; the fractional part is the
//! time of day. Serial dates carry no time zone. The calendar date is read
//! from the UTC instant in the target zone and combined with the clock time
//! as wall-clock components, which matches how spreadsheet exports are
//! rendered by the sites consuming them.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};

use crate::models::{PublishedDate, Row};

/// Days between the serial epoch (1899-12-30) and 1970-01-01.
pub const UNIX_EPOCH_SERIAL: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Nudge applied to the fraction so exact boundaries do not floor one second short.
const TIME_EPSILON: f64 = 1e-7;

/// Convert a serial date to a wall-clock date-time in `tz`.
///
/// Returns `None` for `NaN`, infinite or out-of-range serials.
pub fn serial_to_datetime<Tz: TimeZone>(serial: f64, tz: &Tz) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let utc_days = (serial - UNIX_EPOCH_SERIAL).floor();
    let instant = DateTime::from_timestamp((utc_days * SECONDS_PER_DAY) as i64, 0)?;
    let date = instant.with_timezone(tz).date_naive();

    let fraction = serial - serial.floor() + TIME_EPSILON;
    let total_secs = (SECONDS_PER_DAY * fraction).floor() as i64;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    // An hour value of 24 rolls over into the next day.
    date.and_hms_opt(0, 0, 0)?.checked_add_signed(
        TimeDelta::hours(hours) + TimeDelta::minutes(minutes) + TimeDelta::seconds(seconds),
    )
}

/// Convert a serial date using the local time zone.
pub fn serial_to_local(serial: f64) -> Option<NaiveDateTime> {
    serial_to_datetime(serial, &Local)
}

/// Normalize a publication date in `tz`. Already-normalized dates are kept.
pub fn normalize_date<Tz: TimeZone>(date: &PublishedDate, tz: &Tz) -> PublishedDate {
    match date {
        PublishedDate::Raw(serial) => match serial_to_datetime(serial.value(), tz) {
            Some(at) => PublishedDate::At(at),
            None => {
                log::warn!("invalid publication date {:?}", serial);
                PublishedDate::Invalid
            }
        },
        other => other.clone(),
    }
}

/// Normalize the publication date of every row in `tz`.
pub fn normalize_rows<Tz: TimeZone>(rows: Vec<Row>, tz: &Tz) -> Vec<Row> {
    rows.into_iter()
        .map(|mut row| {
            row.date_published = normalize_date(&row.date_published, tz);
            row
        })
        .collect()
}

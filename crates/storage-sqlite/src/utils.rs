//! Utility functions for SQLite storage operations.
//!
//! Date, time, and money columns are stored as text; the helpers here keep
//! the formatting and tolerant parsing in one place. Also provides chunking
//! for `IN (...)` queries to stay under SQLite's parameter limit.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
pub const SQLITE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum number of parameters for SQLite IN (...) queries.
///
/// SQLite limits the number of bound parameters per statement (typically 999
/// via SQLITE_MAX_VARIABLE_NUMBER). 500 leaves room for the query's other
/// parameters.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Chunk a slice into smaller slices for batch SQLite queries with
/// `IN (...)` clauses.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

/// Current UTC time in the column text format.
pub fn now_utc_text() -> String {
    Utc::now()
        .naive_utc()
        .format(SQLITE_DATETIME_FORMAT)
        .to_string()
}

/// Parses a stored timestamp, falling back to the Unix epoch on malformed
/// data rather than failing the whole row.
pub fn parse_datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, SQLITE_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .unwrap_or_else(|e| {
            log::warn!("Unparseable timestamp '{}': {}", raw, e);
            DateTime::<Utc>::UNIX_EPOCH.naive_utc()
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(SQLITE_DATE_FORMAT).to_string()
}

/// Parses an optional stored date column; malformed values read as absent.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw, SQLITE_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Unparseable date '{}': {}", raw, e);
            None
        }
    }
}

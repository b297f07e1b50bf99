//! Log entry formatting.

use chrono::{Local, NaiveDateTime};

use crate::types::TIMESTAMP_FORMAT;

/// Source of the current local time.
pub type Clock = fn() -> NaiveDateTime;

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format `"<timestamp>: <message>"` into `out`, without a line terminator.
pub fn format_entry_into(out: &mut String, at: NaiveDateTime, message: &str) {
    use std::fmt::Write;

    out.clear();
    // Writing into a String cannot fail.
    let _ = write!(out, "{}: {}", at.format(TIMESTAMP_FORMAT), message);
}

pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    let mut out = String::with_capacity(TIMESTAMP_FORMAT.len() + 2 + message.len());
    format_entry_into(&mut out, at, message);
    out
}

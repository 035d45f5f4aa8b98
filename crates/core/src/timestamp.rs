//! Deleted-timestamp formatting.

use crate::error::{Error, Result};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Stored format for the deleted-timestamp column. Lexicographic order
/// matches chronological order, so retention cutoffs compare as plain text.
const DATETIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Sentinel stored in the timestamp column while a record is active. The
/// deleted flag stays authoritative; the sentinel is never interpreted as a
/// "not deleted" signal on its own.
pub const DELETED_AT_SENTINEL: &str = "0";

/// Format a timestamp for storage in the deleted-timestamp column.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String> {
    at.format(DATETIME_FORMAT)
        .map_err(|e| Error::Timestamp(e.to_string()))
}

/// Parse a stored deleted-timestamp back into a UTC timestamp.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime> {
    let parsed = PrimitiveDateTime::parse(raw, DATETIME_FORMAT)
        .map_err(|e| Error::Timestamp(format!("{raw:?}: {e}")))?;
    Ok(parsed.assume_utc())
}

//! CSV row parsing.
//!
//! The first physical line is a header and is always discarded, even when
//! it is blank. Every following line is one comma-separated record whose
//! fields are trimmed. Quoting is disabled: a stray `"` stays inside its
//! field instead of swallowing the rest of the file, so a bad row can only
//! ever cost itself.
//!
//! | Kind | Minimum fields | Columns |
//! |------|----------------|---------|
//! | location | 3 | id, latitude, longitude |
//! | metadata | 4 | id, type, rating, reviews |
//!
//! Trailing empty fields do not count toward the minimum. Rows with too few
//! fields are skipped silently. Rows with an empty id or an unparseable
//! number are skipped with a warning.

use csv::{ReaderBuilder, StringRecord, Trim};
use poi_map_poi_models::{Location, Metadata};

/// Minimum number of fields in a location row.
pub const LOCATION_FIELDS: usize = 3;

/// Minimum number of fields in a metadata row.
pub const METADATA_FIELDS: usize = 4;

/// Why a single row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Fewer fields than the record kind needs. Not logged.
    TooFewFields,
    /// The id field is empty.
    EmptyId,
    /// A numeric field failed to parse.
    InvalidNumber,
    /// The CSV reader could not decode the row.
    Unreadable,
}

impl DropReason {
    /// Whether dropping a row for this reason emits a warning.
    #[must_use]
    pub const fn is_logged(self) -> bool {
        !matches!(self, Self::TooFewFields)
    }
}

/// A row that did not make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line number in the original text.
    pub line: u64,
    /// Why the row was dropped.
    pub reason: DropReason,
}

/// Records kept from a CSV payload, plus the rows that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRows<T> {
    /// Successfully parsed records, in input order.
    pub records: Vec<T>,
    /// Dropped rows, in input order.
    pub dropped: Vec<DroppedRow>,
}

/// Parses location rows (`id,latitude,longitude`).
#[must_use]
pub fn parse_locations(text: &str) -> Vec<Location> {
    parse_location_rows(text).records
}

/// Parses metadata rows (`id,type,rating,reviews`).
#[must_use]
pub fn parse_metadata(text: &str) -> Vec<Metadata> {
    parse_metadata_rows(text).records
}

/// Same as [`parse_locations`], also reporting dropped rows.
#[must_use]
pub fn parse_location_rows(text: &str) -> ParsedRows<Location> {
    parse_rows(text, "location", LOCATION_FIELDS, |row| {
        let id = row_id(row)?;
        Ok(Location::new(id, number(&row[1])?, number(&row[2])?))
    })
}

/// Same as [`parse_metadata`], also reporting dropped rows.
#[must_use]
pub fn parse_metadata_rows(text: &str) -> ParsedRows<Metadata> {
    parse_rows(text, "metadata", METADATA_FIELDS, |row| {
        let id = row_id(row)?;
        Ok(Metadata::new(id, &row[1], number(&row[2])?, number(&row[3])?))
    })
}

fn row_id(row: &StringRecord) -> Result<&str, DropReason> {
    match row.get(0) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(DropReason::EmptyId),
    }
}

fn number<T: std::str::FromStr>(field: &str) -> Result<T, DropReason> {
    field.parse().map_err(|_| DropReason::InvalidNumber)
}

/// Number of fields once trailing empty ones are ignored.
fn field_count(row: &StringRecord) -> usize {
    row.iter().collect::<Vec<_>>().iter().rposition(|f| !f.is_empty()).map_or(0, |i| i + 1)
}

/// Renders a row back into its comma-joined form for diagnostics.
fn display_row(row: &StringRecord) -> String {
    row.iter().collect::<Vec<_>>().join(",")
}

fn parse_rows<T>(
    text: &str,
    kind: &str,
    min_fields: usize,
    build: impl Fn(&StringRecord) -> Result<T, DropReason>,
) -> ParsedRows<T> {
    let body = text.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut dropped = Vec::new();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line() + 1);
                log::warn!("Skipping unreadable CSV {kind} line {line}: {e}");
                dropped.push(DroppedRow {
                    line,
                    reason: DropReason::Unreadable,
                });
                continue;
            }
        };

        // Positions are relative to `body`, which starts after the header.
        let line = row.position().map_or(0, |p| p.line() + 1);

        let outcome = if field_count(&row) < min_fields {
            Err(DropReason::TooFewFields)
        } else {
            build(&row)
        };

        match outcome {
            Ok(record) => records.push(record),
            Err(reason) => {
                match reason {
                    DropReason::EmptyId => log::warn!(
                        "Skipping CSV {kind} line {line} with empty ID: {}",
                        display_row(&row)
                    ),
                    DropReason::InvalidNumber | DropReason::Unreadable => log::warn!(
                        "Error parsing CSV {kind} line {line}: {}",
                        display_row(&row)
                    ),
                    DropReason::TooFewFields => {}
                }
                dropped.push(DroppedRow { line, reason });
            }
        }
    }

    log::info!(
        "Parsed {} {kind} rows from CSV ({} skipped)",
        records.len(),
        dropped.len()
    );

    ParsedRows { records, dropped }
}

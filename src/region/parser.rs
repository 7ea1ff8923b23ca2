//! CSV parsing for the administrative-region list.
//!
//! The source is a header-rowed CSV (`adm_dong_code,city,district,
//! neighborhood`) bundled into the binary; a path argument can point at a
//! replacement file. Bad rows are dropped, and a failure to read or parse
//! the whole resource degrades to an empty table — the UI shows "no data"
//! rather than crashing.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::{RegionEntry, RegionTable};

/// Region CSV compiled into the binary; used when no override is given.
const BUNDLED_CSV: &str = include_str!("../../assets/adm_dong_list.csv");

/// Parse CSV text into a region table.
///
/// Rows that fail to deserialize or leave a required field empty are
/// filtered out; they never abort the parse.
pub fn parse_regions(text: &str) -> RegionTable {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RegionEntry>() {
        match row {
            Ok(entry) if entry.is_complete() => entries.push(entry),
            Ok(entry) => {
                log::debug!("dropping incomplete region row: {entry:?}");
                dropped += 1;
            }
            Err(err) => {
                log::debug!("dropping malformed region row: {err}");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} unusable region rows");
    }
    if entries.is_empty() {
        log::error!("region csv produced no usable rows");
    }

    RegionTable::new(entries)
}

/// Load the region table from `path`, or from the bundled asset when no
/// path is given. Read failures are logged and yield an empty table.
pub fn load_regions(path: Option<&Path>) -> RegionTable {
    match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(text) => parse_regions(&text),
            Err(err) => {
                log::error!("failed to read region csv {}: {err}", p.display());
                RegionTable::default()
            }
        },
        None => parse_regions(BUNDLED_CSV),
    }
}

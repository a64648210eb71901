//! Read-only lookup lists served to the booking form.
//!
//! Loaded once at start-up from CSV exports of the operations spreadsheets
//! and never mutated afterwards.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{error, info};

use crate::error::CoreError;

/// Used when `airports.csv` cannot be read.
pub const FALLBACK_AIRPORTS: &[&str] = &[
    "Kuwait International",
    "Dubai International",
    "Delhi International",
    "Mumbai International",
];

const AIRPORT_COLUMN: &str = "code";

/// One row of the corporate-name sheet, keyed by column header.
pub type CorpName = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReferenceData {
    pub airports: Vec<String>,
    pub corp_names: Vec<CorpName>,
}

impl ReferenceData {
    /// Load both lists, substituting fallbacks for anything unreadable.
    pub fn load(airports_path: &Path, corp_names_path: &Path) -> Self {
        let airports = match load_airports(airports_path) {
            Ok(airports) => {
                info!(count = airports.len(), path = %airports_path.display(), "loaded airports");
                airports
            }
            Err(e) => {
                error!(path = %airports_path.display(), "error loading airports data: {e}");
                FALLBACK_AIRPORTS.iter().map(|s| s.to_string()).collect()
            }
        };

        let corp_names = match load_corp_names(corp_names_path) {
            Ok(names) => {
                info!(count = names.len(), path = %corp_names_path.display(), "loaded corp names");
                names
            }
            Err(e) => {
                error!(path = %corp_names_path.display(), "error loading corp names data: {e}");
                Vec::new()
            }
        };

        Self {
            airports,
            corp_names,
        }
    }
}

pub fn load_airports(path: &Path) -> Result<Vec<String>, CoreError> {
    read_airports(std::fs::File::open(path)?)
}

pub fn load_corp_names(path: &Path) -> Result<Vec<CorpName>, CoreError> {
    read_corp_names(std::fs::File::open(path)?)
}

/// Reads the `code` column; blank cells are skipped.
pub fn read_airports<R: Read>(source: R) -> Result<Vec<String>, CoreError> {
    let mut reader = csv::Reader::from_reader(source);
    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == AIRPORT_COLUMN)
        .ok_or_else(|| CoreError::MissingColumn(AIRPORT_COLUMN.to_string()))?;

    let mut airports = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(code) = record.get(column).map(str::trim)
            && !code.is_empty()
        {
            airports.push(code.to_string());
        }
    }
    Ok(airports)
}

/// Every record becomes a header → value map. Empty cells are omitted,
/// matching how the spreadsheet export drops blank columns.
pub fn read_corp_names<R: Read>(source: R) -> Result<Vec<CorpName>, CoreError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: CorpName = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, value)| !header.is_empty() && !value.trim().is_empty())
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

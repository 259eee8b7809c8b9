//! Loader module for the ingest crate.
//!
//! Reads a delimited file with a header row into a [`Dataset`], inferring a
//! scalar type per column and turning blank or NA cells into nulls.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::dataset::Dataset;
use crate::errors::IngestError;
use solr_indexer_shared::{FieldValue, Record};

/// Cell texts read as missing values.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Configuration for the CSV loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Columns holding dates. Blank cells become null, everything else is
    /// kept verbatim as text.
    pub date_columns: Vec<String>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            date_columns: vec!["Exit Date".to_string(), "Hire Date".to_string()],
            delimiter: b',',
        }
    }
}

/// Scalar type shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
    /// Text where a whitespace-only cell also counts as blank.
    Date,
}

fn is_missing(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

/// Narrowest kind that fits every non-missing cell.
fn infer_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    for cell in cells.filter(|c| !is_missing(c)) {
        let cell = cell.trim();
        match kind {
            ColumnKind::Integer if cell.parse::<i64>().is_ok() => {}
            ColumnKind::Integer | ColumnKind::Float if cell.parse::<f64>().is_ok() => {
                kind = ColumnKind::Float;
            }
            _ => return ColumnKind::Text,
        }
    }
    kind
}

fn convert_cell(cell: &str, kind: ColumnKind) -> FieldValue {
    let missing = match kind {
        ColumnKind::Date => is_missing(cell.trim()),
        _ => is_missing(cell),
    };
    if missing {
        return FieldValue::Null;
    }

    match kind {
        ColumnKind::Integer => cell
            .trim()
            .parse()
            .map(FieldValue::Integer)
            .unwrap_or_else(|_| FieldValue::Text(cell.to_string())),
        ColumnKind::Float => cell
            .trim()
            .parse()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::Text(cell.to_string())),
        ColumnKind::Text | ColumnKind::Date => FieldValue::Text(cell.to_string()),
    }
}

/// Give repeated header names a numeric suffix (`Name`, `Name.1`, ...).
///
/// A suffix already taken by another header is skipped, so every column keeps
/// a distinct name.
fn dedupe_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut emitted: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<&'a str, usize> = HashMap::new();
    headers
        .map(|header| {
            let mut name = header.to_string();
            if emitted.contains(&name) {
                let suffix = suffixes.entry(header).or_insert(0);
                loop {
                    *suffix += 1;
                    name = format!("{}.{}", header, suffix);
                    if !emitted.contains(&name) {
                        break;
                    }
                }
            }
            emitted.insert(name.clone());
            name
        })
        .collect()
}

/// Reads CSV input into a [`Dataset`].
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: LoaderConfig,
}

impl CsvLoader {
    /// Create a loader with the default date columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file into memory.
    ///
    /// # Returns
    ///
    /// * `Ok(Dataset)` - Header and normalized records
    /// * `Err(IngestError)` - If the file cannot be opened or is malformed
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_records(&self, path: impl AsRef<Path>) -> Result<Dataset, IngestError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| IngestError::io(format!("{}: {}", path.display(), e)))?;

        let dataset = self.load_from_reader(file)?;
        info!(
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Loaded CSV file"
        );
        Ok(dataset)
    }

    /// Read CSV from any reader. The first row is the header.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Dataset, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let columns = dedupe_headers(reader.headers()?.iter());

        let mut rows: Vec<csv::StringRecord> = Vec::new();
        for row in reader.records() {
            rows.push(row?);
        }

        let kinds: Vec<ColumnKind> = columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if self.is_date_column(column) {
                    ColumnKind::Date
                } else {
                    infer_kind(rows.iter().filter_map(|row| row.get(index)))
                }
            })
            .collect();

        let records: Vec<Record> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(&kinds)
                    .zip(row.iter())
                    .map(|((column, kind), cell)| (column.clone(), convert_cell(cell, *kind)))
                    .collect()
            })
            .collect();

        for column in columns.iter().filter(|c| self.is_date_column(c)) {
            let nulled = records
                .iter()
                .filter(|r| r.get(column).is_some_and(FieldValue::is_null))
                .count();
            debug!(column = %column, nulled, "Normalized date column");
        }

        Ok(Dataset::new(columns, records))
    }

    fn is_date_column(&self, column: &str) -> bool {
        self.config.date_columns.iter().any(|c| c == column)
    }
}

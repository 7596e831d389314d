use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to construct a [`Dataset`]. Fatal at startup, never retried.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("{0} contains no data rows")]
    Empty(String),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns the extract must provide. Anything else (e.g. Eurostat's
/// "Flag and Footnotes") is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["GEO", "NA_ITEM", "UNIT", "TIME", "Value"];

/// One raw CSV record before normalisation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "TIME")]
    time: String,
    #[serde(rename = "GEO")]
    geo: String,
    #[serde(rename = "NA_ITEM")]
    na_item: String,
    #[serde(rename = "UNIT")]
    unit: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Canonical short names for the long-form geo labels in the extract.
/// Any label not listed here passes through verbatim.
const GEO_RENAMES: [(&str, &str); 3] = [
    (
        "Euro area (EA11-2000, EA12-2006, EA13-2007, EA15-2008, EA16-2010, EA17-2013, EA18-2014, EA19)",
        "Euro area",
    ),
    (
        "Germany (until 1990 former territory of the FRG)",
        "Germany",
    ),
    (
        "Kosovo (under United Nations Security Council Resolution 1244/99)",
        "Kosovo",
    ),
];

/// Load the Eurostat extract into a [`Dataset`].
///
/// The `Value` column uses the European convention (`.` thousands separator,
/// `,` decimal mark) with `:` as the missing-data sentinel; both forms are
/// normalised here so the rest of the crate only ever sees `Option<f64>`.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataLoadError::MissingColumn(col));
        }
    }

    let mut observations = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result?;

        let time = record.time.trim().parse::<i32>().map_err(|_| DataLoadError::Row {
            row: row_no,
            message: format!("'{}' is not a year", record.time),
        })?;

        let value = parse_value(&record.value);
        if value.is_none() && record.value.trim() != ":" {
            debug!("row {row_no}: unparseable value '{}'", record.value);
        }

        observations.push(Observation {
            geo: canonical_geo(&record.geo).to_string(),
            na_item: record.na_item,
            unit: record.unit,
            time,
            value,
        });
    }

    if observations.is_empty() {
        return Err(DataLoadError::Empty(path.display().to_string()));
    }

    let dataset = Dataset::from_observations(observations);
    info!(
        "loaded {} observations: {} indicators, {} geos, {} units, years {:?}",
        dataset.len(),
        dataset.indicators.len(),
        dataset.geos.len(),
        dataset.units.len(),
        dataset.year_range(),
    );
    Ok(dataset)
}

/// Normalise a `Value` cell: strip `.` thousands separators, turn the `,`
/// decimal mark into `.`, parse as `f64`. The `:` sentinel and anything
/// that still fails to parse become `None`.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == ":" {
        return None;
    }
    trimmed.replace('.', "").replace(',', ".").parse().ok()
}

/// Apply the rename table to a geo label. Exact matches only.
fn canonical_geo(raw: &str) -> &str {
    GEO_RENAMES
        .iter()
        .find(|(long, _)| *long == raw)
        .map(|(_, short)| *short)
        .unwrap_or(raw)
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Observation, ObservationTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an observation table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one sample per row
/// * `.json` – records-oriented array: `[{ "column": value, ... }, ...]`
pub fn load_file(path: &Path) -> Result<ObservationTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.  Every cell is typed by
/// guessing (integer → float → string, empty cell = null).
fn load_csv(path: &Path) -> Result<ObservationTable> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut cells = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            cells.insert(headers[col_idx].clone(), guess_cell_type(value));
        }
        rows.push(Observation { cells });
    }

    Ok(ObservationTable::from_rows(rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record of a records-oriented export (the default
/// `df.to_json(orient='records')` layout).
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct JsonRow(BTreeMap<String, JsonValue>);

/// Expected JSON schema:
///
/// ```json
/// [
///   { "exDNA type": "Pit", "tet33": 0.012, "tetG": 0.34, ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<ObservationTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<JsonRow> = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = records
        .into_iter()
        .map(|JsonRow(map)| Observation {
            cells: map
                .into_iter()
                .map(|(col, val)| (col, json_to_cell(val)))
                .collect(),
        })
        .collect();

    Ok(ObservationTable::from_rows(rows))
}

fn json_to_cell(val: JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

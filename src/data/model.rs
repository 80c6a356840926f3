use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in an observation table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell mirroring common Pandas dtypes.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the cell as an `f64` abundance measurement.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether the cell is a string equal to the given categorical label.
    pub fn is_label(&self, label: &str) -> bool {
        matches!(self, CellValue::String(s) if s == label)
    }
}

// ---------------------------------------------------------------------------
// Gene panel
// ---------------------------------------------------------------------------

/// The fixed, ordered gene panel every analysis runs over.
pub const GENES: [&str; 9] = [
    "tet33", "tetG", "tetM", "tetX", "ermB", "sul1", "intI1", "intI2", "intI3",
];

/// Number of unordered gene pairs: the edge count of the complete graph
/// over the panel.
pub const GENE_PAIRS: usize = GENES.len() * (GENES.len() - 1) / 2;

// ---------------------------------------------------------------------------
// Observation – one row of the table
// ---------------------------------------------------------------------------

/// A single sample (one row of the source table).
#[derive(Debug, Clone)]
pub struct Observation {
    /// Dynamic columns: column_name → cell.
    pub cells: BTreeMap<String, CellValue>,
}

// ---------------------------------------------------------------------------
// ObservationTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed column indices.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    /// All observations (rows).
    pub rows: Vec<Observation>,
    /// Ordered list of column names.
    pub column_names: Vec<String>,
    /// For each column the sorted set of unique values.
    pub unique_values: BTreeMap<String, BTreeSet<CellValue>>,
}

impl ObservationTable {
    /// Build column indices from the loaded rows.
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        let mut column_names_set: BTreeSet<String> = BTreeSet::new();
        let mut unique_values: BTreeMap<String, BTreeSet<CellValue>> = BTreeMap::new();

        for row in &rows {
            for (col, val) in &row.cells {
                column_names_set.insert(col.clone());
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }
        let column_names: Vec<String> = column_names_set.into_iter().collect();
        ObservationTable {
            rows,
            column_names,
            unique_values,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> Observation {
        Observation {
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn from_rows_indexes_columns_and_unique_values() {
        let table = ObservationTable::from_rows(vec![
            row(&[
                ("exDNA type", CellValue::String("Pit".into())),
                ("tet33", CellValue::Float(0.5)),
            ]),
            row(&[
                ("exDNA type", CellValue::String("Fresh".into())),
                ("tet33", CellValue::Float(0.5)),
            ]),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names, vec!["exDNA type", "tet33"]);
        assert_eq!(table.unique_values["exDNA type"].len(), 2);
        assert_eq!(table.unique_values["tet33"].len(), 1);
    }

    #[test]
    fn as_f64_accepts_integers_and_floats_only() {
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::String("Pit".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn gene_panel_has_36_pairs() {
        assert_eq!(GENES.len(), 9);
        assert_eq!(GENE_PAIRS, 36);
    }
}

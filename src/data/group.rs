use anyhow::{Context, Result, bail};

use super::model::{GENES, Observation, ObservationTable};

// ---------------------------------------------------------------------------
// Group extraction: label predicate → gene matrix
// ---------------------------------------------------------------------------

/// A label-filtered slice of a table restricted to the gene panel,
/// stored column-major (one abundance series per panel gene).
#[derive(Debug, Clone)]
pub struct GeneMatrix {
    columns: Vec<Vec<f64>>,
    n_samples: usize,
}

impl GeneMatrix {
    /// Build from pre-assembled columns, one per panel gene in panel order.
    /// All columns must have the same length.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Self {
        assert_eq!(columns.len(), GENES.len(), "one column per panel gene");
        let n_samples = columns.first().map_or(0, Vec::len);
        assert!(
            columns.iter().all(|c| c.len() == n_samples),
            "ragged gene columns"
        );
        GeneMatrix { columns, n_samples }
    }

    /// Abundance series for the gene at `idx` (panel order).
    pub fn column(&self, idx: usize) -> &[f64] {
        &self.columns[idx]
    }

    /// Number of samples in the group.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }
}

/// Extract one condition group: the rows whose `label_column` cell equals
/// `label`, restricted to the nine panel genes.
///
/// A missing label column, an empty group, a missing gene column, or a
/// non-numeric gene cell is an error.
pub fn extract_group(
    table: &ObservationTable,
    label_column: &str,
    label: &str,
) -> Result<GeneMatrix> {
    if !table.column_names.iter().any(|c| c == label_column) {
        bail!("table has no '{label_column}' column");
    }

    let selected: Vec<&Observation> = table
        .rows
        .iter()
        .filter(|row| {
            row.cells
                .get(label_column)
                .is_some_and(|v| v.is_label(label))
        })
        .collect();

    if selected.is_empty() {
        let seen = table
            .unique_values
            .get(label_column)
            .map(|vals| {
                vals.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        bail!("no rows with {label_column} == '{label}' (values seen: {seen})");
    }

    let mut columns = Vec::with_capacity(GENES.len());
    for gene in GENES {
        let series: Vec<f64> = selected
            .iter()
            .enumerate()
            .map(|(row_no, row)| {
                let cell = row
                    .cells
                    .get(gene)
                    .with_context(|| format!("row {row_no}: missing '{gene}' column"))?;
                cell.as_f64()
                    .with_context(|| format!("row {row_no}: '{gene}' is not numeric ({cell})"))
            })
            .collect::<Result<_>>()?;
        columns.push(series);
    }

    Ok(GeneMatrix::from_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn sample_table() -> ObservationTable {
        let mut rows = Vec::new();
        for (label, offset) in [("Pit", 0.0), ("Pit", 1.0), ("Fresh", 2.0)] {
            let mut cells: std::collections::BTreeMap<String, CellValue> = GENES
                .iter()
                .enumerate()
                .map(|(g, gene)| (gene.to_string(), CellValue::Float(offset + g as f64)))
                .collect();
            cells.insert("exDNA type".into(), CellValue::String(label.into()));
            rows.push(Observation { cells });
        }
        ObservationTable::from_rows(rows)
    }

    #[test]
    fn filters_rows_by_label() {
        let table = sample_table();

        let pit = extract_group(&table, "exDNA type", "Pit").unwrap();
        assert_eq!(pit.n_samples(), 2);
        assert_eq!(pit.column(0), &[0.0, 1.0]);

        let fresh = extract_group(&table, "exDNA type", "Fresh").unwrap();
        assert_eq!(fresh.n_samples(), 1);
        assert_eq!(fresh.column(8), &[10.0]);
    }

    #[test]
    fn missing_label_column_is_an_error() {
        let table = sample_table();
        let err = extract_group(&table, "iDNA type", "Pit").unwrap_err();
        assert!(err.to_string().contains("no 'iDNA type' column"));
    }

    #[test]
    fn unknown_label_value_is_an_error() {
        let table = sample_table();
        let err = extract_group(&table, "exDNA type", "Lagoon").unwrap_err();
        assert!(err.to_string().contains("'Lagoon'"));
    }

    #[test]
    fn non_numeric_gene_cell_is_an_error() {
        let mut table = sample_table();
        table.rows[0]
            .cells
            .insert("sul1".into(), CellValue::String("n.d.".into()));
        let err = extract_group(&table, "exDNA type", "Pit").unwrap_err();
        assert!(err.to_string().contains("'sul1' is not numeric"));
    }
}

//! Tabular export: turning row records into a CSV file or an Excel workbook.

use crate::cli::ExportFormat;
use crate::data_fetcher::models::Row;
use crate::error::AppError;
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Ordered rows and named columns, ready to serialize.
///
/// Column order is whatever the source records yield: the union of keys in
/// first-seen order. If the API reorders its headers between runs the
/// artifact's column order follows suit; no independent stabilization is
/// applied here.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table from row records, preserving record order. Keys missing
    /// from a record become empty cells in that row.
    pub fn from_records(records: &[Row]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Writes the table to `path` in the requested format. A failing write
/// propagates as-is; no partially written file is cleaned up.
pub fn write_table(table: &Table, path: &Path, format: ExportFormat) -> Result<(), AppError> {
    info!(
        "Exporting {} rows x {} columns to {}",
        table.row_count(),
        table.columns.len(),
        path.display()
    );
    match format {
        ExportFormat::Csv => write_csv(table, path),
        ExportFormat::Excel => write_excel(table, path),
    }
}

/// Header row of column names with one leading unnamed index column; each
/// data row starts with its 0-based position.
fn write_csv(table: &Table, path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(String::new());
    header.extend(table.columns.iter().cloned());
    writer.write_record(&header)?;

    for (index, row) in table.rows.iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(index.to_string());
        record.extend(row.iter().map(cell_to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Same layout as the CSV, in a single-sheet workbook. Numbers are written as
/// numbers so the sheet stays usable for arithmetic.
fn write_excel(table: &Table, path: &Path) -> Result<(), AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, (col + 1) as u16, name)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let sheet_row = (index + 1) as u32;
        worksheet.write_number(sheet_row, 0, index as f64)?;
        for (col, value) in row.iter().enumerate() {
            let sheet_col = (col + 1) as u16;
            match value {
                Value::Null => {}
                Value::Number(n) => {
                    worksheet.write_number(sheet_row, sheet_col, n.as_f64().unwrap_or(0.0))?;
                }
                Value::String(s) => {
                    worksheet.write_string(sheet_row, sheet_col, s)?;
                }
                other => {
                    worksheet.write_string(sheet_row, sheet_col, cell_to_string(other))?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

// Boolean rendering matches the artifacts the pandas-based tooling wrote.
fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

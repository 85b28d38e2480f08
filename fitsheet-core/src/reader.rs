//! Workout sheet reader using calamine

use crate::config::InputConfig;
use crate::row::{Column, Field, Row};
use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

/// Rows of one worksheet with the captions found above them
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    /// Raw column captions as they appear in the sheet
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Read the workout sheet of a workbook
pub fn read_table<P: AsRef<Path>>(path: P, options: &InputConfig) -> Result<SheetTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match &options.sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                anyhow::bail!(
                    "Sheet '{}' not found in {} (available: {})",
                    name,
                    path.display(),
                    sheet_names.join(", ")
                );
            }
            name.clone()
        }
        None => sheet_names
            .first()
            .cloned()
            .with_context(|| format!("Workbook has no sheets: {}", path.display()))?,
    };
    debug!(sheet = %sheet_name, "Reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}'", sheet_name))?;

    let table = parse_table(&sheet_name, &range, options.header_rows)
        .with_context(|| format!("Invalid layout in sheet '{}'", sheet_name))?;
    debug!(rows = table.rows.len(), "Parsed worksheet rows");

    Ok(table)
}

/// Split a cell range into captions and typed rows
pub fn parse_table(sheet_name: &str, range: &Range<Data>, header_rows: usize) -> Result<SheetTable> {
    // Columns left of the used range still count as (empty) sheet columns
    let col_offset = range.start().map(|(_, c)| c as usize).unwrap_or(0);
    let width = if range.is_empty() {
        0
    } else {
        col_offset + range.width()
    };

    if width != Column::COUNT {
        anyhow::bail!(
            "Length mismatch: expected {} columns, found {}",
            Column::COUNT,
            width
        );
    }

    let mut raw_rows = range.rows().map(|cells| {
        let mut fields = vec![Field::Blank; col_offset];
        fields.extend(cells.iter().map(Field::from));
        fields
    });

    let mut captions = None;
    for _ in 0..header_rows {
        if let Some(header) = raw_rows.next() {
            captions = Some(header);
        }
    }

    let columns = match captions {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(i, field)| match field {
                Field::Blank => format!("Unnamed: {}", i),
                other => other.to_string(),
            })
            .collect(),
        None => Column::ALL.iter().map(|c| c.label().to_string()).collect(),
    };

    // Spacer rows with no value in any cell are not data
    let rows = raw_rows
        .filter(|fields| !fields.iter().all(Field::is_blank))
        .map(Row::from_fields)
        .collect::<Result<Vec<_>>>()?;

    Ok(SheetTable {
        sheet_name: sheet_name.to_string(),
        columns,
        rows,
    })
}

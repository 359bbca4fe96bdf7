use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::errors::{AppError, AppResult};

/// Sheets in workbook order; non-empty cells separated by spaces, one line per row.
pub fn extract(data: &[u8]) -> AppResult<String> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data)).map_err(|e| {
        AppError::ExtractionFailed(format!("Could not read spreadsheet: {}", e))
    })?;

    let mut text = String::new();
    for sheet_name in workbook.sheet_names() {
        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Skipping unreadable sheet '{}': {}", sheet_name, e);
                continue;
            }
        };

        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .filter(|cell| !matches!(cell, Data::Empty))
                .map(|cell| cell.to_string())
                .collect();
            if !cells.is_empty() {
                text.push_str(&cells.join(" "));
                text.push('\n');
            }
        }
        text.push('\n');
    }

    Ok(text)
}

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use crate::errors::{AppError, AppResult};

/// Body text in document order, one paragraph per line. Table cells are read
/// row by row.
pub fn extract(data: &[u8]) -> AppResult<String> {
    let docx = read_docx(data)
        .map_err(|e| AppError::ExtractionFailed(format!("Could not read Word document: {}", e)))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => push_paragraph(paragraph, &mut lines),
            DocumentChild::Table(table) => push_table(table, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn push_paragraph(paragraph: &Paragraph, lines: &mut Vec<String>) {
    let mut text = String::new();
    collect_runs(&paragraph.children, &mut text);
    if !text.is_empty() {
        lines.push(text);
    }
}

fn push_table(table: &Table, lines: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => push_paragraph(paragraph, lines),
                    TableCellContent::Table(nested) => push_table(nested, lines),
                    _ => {}
                }
            }
        }
    }
}

// hyperlinks wrap their own runs
fn collect_runs(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_runs(&link.children, text),
            _ => {}
        }
    }
}

//! Markdown table rendering
//!
//! Renders a [`Chunk`] as a GitHub-flavoured Markdown table. Columns are
//! padded to their widest cell so the raw issue body stays readable.
//!
//! Cell values are escaped: `|` becomes `\|` and line breaks become `<br>`,
//! so a field can never split a row or a column.

use crate::core::models::Chunk;

/// Narrowest separator GitHub accepts for a column
const MIN_WIDTH: usize = 3;

/// Escape one cell for use inside a table row
#[must_use]
pub fn escape_cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}

/// Render a chunk as a Markdown table.
///
/// Rows shorter than the widest row are padded with empty cells.
#[must_use]
pub fn render_markdown(chunk: &Chunk) -> String {
    let columns = chunk
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(chunk.header.len()))
        .max()
        .unwrap_or(0);

    let header = escape_row(&chunk.header, columns);
    let rows: Vec<Vec<String>> = chunk.rows.iter().map(|r| escape_row(r, columns)).collect();

    let mut widths = vec![MIN_WIDTH; columns];
    for row in std::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn escape_row(row: &[String], columns: usize) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
    cells.resize(columns, String::new());
    cells
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.chars().count());
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}

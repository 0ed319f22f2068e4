//! Splitting import text into lines and cells.
//!
//! Imports use a deliberately simple splitter: a quoted cell that contains
//! the delimiter is cut in two. Exported files never need more than that,
//! because the exporter only emits single-line cells.

/// Field separator of an import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Pick the delimiter from the header line: `;` wins whenever it appears.
    pub fn detect(header_line: &str) -> Self {
        if header_line.contains(';') {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }
}

/// Split on `\n` or `\r\n`, trim each line and drop the empty ones.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split a data line and unquote every cell.
pub fn split_cells(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char()).map(unquote_cell).collect()
}

/// Strip one leading and one trailing `"`, turn doubled quotes back into
/// single ones, then trim.
pub fn unquote_cell(cell: &str) -> String {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.replace("\"\"", "\"").trim().to_string()
}

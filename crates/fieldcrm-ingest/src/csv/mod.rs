//! Line-level CSV handling for imports.

mod header;
mod line;

pub use header::{HEADER_ALIASES, ImportField, ImportHeaders, RowFields};
pub use line::{Delimiter, split_cells, split_lines, unquote_cell};

//! Library parts of the `fieldcrm` command-line tool.

pub mod creator;
pub mod files;
pub mod import;
pub mod logging;
pub mod types;

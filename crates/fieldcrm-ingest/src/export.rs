//! Object list export.
//!
//! Output format:
//! - fixed column order ([`EXPORT_HEADERS`]);
//! - `;` between fields, spreadsheet tools in comma-decimal locales open it
//!   without an import dialog;
//! - every cell quoted, embedded quotes doubled, missing values as `""`;
//! - rows joined with `\n`, no trailing newline.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use fieldcrm_model::SiteObject;

use crate::error::Result;

/// Column order of exported files.
pub const EXPORT_HEADERS: [&str; 12] = [
    "id",
    "address",
    "type",
    "status",
    "city_id",
    "city_name",
    "district_id",
    "district_name",
    "contact_name",
    "contact_phone",
    "visits_count",
    "last_visit_at",
];

/// MIME type to serve exports with.
pub const CSV_MIME_TYPE: &str = "text/csv; charset=utf-8";

/// Export field delimiter.
pub const EXPORT_DELIMITER: u8 = b';';

/// Download name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("objects_{}.csv", date.format("%Y-%m-%d"))
}

fn export_row(object: &SiteObject) -> [String; 12] {
    let text = |value: Option<&str>| value.unwrap_or_default().to_string();
    [
        object.id.clone(),
        object.address.clone(),
        object.object_type.clone(),
        object.status.clone(),
        object.city_id.clone(),
        text(object.city_name()),
        text(object.district_id.as_deref()),
        text(object.district_name()),
        text(object.contact_name.as_deref()),
        text(object.contact_phone.as_deref()),
        object
            .visits_count
            .map(|count| count.to_string())
            .unwrap_or_default(),
        text(object.last_visit_at.as_deref()),
    ]
}

/// Serialize objects to the export format.
///
/// # Errors
///
/// Only fails if the in-memory CSV writer does; the output buffer itself
/// cannot run out of space.
pub fn build_objects_csv(objects: &[SiteObject]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(EXPORT_DELIMITER)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for object in objects {
        writer.write_record(export_row(object))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    // The writer terminates every record; the format has no final newline.
    if text.ends_with('\n') {
        text.pop();
    }
    debug!(rows = objects.len(), bytes = text.len(), "built objects csv");
    Ok(text)
}

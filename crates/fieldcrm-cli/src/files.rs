//! File handling shared by the export and import commands.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use fieldcrm_ingest::export_file_name;
use fieldcrm_model::{ObjectCreatePayload, PageResponse, SiteObject};

/// Object list as saved from the API: a bare array or a page response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ObjectListing {
    List(Vec<SiteObject>),
    Page(PageResponse<SiteObject>),
}

impl ObjectListing {
    pub fn into_objects(self) -> Vec<SiteObject> {
        match self {
            ObjectListing::List(objects) => objects,
            ObjectListing::Page(page) => page.items,
        }
    }
}

pub fn read_objects(path: &Path) -> Result<Vec<SiteObject>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let listing: ObjectListing = serde_json::from_str(&text)
        .with_context(|| format!("parse objects from {}", path.display()))?;
    Ok(listing.into_objects())
}

/// Where an export goes: `output` if given, else the dated file name in
/// `output_dir` (or the working directory).
pub fn export_target(output: Option<&Path>, output_dir: Option<&Path>, date: NaiveDate) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    let file_name = export_file_name(date);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

pub fn write_export(path: &Path, csv: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    fs::write(path, csv).with_context(|| format!("write {}", path.display()))
}

/// Write payloads as JSON lines.
pub fn write_payloads(path: &Path, payloads: &[ObjectCreatePayload]) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for payload in payloads {
        serde_json::to_writer(&mut writer, payload).context("serialize payload")?;
        writer.write_all(b"\n")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

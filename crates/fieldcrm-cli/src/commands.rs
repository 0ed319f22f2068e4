use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use fieldcrm_cli::files::{export_target, read_objects, write_export};
use fieldcrm_cli::import::{self, ImportRequest};
use fieldcrm_cli::types::{ExportResult, ImportResult};
use fieldcrm_ingest::build_objects_csv;
use fieldcrm_model::{DictionaryKind, LabelCatalog, LabelDictionary, object_status_badge};

use crate::cli::{ExportArgs, ImportArgs, LabelsArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();

    let objects = read_objects(&args.input)?;
    let csv = build_objects_csv(&objects).context("build export csv")?;
    let output = export_target(
        args.output.as_deref(),
        args.output_dir.as_deref(),
        Local::now().date_naive(),
    );
    write_export(&output, &csv)?;
    info!(objects = objects.len(), output = %output.display(), "export written");
    Ok(ExportResult {
        output,
        objects: objects.len(),
    })
}

pub async fn run_import(args: &ImportArgs) -> Result<ImportResult> {
    let request = ImportRequest {
        csv: args.csv.clone(),
        api_url: args.api_url.clone(),
        token: args.token.clone(),
        dry_run: args.dry_run,
        normalize_phones: args.normalize_phones,
        emit: args.emit.clone(),
        timeout: Duration::from_secs(args.timeout),
    };
    import::run_import(&request).await
}

pub fn run_labels(args: &LabelsArgs) -> Result<()> {
    let catalog = LabelCatalog::standard();
    let kinds: Vec<DictionaryKind> = match args.kind {
        Some(kind) => vec![kind.into()],
        None => DictionaryKind::ALL.to_vec(),
    };
    for (idx, kind) in kinds.into_iter().enumerate() {
        let dictionary = catalog
            .get(kind)
            .ok_or_else(|| anyhow!("no dictionary for {kind}"))?;
        if idx > 0 {
            println!();
        }
        println!("{kind}:");
        println!("{}", labels_table(dictionary));
    }
    Ok(())
}

fn labels_table(dictionary: &LabelDictionary) -> Table {
    let with_badge = dictionary.kind == DictionaryKind::ObjectStatus;
    let mut table = Table::new();
    let mut header = vec![header_cell("Code"), header_cell("Label")];
    if with_badge {
        header.push(header_cell("Badge"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for entry in dictionary.entries() {
        let mut row = vec![dim_cell(&entry.code), Cell::new(&entry.label)];
        if with_badge {
            row.push(Cell::new(object_status_badge(&entry.code).css_class()));
        }
        table.add_row(row);
    }
    table
}

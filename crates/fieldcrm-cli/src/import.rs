//! The `import` command without its argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::info;
use url::Url;

use fieldcrm_ingest::{ImportOptions, import_objects_from_path};
use fieldcrm_model::{DictionaryKind, LabelCatalog};

use crate::creator::{ApiObjectCreator, DEFAULT_TIMEOUT, DryRunCreator};
use crate::files::write_payloads;
use crate::types::ImportResult;

/// Everything one import run needs.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub csv: PathBuf,
    pub api_url: Option<Url>,
    pub token: Option<String>,
    pub dry_run: bool,
    pub normalize_phones: bool,
    /// JSON lines destination for dry-run payloads.
    pub emit: Option<PathBuf>,
    pub timeout: Duration,
}

impl ImportRequest {
    pub fn dry_run(csv: impl Into<PathBuf>) -> Self {
        Self {
            csv: csv.into(),
            api_url: None,
            token: None,
            dry_run: true,
            normalize_phones: false,
            emit: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Import a CSV file with the standard label catalog.
///
/// In dry-run mode nothing is sent; the payloads are optionally written to
/// `emit`. Otherwise an API URL is required.
pub async fn run_import(request: &ImportRequest) -> Result<ImportResult> {
    let catalog = LabelCatalog::standard();
    let type_labels = catalog.reverse_map(DictionaryKind::ObjectType);
    let status_labels = catalog.reverse_map(DictionaryKind::ObjectStatus);
    let options = ImportOptions::new(&type_labels, &status_labels)
        .with_normalize_phones(request.normalize_phones);

    let mut emitted = None;
    let summary = if request.dry_run {
        let mut creator = DryRunCreator::default();
        let summary = import_objects_from_path(&request.csv, &options, &mut creator).await?;
        if let Some(path) = &request.emit {
            write_payloads(path, &creator.payloads)?;
            emitted = Some(path.clone());
        }
        summary
    } else {
        let api_url = request
            .api_url
            .as_ref()
            .ok_or_else(|| anyhow!("--api-url or FIELDCRM_API_URL is required without --dry-run"))?;
        let mut creator = ApiObjectCreator::new(api_url, request.token.clone(), request.timeout)?;
        info!(endpoint = %creator.endpoint(), "importing objects");
        import_objects_from_path(&request.csv, &options, &mut creator).await?
    };

    Ok(ImportResult {
        source: request.csv.clone(),
        summary,
        dry_run: request.dry_run,
        emitted,
    })
}

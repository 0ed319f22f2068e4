//! Object creators used by the `import` command.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::trace;
use url::Url;

use fieldcrm_ingest::{CreateError, ObjectCreator};
use fieldcrm_model::ObjectCreatePayload;

use crate::logging::redact_value;

/// Path of the object collection, relative to the API base URL.
pub const OBJECTS_PATH: &str = "api/v1/objects/";

/// Per-request deadline; a stalled request becomes a transport error.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the object collection endpoint under `base`.
///
/// `base` may or may not end with a slash; a path prefix such as
/// `https://host/crm` is kept.
///
/// # Errors
///
/// Fails when `base` cannot be a base URL (for example `mailto:`).
pub fn objects_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(OBJECTS_PATH)
}

/// Creates objects by POSTing them to the CRM API, one request per row.
#[derive(Debug, Clone)]
pub struct ApiObjectCreator {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl ApiObjectCreator {
    /// # Errors
    ///
    /// Fails when the objects endpoint cannot be derived from `base` or the
    /// HTTP client cannot be built.
    pub fn new(base: &Url, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint =
            objects_endpoint(base).with_context(|| format!("invalid API URL {base}"))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ObjectCreator for ApiObjectCreator {
    async fn create_object(&mut self, payload: &ObjectCreatePayload) -> Result<(), CreateError> {
        trace!(
            endpoint = %self.endpoint,
            address = %payload.address,
            contact_name = payload.contact_name.as_deref().map(redact_value),
            contact_phone = payload.contact_phone.as_deref().map(redact_value),
            "posting object"
        );
        let mut request = self.client.post(self.endpoint.clone()).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|error| CreateError::Transport(error.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(CreateError::Rejected {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

/// Pull a readable message out of an error response.
///
/// The API answers with `{"detail": ...}`; some proxies use `message`.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            match value.get(key) {
                Some(serde_json::Value::String(text)) => return text.clone(),
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

/// Accepts every row and keeps the payloads, for `--dry-run`.
#[derive(Debug, Default)]
pub struct DryRunCreator {
    pub payloads: Vec<ObjectCreatePayload>,
}

#[async_trait]
impl ObjectCreator for DryRunCreator {
    async fn create_object(&mut self, payload: &ObjectCreatePayload) -> Result<(), CreateError> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}

//! HTTP client for the extraction endpoints.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::intake::SelectedFile;
use crate::router::Endpoint;
use crate::types::ExtractionResult;

/// Multipart part name the server reads the document from.
pub const PDF_FIELD_NAME: &str = "pdf";

const PDF_MIME: &str = "application/pdf";

/// One upload/fetch cycle against an extraction endpoint.
///
/// Futures are not required to be `Send`: in the browser the HTTP stack is
/// single-threaded.
#[async_trait(?Send)]
pub trait ExtractionApi {
    async fn extract(&self, file: &SelectedFile, endpoint: Endpoint) -> Result<ExtractionResult>;
}

/// reqwest-backed extraction client.
#[derive(Clone)]
pub struct ExtractionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: crate::config::normalize_base_url(&base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait(?Send)]
impl ExtractionApi for ExtractionClient {
    async fn extract(&self, file: &SelectedFile, endpoint: Endpoint) -> Result<ExtractionResult> {
        let url = self.url_for(endpoint);
        info!(file = %file.name, size = file.size(), url = %url, "Uploading document for extraction");

        let part = Part::bytes(file.content().to_vec())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)?;
        let form = Form::new().part(PDF_FIELD_NAME, part);

        let resp = self.http_client.post(&url).multipart(form).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Extraction response received");

        let result: ExtractionResult =
            serde_json::from_str(&body).map_err(|source| ClientError::Malformed {
                status: status.as_u16(),
                source,
            })?;

        if !status.is_success() || !result.success {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: result.failure_message(),
            });
        }

        Ok(result)
    }
}

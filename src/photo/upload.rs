//! Receipt upload to the image CDN.

use async_trait::async_trait;
use serde::Deserialize;

use crate::Error;

/// Accepts a compressed receipt and returns its public URL.
#[async_trait]
pub trait ReceiptUploader: Send + Sync {
    /// Upload a JPEG-encoded receipt.
    async fn upload(&self, jpeg: Vec<u8>) -> Result<String, Error>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
}

/// Uploads receipts to the image CDN's unsigned upload endpoint.
///
/// The CDN accepts a multipart form with the file and an upload preset and
/// responds with the hosted image's URL.
#[derive(Debug, Clone)]
pub struct CdnUploader {
    client: reqwest::Client,
    endpoint: String,
    preset: String,
}

impl CdnUploader {
    /// Create an uploader for the given endpoint and upload preset.
    pub fn new(endpoint: &str, preset: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
            preset: preset.to_owned(),
        }
    }

    /// Replace the HTTP client, e.g. to set timeouts.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl ReceiptUploader for CdnUploader {
    async fn upload(&self, jpeg: Vec<u8>) -> Result<String, Error> {
        let file = reqwest::multipart::Part::bytes(jpeg)
            .file_name("receipt.jpg")
            .mime_str("image/jpeg")
            .map_err(|error| Error::UploadFailed(error.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("upload_preset", self.preset.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|error| Error::UploadFailed(error.to_string()))?
            .error_for_status()
            .map_err(|error| Error::UploadFailed(error.to_string()))
            .inspect_err(|error| tracing::error!("{error}"))?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|error| Error::UploadFailed(error.to_string()))?;

        body.secure_url
            .ok_or_else(|| Error::UploadFailed("the response did not include a URL".to_owned()))
    }
}

//! HTTP client for the bylaws summarizer service.
//!
//! The service itself is a black box: the site sends document text plus the
//! reader's language and gets a short summary back. Everything about how the
//! summary is produced lives behind this endpoint.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SummarizerConfig;
use noor_core::Language;

/// Errors that can occur when calling the summarizer service.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error response.
    #[error("Summarizer error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build the client or parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Request body sent to the summarizer service.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    document_text: &'a str,
    language: Language,
}

/// Response body from the summarizer service.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Client for the summarizer service.
#[derive(Clone)]
pub struct SummarizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl SummarizerClient {
    /// Create a new summarizer client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummarizerError> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = &config.api_key {
            let auth_value = format!("Bearer {}", api_key.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| SummarizerError::Parse(format!("Invalid API key format: {e}")))?;
            value.set_sensitive(true);
            headers.insert("Authorization", value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Summarize a document for a reader in the given language.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the service rejects it.
    pub async fn summarize(
        &self,
        document_text: &str,
        language: Language,
    ) -> Result<String, SummarizerError> {
        let url = format!("{}/summarize", self.base_url);
        let body = SummarizeRequest {
            document_text,
            language,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::Parse(e.to_string()))?;

        Ok(parsed.summary)
    }
}

//! Gemini Description Generator Implementation
//!
//! This module implements the `DescriptionGenerator` trait against the Gemini
//! `generateContent` REST API. It handles the HTTP exchange and converts
//! transport and protocol failures to domain errors.

use std::fmt;
use std::time::{Duration, Instant};

use picscribe_domain::{
    description::{DescriptionError, GenerationRequest},
    ports::DescriptionGenerator,
};
use reqwest::Client;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::wire::{GenerateContentRequest, GenerateContentResponse};

/// Default Gemini REST base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for descriptions
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Default deadline for a single upstream call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_MISSING: &str = "API key not configured on server";

/// Max bytes of an upstream error body copied into logs
const LOGGED_BODY_LIMIT: usize = 500;

/// Connection settings for the Gemini API
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; requests fail with a config error when unset
    pub api_key: Option<String>,
    /// Base URL without trailing `/models`
    pub base_url: String,
    /// Model name, e.g. `gemini-3-pro-image-preview`
    pub model: String,
    /// Deadline for the whole exchange (send + body)
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Default settings with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Gemini-based implementation of the DescriptionGenerator port
///
/// One `generateContent` call per invocation, no retries. The call is wrapped
/// in a `tokio::time::timeout`; on expiry the request future is dropped,
/// which aborts the in-flight HTTP exchange.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with a fresh `reqwest::Client`
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(client: Client, config: GeminiConfig) -> Self {
        info!(
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs_f64(),
            api_key_configured = config.api_key.is_some(),
            "Initializing GeminiClient"
        );
        Self { client, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Full `generateContent` URL for the configured model
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl DescriptionGenerator for GeminiClient {
    fn generate(
        &self,
        request: &GenerationRequest,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, DescriptionError>> + Send {
        let span = info_span!(
            "gemini_generate",
            model = %self.config.model,
            mime_type = %request.mime_type(),
            image_len = request.image_data().len()
        );

        async move {
            let Some(api_key) = self.config.api_key.as_deref() else {
                error!("Gemini API key is not configured");
                return Err(DescriptionError::config(API_KEY_MISSING));
            };

            let body =
                GenerateContentRequest::with_image(prompt, request.mime_type(), request.image_data());
            let url = self.endpoint();
            let started = Instant::now();

            debug!(url = %url, "Sending generateContent request");

            let exchange = async {
                let response = self
                    .client
                    .post(&url)
                    .query(&[("key", api_key)])
                    .json(&body)
                    .send()
                    .await?;
                let status = response.status();
                let text = response.text().await?;
                Ok::<_, reqwest::Error>((status, text))
            };

            let (status, text) = match tokio::time::timeout(self.config.timeout, exchange).await {
                Ok(Ok(parts)) => parts,
                Ok(Err(err)) => {
                    // The URL carries the API key in its query string.
                    let err = err.without_url();
                    error!(error = %err, "Gemini request failed");
                    return Err(DescriptionError::upstream_failure(format!(
                        "request failed: {}",
                        err
                    )));
                }
                Err(_) => {
                    warn!(
                        timeout_secs = self.config.timeout.as_secs_f64(),
                        "Gemini request timed out, aborting"
                    );
                    return Err(DescriptionError::Timeout);
                }
            };

            let elapsed_ms = started.elapsed().as_millis() as u64;

            if !status.is_success() {
                let snippet: String = text.chars().take(LOGGED_BODY_LIMIT).collect();
                error!(status = %status, elapsed_ms, body = %snippet, "Gemini returned an error status");
                return Err(DescriptionError::upstream_failure(format!(
                    "upstream status {}",
                    status
                )));
            }

            let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|err| {
                error!(error = %err, "Failed to parse Gemini response");
                DescriptionError::upstream_failure(format!("invalid response body: {}", err))
            })?;

            match parsed.into_first_text() {
                Some(text) => {
                    info!(elapsed_ms, text_len = text.len(), "Gemini returned a description");
                    Ok(text)
                }
                None => {
                    warn!(elapsed_ms, "Gemini response contained no text");
                    Err(DescriptionError::EmptyResult)
                }
            }
        }
        .instrument(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(GeminiConfig {
            base_url: "http://localhost:9999/v1beta/".to_string(),
            model: "test-model".to_string(),
            ..GeminiConfig::default()
        });

        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig::with_api_key("super-secret");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::default();

        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}

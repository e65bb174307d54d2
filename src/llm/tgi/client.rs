//! TGI client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response, StatusCode};
use tracing::debug;

use crate::llm::core::{
    error::LlmError,
    provider::LanguageModel,
    types::{GenerateOutput, GenerateRequest},
};

use super::mapper::{from_tgi_response, to_tgi_request};
use super::types::{TgiErrorBody, TgiResponse};

/// Client for a Text Generation Inference server hosting the chat model
pub struct TgiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Server base URL, without trailing slash
    base_url: String,
}

impl TgiClient {
    /// Create a new TGI client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    /// * `timeout` - Upper bound on a whole generate call
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the endpoint URL for generation
    fn build_endpoint_url(&self) -> String {
        format!("{}/generate", self.base_url)
    }

    /// Check that the server is up and has a model loaded
    pub async fn health(&self) -> Result<(), LlmError> {
        let response = self
            .http_client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Turn a non-2xx response into the matching `LlmError`
async fn error_from_response(response: Response) -> LlmError {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);
        return LlmError::RateLimitExceeded { retry_after };
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<TgiErrorBody>(&body) {
        Ok(err) => LlmError::ProviderError {
            code: err.error_type.unwrap_or_else(|| status.as_u16().to_string()),
            message: err.error,
        },
        Err(_) => LlmError::HttpError {
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_generate_body(body: &str) -> Result<TgiResponse, LlmError> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl LanguageModel for TgiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateOutput, LlmError> {
        let tgi_request = to_tgi_request(&request)?;

        let response = self
            .http_client
            .post(self.build_endpoint_url())
            .json(&tgi_request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = parse_generate_body(&response.text().await?)?;
        let output = from_tgi_response(&request.input_ids, body)?;
        debug!(
            prompt_tokens = request.input_ids.len(),
            total_tokens = output.sequence.len(),
            finish_reason = ?output.finish_reason,
            "generation finished"
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let client = TgiClient::new("http://localhost:8080/", Duration::from_secs(30)).unwrap();
        assert_eq!(client.build_endpoint_url(), "http://localhost:8080/generate");
    }

    #[test]
    fn test_unparseable_generate_body() {
        let err = parse_generate_body("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, LlmError::SerializationError(_)));

        let body = parse_generate_body(r#"{"generated_text":"Hi"}"#).unwrap();
        assert_eq!(body.generated_text, "Hi");
    }

    #[test]
    fn test_endpoint_url() {
        let client = TgiClient::new("http://tgi.internal:3000", Duration::from_secs(30)).unwrap();
        assert_eq!(client.build_endpoint_url(), "http://tgi.internal:3000/generate");
    }
}

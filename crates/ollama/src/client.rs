use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors from the inference upstream.
///
/// Callers are expected to collapse these into a single generic failure
/// response; the variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("Failed to reach inference server: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Inference server returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from `/api/generate` (non-streaming).
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for one Ollama-compatible inference server.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a client targeting `base_url` (e.g. `http://localhost:11434`)
    /// with a bounded request timeout so a hung model server cannot pin
    /// request handlers.
    pub fn new(base_url: String, model: String, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|e| panic!("Failed to build HTTP client: {e}"));
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Base URL of the inference server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one prompt and return the model's text response.
    pub async fn generate(&self, prompt: &str) -> Result<String, OllamaError> {
        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Calling inference server");
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(OllamaError::Status(response.status()));
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/".into(), "llama3".into(), 30);
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn generate_request_shape_matches_wire_format() {
        let body = GenerateRequest {
            model: "llama3",
            prompt: "hello",
            stream: false,
        };
        let json = serde_json::to_value(&body).expect("request serializes");
        assert_eq!(
            json,
            serde_json::json!({ "model": "llama3", "prompt": "hello", "stream": false })
        );
    }

    #[tokio::test]
    async fn unreachable_server_yields_connection_error() {
        // Nothing listens on this port.
        let client = OllamaClient::new("http://127.0.0.1:1".into(), "llama3".into(), 1);
        let result = client.generate("hello").await;
        assert!(matches!(result, Err(OllamaError::Connection(_))));
    }
}

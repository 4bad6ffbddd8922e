/// LLM Client — the single point of entry for remote text-generation calls.
///
/// ARCHITECTURAL RULE: no other module may call the inference API directly.
/// All remote extraction goes through this module, and every failure mode
/// is surfaced as an `LlmError` the extractor downgrades to "no usable
/// output" — a remote failure never aborts a match request.
///
/// Model: google/flan-t5-large on the Hugging Face Inference API
/// (hardcoded — do not make configurable to prevent drift).
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const HF_API_URL: &str = "https://api-inference.huggingface.co/models/google/flan-t5-large";
/// The model used for all remote extraction calls.
pub const MODEL: &str = "google/flan-t5-large";
const MAX_NEW_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.1;
/// Hard cap on a single generation request. The pipeline must never hang
/// on the network.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("service-side error: {0}")]
    Service(String),

    #[error("unexpected response shape")]
    UnexpectedShape,

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    do_sample: bool,
}

/// The single inference client used by the matching pipeline.
/// Wraps the Hugging Face text-generation endpoint; one attempt per call,
/// no retries — the caller falls back deterministically instead.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_token: String,
}

impl LlmClient {
    pub fn new(api_token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_token,
        }
    }

    /// Submits one generation request and returns the first candidate's
    /// generated text, trimmed.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                do_sample: true,
            },
        };

        let response = self
            .client
            .post(HF_API_URL)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await?;
        let text = parse_generated_text(&payload)?;

        debug!(chars = text.len(), "LLM call succeeded");

        Ok(text)
    }
}

/// Pulls the first candidate's `generated_text` out of a success body.
/// A body carrying an `error` field counts as a service-side failure even
/// under a 200 status.
fn parse_generated_text(payload: &Value) -> Result<String, LlmError> {
    if let Some(message) = payload.get("error").and_then(Value::as_str) {
        return Err(LlmError::Service(message.to_string()));
    }

    let text = payload
        .get(0)
        .and_then(|candidate| candidate.get("generated_text"))
        .and_then(Value::as_str)
        .ok_or(LlmError::UnexpectedShape)?
        .trim();

    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_first_candidate() {
        let payload = json!([
            {"generated_text": "  Python, Django, Flask  "},
            {"generated_text": "ignored second candidate"}
        ]);
        assert_eq!(
            parse_generated_text(&payload).unwrap(),
            "Python, Django, Flask"
        );
    }

    #[test]
    fn test_service_error_body_is_rejected() {
        let payload = json!({"error": "Model google/flan-t5-large is currently loading"});
        match parse_generated_text(&payload) {
            Err(LlmError::Service(message)) => assert!(message.contains("loading")),
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_shape_is_rejected() {
        let payload = json!({"generated_text": "not wrapped in a list"});
        assert!(matches!(
            parse_generated_text(&payload),
            Err(LlmError::UnexpectedShape)
        ));
    }

    #[test]
    fn test_whitespace_only_output_is_empty_content() {
        let payload = json!([{"generated_text": "   \n  "}]);
        assert!(matches!(
            parse_generated_text(&payload),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_empty_candidate_list_is_unexpected_shape() {
        let payload = json!([]);
        assert!(matches!(
            parse_generated_text(&payload),
            Err(LlmError::UnexpectedShape)
        ));
    }
}

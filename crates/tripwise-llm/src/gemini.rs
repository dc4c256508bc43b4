//! Gemini Provider Implementation
//!
//! Talks to Google's `generateContent` REST endpoint.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Fixed low temperature from [`ModelConfig`]
//! - Timeout handling, no retries
//! - HTTP status mapped onto the [`LlmError`] taxonomy
//!
//! # Examples
//!
//! ```no_run
//! use tripwise_llm::{GeminiProvider, ModelConfig};
//!
//! let config = ModelConfig::from_env().unwrap();
//! let provider = GeminiProvider::new(config).unwrap();
//!
//! // The inherent `generate` is async; the `LlmProvider` impl blocks on it.
//! ```

use crate::config::ModelConfig;
use crate::LlmError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tripwise_domain::traits::LlmProvider as LlmProviderTrait;

/// Gemini API provider
pub struct GeminiProvider {
    config: ModelConfig,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Response from the generateContent API
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the configuration is invalid or
    /// the HTTP client cannot be built.
    pub fn new(config: ModelConfig) -> Result<Self, LlmError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The configuration this provider was built with
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Full URL of the generateContent call for the configured model
    pub fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        build_request(prompt, self.config.temperature)
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The credential is rejected (`Authentication`)
    /// - The quota is exhausted (`RateLimited`)
    /// - The service is down or unreachable (`ServiceUnavailable`)
    /// - The model does not exist (`ModelNotAvailable`)
    /// - The call exceeds the configured timeout (`Timeout`)
    /// - The reply carries no text (`InvalidResponse`)
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.request_url();
        let body = self.request_body(prompt);

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, "Model provider rejected request");
            return Err(status_error(status, &error_text, &self.config.model));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = response_text(parsed)?;
        debug!(response_chars = text.len(), "Received model reply");
        Ok(text)
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.config.timeout_secs)
        } else if e.is_connect() {
            LlmError::ServiceUnavailable(format!("Request failed: {}", e))
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(self.generate(prompt))
    }
}

fn build_request(prompt: &str, temperature: f32) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        generation_config: GenerationConfig { temperature },
    }
}

fn status_error(status: StatusCode, body: &str, model: &str) -> LlmError {
    let detail = format!("HTTP {}: {}", status, body.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(detail),
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        // Gemini reports an unknown key as 400 API_KEY_INVALID
        StatusCode::BAD_REQUEST if body.contains("API_KEY_INVALID") => {
            LlmError::Authentication(detail)
        }
        s if s.is_server_error() => LlmError::ServiceUnavailable(detail),
        _ => LlmError::Communication(detail),
    }
}

/// Concatenate the text parts of the first candidate
fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmError::InvalidResponse(format!("Prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::InvalidResponse(format!(
            "Candidate has no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new(ModelConfig::new("key")).unwrap();
        assert_eq!(provider.config().model, crate::config::DEFAULT_MODEL);
        assert_eq!(
            provider.request_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[test]
    fn test_gemini_provider_rejects_invalid_config() {
        let result = GeminiProvider::new(ModelConfig::new(""));
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_request_url_with_custom_endpoint() {
        let config = ModelConfig::new("key")
            .with_endpoint("http://localhost:8089/")
            .with_model("gemini-1.5-flash");
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.request_url(),
            "http://localhost:8089/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let provider = GeminiProvider::new(ModelConfig::new("test-key")).unwrap();
        let body = serde_json::to_value(provider.request_body("plan a trip")).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "plan a trip");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - f64::from(provider.config().temperature)).abs() < 1e-6);
        assert!((temperature - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{"}, {"text": "}\n```"}], "role": "model"},
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(response_text(response).unwrap(), "```json\n{}\n```");
    }

    #[test]
    fn test_response_without_candidates() {
        let err = response_text(parse(json!({"candidates": []}))).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));

        let err = response_text(parse(json!({}))).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn test_blocked_prompt() {
        let response = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        let err = response_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_candidate_without_text() {
        let response = parse(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}));
        let err = response_text(response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_status_mapping() {
        let model = "gemini-2.0-flash-exp";
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "", model),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "", model),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, r#"{"reason": "API_KEY_INVALID"}"#, model),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "quota", model),
            LlmError::RateLimited(_)
        ));
        assert!(matches!(
            status_error(StatusCode::SERVICE_UNAVAILABLE, "", model),
            LlmError::ServiceUnavailable(_)
        ));
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "", model),
            LlmError::ModelNotAvailable(model.to_string())
        );
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, "bad", model),
            LlmError::Communication(_)
        ));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Use invalid endpoint to trigger error
        let config = ModelConfig::new("key")
            .with_endpoint("http://localhost:99999")
            .with_timeout_secs(2);
        let provider = GeminiProvider::new(config).unwrap();

        let result = provider.generate("test").await;
        match result {
            Err(LlmError::Communication(_)) | Err(LlmError::ServiceUnavailable(_)) => {} // Expected
            other => panic!("Expected transport error, got {:?}", other),
        }
    }
}

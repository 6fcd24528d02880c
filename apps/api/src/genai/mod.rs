/// GenAI client — the single point of entry for all Generative Language API
/// calls in this service.
///
/// ARCHITECTURAL RULE: no other module may call the model endpoints
/// directly. Handlers and the scoring pipeline depend on the
/// [`GenerativeModel`] trait, so tests can substitute a canned model.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod mock;

const GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Text model used for resume evaluation.
pub const TEXT_MODEL: &str = "gemini-pro";
/// Vision-capable model used for resume extraction.
pub const VISION_MODEL: &str = "gemini-pro-vision";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,
}

/// A base64-encoded image payload plus its media type.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// The two generative calls the API makes: image → descriptive text, and
/// text prompt → text response.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn describe_image(
        &self,
        instruction: &str,
        image: &InlineImage,
    ) -> Result<String, GenAiError>;

    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineDataPart<'a> },
}

#[derive(Debug, Serialize)]
struct InlineDataPart<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first text part.
    fn text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .find_map(|p| p.text.clone())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Production [`GenerativeModel`] over the Generative Language REST API.
/// Calls are bounded by a per-request timeout and retried on 429 and 5xx
/// with exponential backoff.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout: std::time::Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn generate(&self, model: &str, parts: Vec<Part<'_>>) -> Result<String, GenAiError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content { parts }],
        };
        let url = format!("{GENAI_API_BASE}/{model}:generateContent");

        let mut last_error: Option<GenAiError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "GenAI call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GenAiError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("GenAI API returned {}: {}", status, body);
                last_error = Some(GenAiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the structured error message
                let message = serde_json::from_str::<GoogleError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(GenAiError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateContentResponse = response.json().await?;
            let text = parsed.text().ok_or(GenAiError::EmptyContent)?;

            debug!("GenAI call succeeded (model: {model}, {} chars)", text.len());

            return Ok(text);
        }

        Err(last_error.unwrap_or(GenAiError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn describe_image(
        &self,
        instruction: &str,
        image: &InlineImage,
    ) -> Result<String, GenAiError> {
        let parts = vec![
            Part::Text { text: instruction },
            Part::InlineData {
                inline_data: InlineDataPart {
                    mime_type: &image.mime_type,
                    data: &image.data,
                },
            },
        ];
        self.generate(VISION_MODEL, parts).await
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GenAiError> {
        self.generate(TEXT_MODEL, vec![Part::Text { text: prompt }]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: "hello" },
                    Part::InlineData {
                        inline_data: InlineDataPart {
                            mime_type: "image/png",
                            data: "QUJD",
                        },
                    },
                ],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(value["contents"][0]["parts"][1]["inline_data"]["data"], "QUJD");
    }

    #[test]
    fn test_response_text_takes_first_text_part() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().as_deref(), Some("first"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }
}

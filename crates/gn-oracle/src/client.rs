//! The oracle trait and the Gemini-backed client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use gn_core::{Brief, ReactionResult, ReplyMode};

use crate::error::OracleError;
use crate::prompt::build_prompt;
use crate::response::{fallback, parse_reaction};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Judges a submitted draft and produces the narrative outcome.
///
/// Implementations never fail: a client that cannot reach or understand
/// its backend substitutes [`fallback`] so the session always reaches the
/// result screen.
#[async_trait]
pub trait ReactionOracle: Send + Sync {
    /// React to a composed message sent under the given mode.
    async fn react(&self, brief: &Brief, message: &str, mode: ReplyMode) -> ReactionResult;
}

/// Client for the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for the given backend.
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        // Generative calls can be slow; give them a generous timeout.
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Uses `GEMINI_API_KEY`, `GEMINI_BASE_URL`, and `GEMINI_MODEL`,
    /// falling back to defaults for the latter two.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        Self::new(&base_url, &model, &api_key)
    }

    /// One request/response round trip, all failure modes surfaced.
    async fn request(
        &self,
        brief: &Brief,
        message: &str,
        mode: ReplyMode,
    ) -> Result<ReactionResult, OracleError> {
        let api_request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(brief, message, mode),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| OracleError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::RequestFailed(format!("{status}: {body}")));
        }

        let api_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| OracleError::InvalidResponse("no candidates in response".into()))?;

        parse_reaction(&text, mode)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl ReactionOracle for GeminiClient {
    async fn react(&self, brief: &Brief, message: &str, mode: ReplyMode) -> ReactionResult {
        match self.request(brief, message, mode).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(level = %brief.id, error = %e, "oracle failed, using fallback");
                fallback()
            }
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: String,
}

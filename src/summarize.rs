use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::prompts::PLACEHOLDER;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for all summarization requests
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Generative-text collaborator: one opaque, non-retried request/response.
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Substitute transcript text into a template body's `{text}` placeholder.
///
/// A body without the placeholder passes through unchanged — deliberately
/// not an error, matching the custom-prompt contract.
pub fn render_prompt(body: &str, transcript: &str) -> String {
    body.replace(PLACEHOLDER, transcript)
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
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

/// Text generation via the Gemini API. The credential is an explicit
/// constructor parameter, never read from the environment here.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self { client, api_key, model }
    }

    fn request_url(&self) -> String {
        format!(
            "{GEMINI_ENDPOINT}/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Generating summary via Gemini API with model {}", self.model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self
            .client
            .post(self.request_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {body}");
        }

        let json: GenerateContentResponse = resp.json().await?;
        extract_candidate_text(json)
    }
}

fn extract_candidate_text(resp: GenerateContentResponse) -> Result<String> {
    let text: String = resp
        .candidates
        .into_iter()
        .take(1)
        .flat_map(|c| c.content.parts)
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        bail!("Gemini response contained no text");
    }
    Ok(text)
}

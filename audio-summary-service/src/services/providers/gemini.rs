//! Gemini summary generation client.

use super::{ProviderError, SummaryProvider};
use crate::config::UPSTREAM_TIMEOUT;
use crate::models::AnalysisPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed briefing instruction. The output is read aloud directly, so the
/// prompt forbids markdown and preamble and pins the content order.
const SYSTEM_PROMPT: &str = "You are Evident, an AI-powered media analysis tool. Your output \
will be read aloud directly to the user via text-to-speech — no screen, no UI, just audio.\n\n\
Write a natural, conversational spoken summary — like a knowledgeable friend giving a quick \
briefing. Keep it to 4-6 sentences. Use plain prose with no markdown, bullet points, dashes, \
asterisks, or special characters. No meta-commentary, preamble, or acknowledgements (do not \
say things like \"Sure\", \"Here is your summary\", \"I've analyzed\", or \"OK\"). Begin \
speaking immediately with the substance of the briefing.\n\n\
Cover in order: what article was analyzed and who published it, the trust score and what it \
means, any notable flags by name (briefly), and a closing recommendation. Be warm, clear, and \
concise.";

pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            client,
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn generate_summary(&self, analysis: &AnalysisPayload) -> Result<String, ProviderError> {
        let analysis_json = serde_json::to_string_pretty(analysis)
            .map_err(|e| ProviderError::Api(format!("failed to serialize analysis: {}", e)))?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: format!(
                        "Generate a spoken summary for this analysis:\n\n{}",
                        analysis_json
                    ),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 2048,
                temperature: 0.7,
                // No extra thinking budget; latency matters more than
                // reasoning depth for a short briefing.
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        tracing::debug!(model = %self.model, "Requesting spoken summary from Gemini");

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Api(format!("failed to parse Gemini response: {}", e)))?;

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .ok_or_else(|| ProviderError::Api("Gemini response contained no candidates".to_string()))
    }
}

// ============================================================================
// Gemini API request/response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: i32,
    temperature: f32,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: i32,
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
    parts: Vec<Part>,
}

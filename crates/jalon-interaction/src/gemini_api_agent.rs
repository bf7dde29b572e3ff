//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! This agent calls the Gemini REST API directly. The API key is resolved
//! from a credential chain on every request, so a key supplied after
//! startup is picked up without a restart.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use jalon_core::credentials::CredentialChain;
use jalon_core::error::{JalonError, Result};

use crate::agent::{GenerativeAgent, Turn, TurnRole};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Agent implementation that talks to the Gemini HTTP API.
pub struct GeminiApiAgent {
    client: Client,
    credentials: CredentialChain,
    model: String,
    system_instruction: Option<String>,
}

impl GeminiApiAgent {
    /// Creates a new agent resolving its key from the provided chain.
    ///
    /// Model name defaults to `gemini-2.5-flash`.
    pub fn new(credentials: CredentialChain) -> Self {
        Self {
            client: Client::new(),
            credentials,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            system_instruction: None,
        }
    }

    /// Creates a new agent with a fixed API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(CredentialChain::from_api_key(api_key))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Adds a system instruction that will be sent alongside every request.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    fn build_request(&self, turns: &[Turn]) -> GenerateContentRequest {
        let contents = turns
            .iter()
            .map(|turn| Content {
                role: match turn.role {
                    TurnRole::User => "user".to_string(),
                    TurnRole::Model => "model".to_string(),
                },
                parts: vec![Part {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        let system_instruction = self.system_instruction.as_ref().map(|text| Content {
            role: "system".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        });

        GenerateContentRequest {
            contents,
            system_instruction,
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let api_key = self.credentials.resolve()?;
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
        );

        tracing::debug!(model = %self.model, turns = body.contents.len(), "sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                JalonError::transport(None, format!("Gemini API request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            log::warn!("Gemini API call failed with status {status}");
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            JalonError::malformed_response(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl GenerativeAgent for GeminiApiAgent {
    async fn generate(&self, turns: &[Turn]) -> Result<String> {
        let request = self.build_request(turns);
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            JalonError::malformed_response("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> JalonError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    if is_credential_rejection(status, &message) {
        return JalonError::invalid_credential(message);
    }

    JalonError::transport(Some(status.as_u16()), message)
}

/// The service reports a bad key as 400 INVALID_ARGUMENT with an
/// "API key" message; 401/403 cover expired or unauthorized keys.
fn is_credential_rejection(status: StatusCode, message: &str) -> bool {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => true,
        StatusCode::BAD_REQUEST => message.contains("API key"),
        _ => false,
    }
}

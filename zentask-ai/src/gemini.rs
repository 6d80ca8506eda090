//! Gemini `generateContent` REST client
//!
//! One request/response round trip per call, no streaming. The response
//! is reduced to the first candidate's first part: `text` for text and
//! structured requests, `inlineData` for audio. Anything else is reported
//! as [`AiError::MissingContent`] and handled by the caller as a fallback.

use async_trait::async_trait;
use jsonschema::JSONSchema;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::backend::GenerativeBackend;
use crate::config::AiConfig;
use crate::error::{AiError, Result};
use crate::types::{AudioPayload, GenerateRequest, GenerateResponse, Modality};

/// Prebuilt voice used for all speech synthesis
const VOICE_NAME: &str = "Kore";

/// HTTP client for the Gemini API
pub struct GeminiClient {
    http: Client,
    config: AiConfig,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Build a client from `GEMINI_API_KEY` (loads `.env` if present)
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(AiConfig::from_env()?))
    }

    /// Assemble the wire body for a request
    fn request_body(request: &GenerateRequest) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }]
        });

        if let Some(instruction) = &request.system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }

        match request.modality {
            Modality::Audio => {
                body["generationConfig"] = json!({
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {
                            "prebuiltVoiceConfig": { "voiceName": VOICE_NAME }
                        }
                    }
                });
            }
            Modality::Text => {
                if let Some(schema) = &request.response_schema {
                    body["generationConfig"] = json!({
                        "responseMimeType": "application/json",
                        "responseSchema": schema,
                    });
                }
            }
        }

        body
    }

    /// Reduce a response payload to the expected response kind
    fn parse_response(request: &GenerateRequest, payload: &Value) -> Result<GenerateResponse> {
        let part = payload
            .pointer("/candidates/0/content/parts/0")
            .ok_or(AiError::MissingContent)?;

        match request.modality {
            Modality::Audio => {
                let inline = part.get("inlineData").ok_or(AiError::MissingContent)?;
                let data = inline
                    .get("data")
                    .and_then(Value::as_str)
                    .ok_or(AiError::MissingContent)?;
                let mime_type = inline
                    .get("mimeType")
                    .and_then(Value::as_str)
                    .unwrap_or("audio/pcm");
                Ok(GenerateResponse::Audio(AudioPayload {
                    data: data.to_string(),
                    mime_type: mime_type.to_string(),
                }))
            }
            Modality::Text => {
                let text = part
                    .get("text")
                    .and_then(Value::as_str)
                    .ok_or(AiError::MissingContent)?;
                match &request.response_schema {
                    None => Ok(GenerateResponse::Text(text.to_string())),
                    Some(schema) => {
                        let document: Value = serde_json::from_str(strip_code_fence(text))
                            .map_err(|e| AiError::MalformedResponse(e.to_string()))?;
                        validate_against(schema, &document)?;
                        Ok(GenerateResponse::Json(document))
                    }
                }
            }
        }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, request.model
        );
        let body = Self::request_body(&request);

        debug!(model = %request.model, "sending generateContent request");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await?;
        Self::parse_response(&request, &payload)
    }
}

/// Validate a structured response against the schema the caller requested
fn validate_against(schema: &Value, document: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(schema)
        .map_err(|e| AiError::SchemaViolation(format!("unusable schema: {}", e)))?;
    if let Err(errors) = compiled.validate(document) {
        let detail = errors
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AiError::SchemaViolation(detail));
    }
    Ok(())
}

/// Strip a markdown code fence if the model wrapped its JSON in one
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

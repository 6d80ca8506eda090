//! Request/response contract for the generative service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which kind of payload the caller expects back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Plain text or schema-constrained JSON
    Text,
    /// Synthesized speech
    Audio,
}

/// A single generation request
///
/// Carries everything the core depends on: a model identifier, the prompt,
/// an optional system instruction, an optional response-schema constraint
/// (which switches the response to structured JSON), and the modality.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub response_schema: Option<Value>,
    pub modality: Modality,
}

impl GenerateRequest {
    /// Build a plain text request
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: None,
            response_schema: None,
            modality: Modality::Text,
        }
    }

    /// Build a speech-synthesis request
    pub fn audio(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: None,
            response_schema: None,
            modality: Modality::Audio,
        }
    }

    /// Attach a system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Constrain the response to JSON matching `schema`
    ///
    /// The client validates the returned document against this schema and
    /// reports [`crate::AiError::SchemaViolation`] on mismatch.
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Base64-encoded audio returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPayload {
    /// Base64 payload, raw PCM frames once decoded
    pub data: String,
    /// Mime type as reported by the service, e.g. `audio/L16;rate=24000`
    pub mime_type: String,
}

/// The three response kinds the core can receive
///
/// Exactly one kind is produced per request, determined by the request's
/// modality and schema constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateResponse {
    Text(String),
    Json(Value),
    Audio(AudioPayload),
}

impl GenerateResponse {
    pub fn into_text(self) -> Option<String> {
        match self {
            GenerateResponse::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            GenerateResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_audio(self) -> Option<AudioPayload> {
        match self {
            GenerateResponse::Audio(payload) => Some(payload),
            _ => None,
        }
    }
}

//! Description refinement and category/priority suggestion
//!
//! Both are single-attempt pass-throughs with safe fallbacks: a failed
//! refinement returns the caller's description unchanged, a failed
//! suggestion returns General/MEDIUM. Failures are logged, never shown.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;
use zentask_ai::{GenerateRequest, GenerativeBackend, TEXT_MODEL};

use crate::models::TaskPriority;

const COACH_INSTRUCTION: &str =
    "You are an expert productivity coach. Keep descriptions concise and under 100 words.";

/// Rewrite a task description; falls back to the original on any failure
pub async fn refine(backend: &dyn GenerativeBackend, title: &str, description: &str) -> String {
    let request = GenerateRequest::text(
        TEXT_MODEL,
        format!(
            "Refine this task into a clear, actionable, professional description.\nTitle: {}\nContext: {}",
            title, description
        ),
    )
    .with_system_instruction(COACH_INSTRUCTION);

    match backend.generate(request).await {
        Ok(response) => match response.into_text() {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!("refinement returned no text, keeping original description");
                description.to_string()
            }
        },
        Err(err) => {
            warn!(%err, "refinement failed, keeping original description");
            description.to_string()
        }
    }
}

/// Suggested classification for a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub priority: TaskPriority,
}

impl Default for Suggestion {
    fn default() -> Self {
        Self {
            category: "General".to_string(),
            priority: TaskPriority::Medium,
        }
    }
}

fn suggestion_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": { "type": "string" },
            "priority": {
                "type": "string",
                "description": "Must be one of: LOW, MEDIUM, HIGH"
            }
        },
        "required": ["category", "priority"]
    })
}

/// Suggest a category and priority; falls back to General/MEDIUM
pub async fn suggest(
    backend: &dyn GenerativeBackend,
    title: &str,
    description: &str,
) -> Suggestion {
    let request = GenerateRequest::text(
        TEXT_MODEL,
        format!(
            "Analyze this task and suggest a category and priority level.\nTitle: {}\nDescription: {}",
            title, description
        ),
    )
    .with_response_schema(suggestion_schema());

    match backend.generate(request).await {
        Ok(response) => response
            .into_json()
            .and_then(|value| serde_json::from_value::<Suggestion>(value).ok())
            .unwrap_or_else(|| {
                warn!("suggestion response was unusable, using defaults");
                Suggestion::default()
            }),
        Err(err) => {
            warn!(%err, "suggestion failed, using defaults");
            Suggestion::default()
        }
    }
}

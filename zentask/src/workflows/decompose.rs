//! Task decomposition into sub-tasks
//!
//! Asks the service for 3-5 actionable sub-tasks as a schema-constrained
//! JSON array and assigns a fresh id to each returned item. Any failure
//! yields an empty sequence and the caller proceeds as if no
//! decomposition occurred.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;
use zentask_ai::{GenerateRequest, GenerativeBackend, TEXT_MODEL};

use crate::models::SubTask;

/// Wire shape of one returned item, before an id is assigned
#[derive(Debug, Deserialize)]
struct RawSubTask {
    title: String,
    #[serde(rename = "isDone")]
    is_done: bool,
}

fn sub_task_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "isDone": { "type": "boolean" }
            },
            "required": ["title", "isDone"]
        }
    })
}

/// Break a task down into sub-tasks; empty on any failure
pub async fn decompose(
    backend: &dyn GenerativeBackend,
    title: &str,
    description: &str,
) -> Vec<SubTask> {
    let request = GenerateRequest::text(
        TEXT_MODEL,
        format!(
            "Break down this task into 3-5 logical, actionable sub-tasks.\nTask: {}\nDetails: {}",
            title, description
        ),
    )
    .with_response_schema(sub_task_schema());

    let value = match backend.generate(request).await {
        Ok(response) => match response.into_json() {
            Some(value) => value,
            None => {
                warn!("decomposition returned a non-JSON response");
                return Vec::new();
            }
        },
        Err(err) => {
            warn!(%err, "decomposition failed");
            return Vec::new();
        }
    };

    match serde_json::from_value::<Vec<RawSubTask>>(value) {
        Ok(items) => items
            .into_iter()
            .map(|item| SubTask {
                id: Uuid::new_v4(),
                title: item.title,
                is_done: item.is_done,
            })
            .collect(),
        Err(err) => {
            warn!(%err, "decomposition items did not deserialize");
            Vec::new()
        }
    }
}

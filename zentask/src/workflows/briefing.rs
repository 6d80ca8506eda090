//! Spoken daily briefing
//!
//! Builds a fixed-template narration over the active (non-DONE) tasks,
//! requests synthesized speech, and decodes the returned base64 PCM into
//! normalized samples. Any failure yields `None`; the caller shows a
//! generic notice and does not retry.

use tracing::warn;
use zentask_ai::{GenerateRequest, GenerativeBackend, TTS_MODEL};

use crate::audio::decode_pcm16;
use crate::models::{Task, TaskStatus};

/// Narration sent to the speech service
pub fn briefing_script(tasks: &[Task]) -> String {
    let active: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done)
        .collect();

    let summary = if active.is_empty() {
        "no urgent tasks at the moment. It's a great time to reflect or start something new."
            .to_string()
    } else {
        let items = active
            .iter()
            .map(|t| format!("{} ({} priority)", t.title, t.priority))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Your focus items are: {}", items)
    };

    format!(
        "Speak in a calm, encouraging professional voice: \"Good day! Here is your Zentask briefing. Today you have {} active tasks. {} Take a deep breath, and let's find your flow.\"",
        active.len(),
        summary
    )
}

/// Synthesize the briefing; `None` on any failure
pub async fn generate_briefing(
    backend: &dyn GenerativeBackend,
    tasks: &[Task],
) -> Option<Vec<f32>> {
    let request = GenerateRequest::audio(TTS_MODEL, briefing_script(tasks));

    let payload = match backend.generate(request).await {
        Ok(response) => match response.into_audio() {
            Some(payload) => payload,
            None => {
                warn!("briefing response carried no audio");
                return None;
            }
        },
        Err(err) => {
            warn!(%err, "briefing request failed");
            return None;
        }
    };

    match decode_pcm16(&payload.data) {
        Ok(samples) => Some(samples),
        Err(err) => {
            warn!(%err, "briefing audio payload could not be decoded");
            None
        }
    }
}

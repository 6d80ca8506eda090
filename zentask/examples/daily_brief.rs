//! Daily briefing demo
//!
//! Logs a demo user in, creates a couple of tasks, and asks the Gemini
//! backend for a spoken briefing. The synthesized audio lands in
//! `briefing.pcm`.
//!
//! Requirements:
//! - Set GEMINI_API_KEY environment variable (a `.env` file works)
//!
//! Run with: cargo run -p zentask --example daily_brief
//! Play with: ffplay -f s16le -ar 24000 -i briefing.pcm

use std::sync::Arc;

use zentask::audio::PcmFileSink;
use zentask::models::{TaskDraft, TaskPriority};
use zentask::session::Session;
use zentask::storage::MemoryStore;
use zentask::store::TaskStore;
use zentask::workflows::Workflows;
use zentask_ai::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let client = GeminiClient::from_env()?;
    let workflows = Workflows::new(Arc::new(client));

    let session = Session::login(Arc::new(MemoryStore::new()), "demo", "demo")?;
    let mut tasks = TaskStore::open(&session);

    let mut review = TaskDraft::new("Prepare the quarterly review");
    review.priority = TaskPriority::High;
    tasks.create(review);
    tasks.create(TaskDraft::new("Water the plants"));

    let sink = PcmFileSink::new("briefing.pcm");
    if workflows.daily_briefing(&sink, tasks.tasks()).await? {
        println!("Briefing saved to briefing.pcm");
        println!("Play it with: ffplay -f s16le -ar 24000 -i briefing.pcm");
    } else {
        println!("Could not generate briefing at this time.");
    }

    Ok(())
}

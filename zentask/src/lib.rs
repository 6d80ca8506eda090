//! Zentask application core
//!
//! Authoritative per-user task collection mirrored to a key-value store,
//! plus the AI-assisted workflows (description refinement, decomposition
//! into sub-tasks, category/priority suggestion, spoken daily briefing).
//! The rendering layer and the real network service sit behind the
//! [`storage::KeyValueStore`], [`audio::AudioSink`], and
//! `zentask_ai::GenerativeBackend` seams.

// Data model
pub mod models;

// Key-value persistence
pub mod storage;

// Session lifecycle (mock auth)
pub mod session;

// Authoritative task collection
pub mod store;

// PCM decoding and playback seam
pub mod audio;

// AI orchestration workflows
pub mod workflows;

//! Gemini text/audio client for Zentask
//!
//! This crate owns the contract between the application core and the
//! generative service: a single request shape, a tagged union of response
//! kinds (text, structured JSON, synthesized audio), and a typed error
//! taxonomy. Structured responses are validated against the request's
//! schema before they are handed to the caller, so the application never
//! has to trust response shape at runtime.
//!
//! # Example
//!
//! ```no_run
//! use zentask_ai::{GeminiClient, GenerateRequest, GenerativeBackend, TEXT_MODEL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let request = GenerateRequest::text(TEXT_MODEL, "Summarize my day in one sentence.");
//! let response = client.generate(request).await?;
//! println!("{:?}", response);
//! # Ok(())
//! # }
//! ```

// Request/response contract
pub mod types;

// Error taxonomy
pub mod error;

// Service trait
pub mod backend;

// Environment-driven configuration
pub mod config;

// Gemini REST implementation
pub mod gemini;

pub use backend::GenerativeBackend;
pub use config::{AiConfig, TEXT_MODEL, TTS_MODEL};
pub use error::{AiError, Result};
pub use gemini::GeminiClient;
pub use types::{AudioPayload, GenerateRequest, GenerateResponse, Modality};

//! Service trait implemented by concrete clients

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse};

/// Boundary between the application core and the generative service
///
/// Object-safe so workflows can hold an `Arc<dyn GenerativeBackend>` and
/// tests can substitute a scripted implementation.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Perform a single generation round trip
    ///
    /// One attempt, no retries; callers treat any error as a signal to
    /// fall back, never as something to surface.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}

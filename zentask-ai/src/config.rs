//! Client configuration from the environment

use crate::error::AiError;

/// Model used for text and structured-JSON requests
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Model used for speech synthesis
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for [`crate::GeminiClient`]
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AiConfig {
    /// Build a config with the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read configuration from the environment, loading `.env` if present
    ///
    /// Requires `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, AiError> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AiError::Config("GEMINI_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint, e.g. to point at a local stub
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

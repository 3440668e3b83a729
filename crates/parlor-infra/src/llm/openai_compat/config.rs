//! Endpoint configuration for OpenAI-compatible relays.

use secrecy::SecretString;

/// Configuration for an [`super::OpenAiCompatRelay`].
pub struct OpenAiCompatConfig {
    /// Human-readable relay name (e.g., "groq").
    pub relay_name: String,
    /// Base URL for the API (e.g., "https://api.groq.com/openai/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
}

/// Groq default configuration.
///
/// Base URL: `https://api.groq.com/openai/v1` (Groq's OpenAI-compatible
/// endpoint).
pub fn groq_defaults(api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        relay_name: "groq".into(),
        base_url: "https://api.groq.com/openai/v1".into(),
        api_key,
    }
}

/// Custom endpoint configuration for any OpenAI-compatible deployment.
pub fn custom(name: &str, base_url: &str, api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        relay_name: name.into(),
        base_url: base_url.into(),
        api_key,
    }
}

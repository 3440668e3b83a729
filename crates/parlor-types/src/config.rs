//! Generation parameters and configuration errors for Parlor.
//!
//! `GenerationParams` carries the fixed sampling settings sent with every
//! completion request. All fields have defaults matching the deployed
//! configuration.

use serde::{Deserialize, Serialize};

/// Sampling parameters for completion requests.
///
/// The defaults are the shipped configuration: Groq's DeepSeek distill at a
/// low temperature with nucleus sampling. The UI exposes a temperature
/// slider, but its value is display-only and never reaches these params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model identifier understood by the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature in [0, 1].
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus-sampling threshold.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Maximum number of tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "deepseek-r1-distill-llama-70b".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_top_p() -> f64 {
    0.90
}

fn default_max_tokens() -> u32 {
    4096
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Errors raised while resolving configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(String),

    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_params_default_values() {
        let params = GenerationParams::default();
        assert_eq!(params.model, "deepseek-r1-distill-llama-70b");
        assert!((params.temperature - 0.3).abs() < f64::EPSILON);
        assert!((params.top_p - 0.90).abs() < f64::EPSILON);
        assert_eq!(params.max_tokens, 4096);
    }

    #[test]
    fn test_generation_params_deserialize_with_defaults() {
        let params: GenerationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.model, "deepseek-r1-distill-llama-70b");
        assert_eq!(params.max_tokens, 4096);
    }

    #[test]
    fn test_generation_params_deserialize_partial_override() {
        let params: GenerationParams =
            serde_json::from_str(r#"{"model":"llama-3.3-70b-versatile","max_tokens":1024}"#)
                .unwrap();
        assert_eq!(params.model, "llama-3.3-70b-versatile");
        assert_eq!(params.max_tokens, 1024);
        assert!((params.temperature - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_error_names_the_variable() {
        let err = ConfigError::MissingVar("GROQ_API_KEY".to_string());
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }
}

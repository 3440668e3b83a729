//! Environment-backed configuration.
//!
//! Settings come from the process environment, with a `.env` file loaded
//! first (values already present in the environment win). The API key is
//! required; startup fails naming the missing variable. Model and base URL
//! have optional overrides for pointing at a different deployment.

use secrecy::SecretString;

use parlor_types::config::{ConfigError, GenerationParams};

/// Environment variable holding the required API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Optional override for the model identifier.
pub const MODEL_VAR: &str = "PARLOR_MODEL";

/// Optional override for the provider base URL.
pub const BASE_URL_VAR: &str = "PARLOR_BASE_URL";

/// Resolved settings for constructing the completion relay.
pub struct RelaySettings {
    /// Provider API key. Wrapped so it never appears in Debug output.
    pub api_key: SecretString,
    /// Base URL override; `None` means the Groq default.
    pub base_url: Option<String>,
    /// Sampling parameters sent with every request.
    pub generation: GenerationParams,
}

impl RelaySettings {
    /// Resolve settings from the environment (after loading `.env`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] naming `GROQ_API_KEY` when the
    /// key is absent, which aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Ignore a missing .env file; the environment itself may be enough.
        let _ = dotenv::dotenv();

        let api_key = require_var(API_KEY_VAR)?;

        let mut generation = GenerationParams::default();
        if let Some(model) = optional_var(MODEL_VAR)? {
            generation.model = model;
        }
        let base_url = optional_var(BASE_URL_VAR)?;

        Ok(Self {
            api_key,
            base_url,
            generation,
        })
    }
}

/// Read a required environment variable into a secret.
fn require_var(name: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        Ok(_) => Err(ConfigError::MissingVar(name.to_string())),
        Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingVar(name.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_string())),
    }
}

/// Read an optional environment variable; unset and empty both mean `None`.
fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_require_var_present() {
        // SAFETY: this test mutates the process environment and cleans up
        // after itself; the variable name is unique to this test.
        unsafe { std::env::set_var("PARLOR_TEST_REQUIRED_1", "key-123") };

        let secret = require_var("PARLOR_TEST_REQUIRED_1").unwrap();
        assert_eq!(secret.expose_secret(), "key-123");

        // SAFETY: set just above.
        unsafe { std::env::remove_var("PARLOR_TEST_REQUIRED_1") };
    }

    #[test]
    fn test_require_var_missing_names_the_variable() {
        let err = require_var("PARLOR_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
        assert!(err.to_string().contains("PARLOR_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_require_var_empty_is_missing() {
        // SAFETY: unique variable name, removed below.
        unsafe { std::env::set_var("PARLOR_TEST_EMPTY_1", "") };

        let err = require_var("PARLOR_TEST_EMPTY_1").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));

        // SAFETY: set just above.
        unsafe { std::env::remove_var("PARLOR_TEST_EMPTY_1") };
    }

    #[test]
    fn test_optional_var_unset_is_none() {
        assert!(optional_var("PARLOR_TEST_OPTIONAL_UNSET")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_optional_var_set() {
        // SAFETY: unique variable name, removed below.
        unsafe { std::env::set_var("PARLOR_TEST_OPTIONAL_1", "llama-3.3-70b-versatile") };

        let value = optional_var("PARLOR_TEST_OPTIONAL_1").unwrap();
        assert_eq!(value.as_deref(), Some("llama-3.3-70b-versatile"));

        // SAFETY: set just above.
        unsafe { std::env::remove_var("PARLOR_TEST_OPTIONAL_1") };
    }
}

//! Completion relay implementations.
//!
//! One concrete relay exists: [`OpenAiCompatRelay`], which speaks the
//! OpenAI chat-completions protocol that Groq serves. The factory here
//! constructs it from resolved [`RelaySettings`].

pub mod openai_compat;

use crate::config::RelaySettings;

use self::openai_compat::OpenAiCompatRelay;

/// Build the completion relay from resolved settings.
///
/// Uses the Groq endpoint unless a base URL override is configured, in
/// which case any OpenAI-compatible deployment works.
pub fn create_relay(settings: &RelaySettings) -> OpenAiCompatRelay {
    match settings.base_url.as_deref() {
        Some(base_url) => {
            tracing::debug!(base_url, "using custom relay endpoint");
            OpenAiCompatRelay::new(openai_compat::config::custom(
                "custom",
                base_url,
                settings.api_key.clone(),
            ))
        }
        None => OpenAiCompatRelay::new(openai_compat::config::groq_defaults(
            settings.api_key.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::relay::CompletionRelay;
    use parlor_types::config::GenerationParams;
    use secrecy::SecretString;

    #[test]
    fn test_create_relay_defaults_to_groq() {
        let settings = RelaySettings {
            api_key: SecretString::from("gsk-test".to_string()),
            base_url: None,
            generation: GenerationParams::default(),
        };
        let relay = create_relay(&settings);
        assert_eq!(relay.name(), "groq");
    }

    #[test]
    fn test_create_relay_with_base_url_override() {
        let settings = RelaySettings {
            api_key: SecretString::from("sk-test".to_string()),
            base_url: Some("https://llm.example.com/v1".to_string()),
            generation: GenerationParams::default(),
        };
        let relay = create_relay(&settings);
        assert_eq!(relay.name(), "custom");
    }
}

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// First transcript entry on every fresh session.
pub const GREETING: &str = "Hello. I'm your Digital Social Therapist. Are you here for the \
    'Farmers Daughter' or do you just need some 'Sage Advice'? How can I help?";

/// Persona sent as the system instruction on every request. Kept as a named
/// constant so tests can assert on it (it is configuration, not logic).
pub const SYSTEM_INSTRUCTION: &str = "You are the \"Digital Social Therapist\" for Colton's \
    Social House. Your persona is witty, welcoming, and knowledgeable about food and drinks. \
    Address the user as a guest. Colton's motto is \"Eat Fresh, Drink Craft, Be Social\". \
    Recommend items from the menu if asked (Craft Cocktails like Farmers Daughter, Sociables \
    like Atomic Poppers). Keep responses concise (under 50 words) and fun.";

/// Shown when no credential is configured. A degrade-gracefully path, not an error.
pub const OFFLINE_REPLY: &str = "I'm currently offline (API Key missing). Please ask a human \
    Social Therapist at the restaurant!";

/// Shown when the service answered but with no usable text.
pub const CONTEMPLATING_REPLY: &str = "I'm contemplating that... ask me again.";

/// Shown on any transport or service failure.
pub const TROUBLE_REPLY: &str = "I seem to be having trouble connecting to the social grid. \
    Try again later.";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Serialize)]
struct GenerateRequest {
    system_instruction: ContentBlock,
    contents: Vec<ContentBlock>,
}

#[derive(Serialize)]
struct ContentBlock {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Thin client for the hosted generation service. One request per guest
/// message; no streaming, no history replay.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Returns `Ok(None)` when the service responded without usable text.
    pub async fn generate(&self, api_key: &str, model: &str, prompt: &str) -> Result<Option<String>> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let request = GenerateRequest {
            system_instruction: ContentBlock {
                parts: vec![Part { text: SYSTEM_INSTRUCTION.to_string() }],
            },
            contents: vec![ContentBlock {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("generation service error {}: {}", status, text));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(extract_text(&body))
    }
}

fn extract_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Maps every service outcome to a displayable, never-empty string.
/// Failures are logged for operators here; the caller has no error branch.
fn display_reply(outcome: Result<Option<String>>) -> String {
    match outcome {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!("generation service returned an empty reply");
            CONTEMPLATING_REPLY.to_string()
        }
        Err(err) => {
            warn!("generation request failed: {err:#}");
            TROUBLE_REPLY.to_string()
        }
    }
}

/// The assistant gateway. `converse` always yields a display string; no
/// error type crosses this boundary.
#[derive(Clone)]
pub struct Assistant {
    client: GeminiClient,
    model: String,
    config_key: Option<String>,
}

impl Assistant {
    pub fn new(model: Option<String>, config_key: Option<String>) -> Self {
        Self {
            client: GeminiClient::new(DEFAULT_BASE_URL),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            config_key,
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str, config_key: Option<String>) -> Self {
        Self {
            client: GeminiClient::new(base_url),
            model: DEFAULT_MODEL.to_string(),
            config_key,
        }
    }

    /// Environment wins over the config file; read per call, never cached.
    fn credential(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok().or_else(|| self.config_key.clone())
    }

    pub async fn converse(&self, user_text: &str) -> String {
        let Some(api_key) = self.credential() else {
            return OFFLINE_REPLY.to_string();
        };
        let outcome = self.client.generate(&api_key, &self.model, user_text).await;
        display_reply(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reply_passes_text_through() {
        let reply = display_reply(Ok(Some("Try the Farmers Daughter!".to_string())));
        assert_eq!(reply, "Try the Farmers Daughter!");
    }

    #[test]
    fn test_display_reply_empty_text_uses_contemplating_filler() {
        assert_eq!(display_reply(Ok(None)), CONTEMPLATING_REPLY);
    }

    #[test]
    fn test_display_reply_failure_uses_trouble_fallback() {
        assert_eq!(display_reply(Err(anyhow!("connection refused"))), TROUBLE_REPLY);
    }

    #[test]
    fn test_display_reply_never_empty() {
        for outcome in [
            Ok(Some("ok".to_string())),
            Ok(None),
            Err(anyhow!("boom")),
        ] {
            assert!(!display_reply(outcome).is_empty());
        }
    }

    #[test]
    fn test_extract_text_concatenates_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Eat fresh, "},{"text":"guest."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(&body).as_deref(), Some("Eat fresh, guest."));
    }

    #[test]
    fn test_extract_text_empty_payload_is_none() {
        let no_candidates: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(&no_candidates), None);

        let empty_parts: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert_eq!(extract_text(&empty_parts), None);

        let blank_text: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#).unwrap();
        assert_eq!(extract_text(&blank_text), None);
    }

    #[tokio::test]
    async fn test_converse_without_credential_is_offline_reply() {
        std::env::remove_var(API_KEY_ENV);
        let assistant = Assistant::with_base_url("http://127.0.0.1:1", None);
        assert_eq!(assistant.converse("any question").await, OFFLINE_REPLY);
        assert_eq!(assistant.converse("another one").await, OFFLINE_REPLY);
    }

    #[tokio::test]
    async fn test_converse_transport_failure_is_trouble_reply() {
        // Port 1 is unassigned; the connection is refused immediately.
        let assistant =
            Assistant::with_base_url("http://127.0.0.1:1", Some("test-key".to_string()));
        assert_eq!(assistant.converse("test").await, TROUBLE_REPLY);
    }

    #[test]
    fn test_persona_names_menu_anchors() {
        assert!(SYSTEM_INSTRUCTION.contains("Farmers Daughter"));
        assert!(SYSTEM_INSTRUCTION.contains("Atomic Poppers"));
        assert!(SYSTEM_INSTRUCTION.contains("under 50 words"));
    }
}

//! Draft generation through the Gemini text API.
//!
//! One request per invocation: the caller builds a [`DraftRequest`] from a
//! planned item, the client renders the content brief prompt and returns the
//! response body as markdown. Transport, auth, and response-shape failures
//! all surface as `CalendarError::DraftGeneration`; callers substitute
//! [`DRAFT_FALLBACK_MESSAGE`] instead of crashing.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CalendarError, Result},
    params::DraftRequest,
};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for content drafts.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Context line used when a request carries none.
pub const DEFAULT_CONTEXT: &str = "Marketing Ético OAB";

/// Fixed message shown in place of content when generation fails.
pub const DRAFT_FALLBACK_MESSAGE: &str =
    "Draft generation failed. Check your connection and API key.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the generative-text completion service.
pub struct DraftClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl DraftClient {
    /// Creates a client with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Configuration` when the variable is unset.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| CalendarError::Configuration {
            message: format!("{API_KEY_ENV} is not set; draft generation needs a Gemini API key"),
        })?;
        Ok(Self::new(api_key))
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the service base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The model this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Renders the content brief prompt for one planned item.
    pub fn prompt(request: &DraftRequest) -> String {
        let context = request.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
        format!(
            "Atue como um Especialista em Marketing Jurídico Sênior. \
             Crie um conteúdo completo e persuasivo em Markdown para: \"{}\". \
             Contexto: \"{}\". \
             Estruture com Título, Dor do cliente, 3 Pontos explicativos e CTA.",
            request.title, context
        )
    }

    /// Requests a draft and returns the generated markdown.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::DraftGeneration` on transport errors,
    /// non-success status codes, and responses without text.
    pub async fn generate(&self, request: &DraftRequest) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(request),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CalendarError::draft(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::draft(format!("service returned {status}")));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CalendarError::draft(format!("unreadable response: {e}")))?;

        extract_text(&payload).ok_or_else(|| CalendarError::draft("response contained no text"))
    }
}

/// Concatenates the text parts of the first candidate, if any.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_title_and_context() {
        let prompt = DraftClient::prompt(&DraftRequest {
            title: "Holding Familiar".to_string(),
            context: Some("Categoria: Empresarial".to_string()),
        });
        assert!(prompt.contains("\"Holding Familiar\""));
        assert!(prompt.contains("\"Categoria: Empresarial\""));
    }

    #[test]
    fn prompt_falls_back_to_default_context() {
        let prompt = DraftClient::prompt(&DraftRequest {
            title: "Post de revisão".to_string(),
            context: None,
        });
        assert!(prompt.contains(DEFAULT_CONTEXT));
    }

    #[test]
    fn extract_text_joins_candidate_parts() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r##"{"candidates": [{"content": {"parts": [{"text": "# Olá"}, {"text": " mundo"}]}}]}"##,
        )
        .expect("parse fixture");
        assert_eq!(extract_text(&payload), Some("# Olá mundo".to_string()));
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        let payload: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("parse fixture");
        assert_eq!(extract_text(&payload), None);

        let payload: GenerateContentResponse =
            serde_json::from_str(r#"{}"#).expect("parse fixture");
        assert_eq!(extract_text(&payload), None);
    }

    #[test]
    fn client_configuration_is_chainable() {
        let client = DraftClient::new("k")
            .with_model("gemini-test")
            .with_base_url("http://localhost:9");
        assert_eq!(client.model(), "gemini-test");
    }
}

//! Turns a price breakdown into prose via the configured language model.
//!
//! - A missing credential fails before any request is made.
//! - Service failures are logged and replaced with a generic message.
//! - No retries or timeouts beyond what the HTTP stack imposes.

use tracing::{error, info};

use crate::domain::{build_prompt, ContributionBreakdown};
use crate::settings::{ConfigError, ExplainerConfig};

use super::gemini::GeminiClient;

pub const FALLBACK_MESSAGE: &str =
    "An error occurred while generating the explanation. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Explanation {
    /// Text returned by the model, untouched.
    Generated(String),
    /// User-facing message shown when the service call failed.
    Fallback(String),
}

pub struct Explainer {
    config: ExplainerConfig,
}

impl Explainer {
    pub fn new(config: ExplainerConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ExplainerConfig::from_env().map(Self::new)
    }

    pub async fn explain(&self, breakdown: &ContributionBreakdown) -> Explanation {
        let client = match GeminiClient::new(&self.config) {
            Ok(client) => client,
            Err(err) => {
                error!("Failed to initialise explanation client: {err}");
                return Explanation::Fallback(FALLBACK_MESSAGE.to_string());
            }
        };

        let prompt = build_prompt(breakdown);
        info!(
            model = client.model(),
            base_price = breakdown.base_price,
            predicted_price = breakdown.predicted_price,
            "Requesting explanation"
        );

        match client.generate_text(&prompt).await {
            Ok(text) => Explanation::Generated(text),
            Err(err) => {
                error!("Error generating explanation: {err}");
                Explanation::Fallback(FALLBACK_MESSAGE.to_string())
            }
        }
    }
}

/// Loads configuration from the environment and requests an explanation.
pub async fn request_explanation(
    breakdown: &ContributionBreakdown,
) -> Result<Explanation, ConfigError> {
    let explainer = Explainer::from_env()?;
    Ok(explainer.explain(breakdown).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contribution::compute_breakdown;
    use crate::domain::features::default_features;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn breakdown() -> ContributionBreakdown {
        compute_breakdown(&default_features(), 370_012)
    }

    fn explainer_for(server: &MockServer) -> Explainer {
        Explainer::new(ExplainerConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url: server.uri(),
        })
    }

    #[tokio::test]
    async fn generated_text_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "The base price is..." }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let explanation = explainer_for(&server).explain(&breakdown()).await;
        assert_eq!(
            explanation,
            Explanation::Generated("The base price is...".to_string())
        );
    }

    #[tokio::test]
    async fn prompt_carries_the_breakdown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .mount(&server)
            .await;

        explainer_for(&server).explain(&breakdown()).await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: serde_json::Value = requests[0].body_json().unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("$370,012"));
        assert!(prompt.contains("Basement Area (0 sq ft): -$30,000"));
    }

    #[tokio::test]
    async fn service_failure_yields_fallback_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let explanation = explainer_for(&server).explain(&breakdown()).await;
        assert_eq!(
            explanation,
            Explanation::Fallback(FALLBACK_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn unreachable_service_yields_fallback_message() {
        let server = MockServer::start().await;
        let explainer = explainer_for(&server);
        drop(server);

        let explanation = explainer.explain(&breakdown()).await;
        assert!(matches!(explanation, Explanation::Fallback(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let source = config::Config::builder()
            .set_override("gemini_base_url", server.uri())
            .unwrap()
            .build()
            .unwrap();
        let err = ExplainerConfig::from_source(source)
            .map(Explainer::new)
            .err()
            .expect("configuration error");
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::providers::TextGenerator;

/// Google Gemini provider speaking the `generateContent` REST API with
/// structured (JSON) output.
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Gemini provider from configuration.
    ///
    /// A missing or empty API key fails here, before any network attempt.
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(PlannerError::MissingApiKey)?;

        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(GoogleProvider {
            client: builder.build()?,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 8192,
        }
    }
}

#[async_trait]
impl TextGenerator for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, PlannerError> {
        if self.api_key.is_empty() {
            return Err(PlannerError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens,
                    "responseMimeType": "application/json",
                    "responseSchema": schema
                }
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                PlannerError::MalformedResponse(
                    "no text part in Gemini candidates".to_string(),
                )
            })?
            .to_string();

        Ok(text)
    }
}

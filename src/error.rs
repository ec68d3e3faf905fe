use thiserror::Error;

/// Errors that can occur while driving the planning pipeline
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Required API credential is missing or empty
    #[error("API key is missing; set MEALPLAN__API_KEY or GEMINI_API_KEY")]
    MissingApiKey,

    /// The HTTP call to the generation service failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service responded but the payload did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The sanitized response text was not valid JSON for the target model
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Planner configuration.
///
/// Loaded with the following priority (highest to lowest):
/// 1. Environment variables with MEALPLAN__ prefix
///    (e.g. MEALPLAN__API_KEY, MEALPLAN__MODEL)
/// 2. config.toml file in the current directory
/// 3. Default values
///
/// The API key additionally falls back to the GEMINI_API_KEY environment
/// variable when not set through either source above.
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// API key for the generation service (required to run any stage)
    pub api_key: Option<String>,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate per call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Optional request timeout in milliseconds; when absent the transport
    /// default applies
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    8192
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_ms: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nesting room: MEALPLAN__API_KEY
            .add_source(
                Environment::with_prefix("MEALPLAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: PlannerConfig = settings.try_deserialize()?;
        if config.api_key.is_none() {
            config.api_key = std::env::var("GEMINI_API_KEY").ok();
        }
        Ok(config)
    }

    /// Convenience constructor for direct use and tests
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        PlannerConfig {
            api_key: Some(api_key.into()),
            ..PlannerConfig::default()
        }
    }
}

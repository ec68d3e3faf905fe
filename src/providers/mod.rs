mod google;

pub use google::GoogleProvider;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PlannerError;

/// Seam between the pipeline and the hosted generation service.
///
/// `schema` is a structural description of the expected response (named,
/// required fields); the service is instructed to conform to it but the
/// result is still text that every caller must parse defensively.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for diagnostics (e.g. "google")
    fn provider_name(&self) -> &str;

    /// Issue one generation call and return the raw response text
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, PlannerError>;
}

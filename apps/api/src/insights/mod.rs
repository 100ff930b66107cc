// Insights gateway: enriched career content and task feedback from the
// generative-text service. Failures never reach the user; the reducer swaps
// in static fallback data when a gateway call errors.

pub mod fallback;
pub mod feedback;
pub mod gemini;
pub mod prompts;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::insights::feedback::TaskAnswer;
use crate::llm_client::LlmError;
use crate::models::insights::CareerInsights;
use crate::models::quiz::{Archetype, Profession};

/// Inputs for one insights fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    pub archetype: Archetype,
    pub profession: Profession,
    /// Aptitude score in [0, 100].
    pub match_score: u8,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("insights gateway is disabled (no API key configured)")]
    Disabled,

    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("response failed schema validation: {0}")]
    Schema(String),

    #[error("gateway call timed out after {0:?}")]
    Timeout(Duration),
}

/// Source of generated career content.
///
/// Implementations make exactly one attempt per call. Deadlines are imposed
/// by the caller, not the gateway.
#[async_trait]
pub trait InsightsGateway: Send + Sync {
    async fn fetch_insights(&self, request: &InsightsRequest) -> Result<CareerInsights, GatewayError>;

    /// One feedback line per answer, in input order.
    async fn evaluate_tasks(
        &self,
        profession: Profession,
        answers: &[TaskAnswer],
    ) -> Result<Vec<String>, GatewayError>;
}

/// Gateway used when no API key is configured. Every call fails immediately,
/// so sessions run entirely on fallback content.
pub struct OfflineGateway;

#[async_trait]
impl InsightsGateway for OfflineGateway {
    async fn fetch_insights(&self, _request: &InsightsRequest) -> Result<CareerInsights, GatewayError> {
        Err(GatewayError::Disabled)
    }

    async fn evaluate_tasks(
        &self,
        _profession: Profession,
        _answers: &[TaskAnswer],
    ) -> Result<Vec<String>, GatewayError> {
        Err(GatewayError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_gateway_always_fails() {
        let request = InsightsRequest {
            archetype: Archetype::Logical,
            profession: Profession::Law,
            match_score: 70,
        };
        assert!(matches!(
            OfflineGateway.fetch_insights(&request).await,
            Err(GatewayError::Disabled)
        ));
        assert!(matches!(
            OfflineGateway.evaluate_tasks(Profession::Law, &[]).await,
            Err(GatewayError::Disabled)
        ));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = InsightsRequest {
            archetype: Archetype::Social,
            profession: Profession::Psychology,
            match_score: 85,
        };
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["matchScore"], 85);
        assert_eq!(json["profession"], "Psychology");
    }
}

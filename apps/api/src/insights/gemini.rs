//! Insights gateway backed by the Gemini generateContent API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::insights::feedback::TaskAnswer;
use crate::insights::prompts::{INSIGHTS_PROMPT, TASK_FEEDBACK_PROMPT};
use crate::insights::{GatewayError, InsightsGateway, InsightsRequest};
use crate::llm_client::prompts::{AUDIENCE_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::insights::CareerInsights;
use crate::models::quiz::Profession;

#[derive(Debug, Deserialize)]
struct FeedbackPayload {
    #[serde(default)]
    feedbacks: Vec<String>,
}

pub struct GeminiGateway {
    llm: LlmClient,
}

impl GeminiGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InsightsGateway for GeminiGateway {
    async fn fetch_insights(&self, request: &InsightsRequest) -> Result<CareerInsights, GatewayError> {
        let prompt = build_insights_prompt(request);
        let insights: CareerInsights = self.llm.call_json(&prompt, &system_prompt()).await?;
        insights.check_shape().map_err(GatewayError::Schema)?;

        info!(
            profession = %request.profession,
            tasks = insights.simulated_tasks.len(),
            "insights generated"
        );
        Ok(insights)
    }

    async fn evaluate_tasks(
        &self,
        profession: Profession,
        answers: &[TaskAnswer],
    ) -> Result<Vec<String>, GatewayError> {
        if answers.is_empty() {
            return Ok(Vec::new());
        }
        let prompt = build_feedback_prompt(profession, answers)?;
        let payload: FeedbackPayload = self.llm.call_json(&prompt, &system_prompt()).await?;
        Ok(payload.feedbacks)
    }
}

fn system_prompt() -> String {
    format!("{JSON_ONLY_SYSTEM} {AUDIENCE_INSTRUCTION}")
}

fn build_insights_prompt(request: &InsightsRequest) -> String {
    INSIGHTS_PROMPT
        .replace("{archetype}", request.archetype.label())
        .replace("{profession}", request.profession.as_str())
        .replace("{match_score}", &request.match_score.to_string())
}

fn build_feedback_prompt(profession: Profession, answers: &[TaskAnswer]) -> Result<String, GatewayError> {
    let qa_pairs = serde_json::to_string_pretty(answers)
        .map_err(|e| GatewayError::Schema(format!("could not encode task answers: {e}")))?;
    Ok(TASK_FEEDBACK_PROMPT
        .replace("{profession}", profession.as_str())
        .replace("{qa_pairs}", &qa_pairs))
}

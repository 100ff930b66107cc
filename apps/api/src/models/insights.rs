use serde::{Deserialize, Serialize};

/// Number of job profiles a well-formed insights payload carries.
pub const JOB_COUNT: usize = 3;

/// One generated job profile within a profession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub key_skills: Vec<String>,
    pub personality_fit: Vec<String>,
    pub pathway: String,
    pub salary: String,
    pub growth: Vec<String>,
    pub fit_reason: String,
}

/// Enriched career content attached to a profession after its quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInsights {
    pub jobs: Vec<JobSuggestion>,
    #[serde(default)]
    pub simulated_tasks: Vec<String>,
}

impl CareerInsights {
    /// Checks the parts of the payload the result pages rely on.
    /// Returns a description of the first violation.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.jobs.len() != JOB_COUNT {
            return Err(format!(
                "expected {JOB_COUNT} jobs, got {}",
                self.jobs.len()
            ));
        }
        for (i, job) in self.jobs.iter().enumerate() {
            let required = [
                ("title", &job.title),
                ("summary", &job.summary),
                ("pathway", &job.pathway),
                ("salary", &job.salary),
            ];
            if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(format!("job {i} has an empty {field}"));
            }
        }
        if self.simulated_tasks.iter().any(|t| t.trim().is_empty()) {
            return Err("simulated task list contains an empty entry".to_string());
        }
        Ok(())
    }
}

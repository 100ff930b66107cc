//! Task feedback bookkeeping: which answers go to the gateway and how its
//! reply is normalized to one line per answer and placed back at the
//! answered task's position.

use serde::{Deserialize, Serialize};

use crate::insights::GatewayError;
use crate::quiz::history::TaskResponse;

/// Line used for every answer when the gateway call fails.
pub const FAILURE_LINE: &str = "Thanks for submitting! Good attempt.";
/// Line used to fill gaps when the gateway returns too few lines.
pub const MISSING_LINE: &str = "Good effort! Keep exploring.";

/// A simulated task paired with the student's written answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAnswer {
    /// Position of the task in the simulated task list. Not sent in prompts.
    #[serde(skip)]
    pub index: usize,
    pub task: String,
    pub answer: String,
}

/// Pairs each task with its response, keeping only non-blank text answers.
/// File-only responses are not sent for evaluation.
pub fn collect_answers(tasks: &[String], responses: &[TaskResponse]) -> Vec<TaskAnswer> {
    tasks
        .iter()
        .zip(responses)
        .enumerate()
        .filter(|(_, (_, r))| !r.text.trim().is_empty())
        .map(|(index, (task, r))| TaskAnswer {
            index,
            task: task.clone(),
            answer: r.text.trim().to_string(),
        })
        .collect()
}

/// One slot per simulated task. Answered tasks get the reply's lines in
/// order: truncated or padded on success, all `FAILURE_LINE` on error.
/// Unanswered tasks stay `None`.
pub fn settle_feedback(
    result: Result<Vec<String>, GatewayError>,
    answered: &[usize],
    task_count: usize,
) -> Vec<Option<String>> {
    let lines = match result {
        Ok(mut lines) => {
            lines.truncate(answered.len());
            lines.resize(answered.len(), MISSING_LINE.to_string());
            lines
        }
        Err(_) => vec![FAILURE_LINE.to_string(); answered.len()],
    };

    let mut slots = vec![None; task_count];
    for (&index, line) in answered.iter().zip(lines) {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(line);
        }
    }
    slots
}

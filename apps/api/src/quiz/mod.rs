// Quiz core: question bank, scoring, answer history and the step reducer.
// Nothing in here performs I/O; the session driver runs the effects.

pub mod handlers;
pub mod history;
pub mod machine;
pub mod question_bank;
pub mod scoring;
pub mod validation;

use thiserror::Error;

use crate::models::quiz::Profession;
use crate::quiz::machine::Step;

/// Rejections from the reducer. A rejected event leaves the state untouched.
#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    /// Required user-detail fields are missing. The only error meant for the user.
    #[error("{0}")]
    Validation(String),

    #[error("cannot {intent} while on step {step:?}")]
    InvalidTransition { step: Step, intent: &'static str },

    #[error("index {index} is out of range (len {len})")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("answer for question {index} submitted while question {cursor} is active")]
    CursorMismatch { index: usize, cursor: usize },

    #[error("score {value} is not an option of question {index}")]
    InvalidOption { index: usize, value: u8 },

    #[error("no profession is selected")]
    NoActiveProfession,

    #[error("{0} has not been completed yet")]
    ProfessionNotCompleted(Profession),
}

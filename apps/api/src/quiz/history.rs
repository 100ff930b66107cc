//! Answer history: revisable per-question buffers and per-profession records.

use serde::{Deserialize, Serialize};

use crate::models::quiz::Profession;
use crate::quiz::QuizError;

/// Fixed-length, index-addressable answer slots. A slot stays `None` until
/// its question has been answered; moving backward never clears a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerBuffer<T> {
    slots: Vec<Option<T>>,
}

impl<T: Copy> AnswerBuffer<T> {
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` at `index`, overwriting any earlier answer.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), QuizError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.slots.len()
    }
}

/// One value per profession. Adding a profession variant fails to compile
/// until every map in the session has a slot for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionMap<T> {
    #[serde(rename = "Law")]
    law: T,
    #[serde(rename = "Psychology")]
    psychology: T,
    #[serde(rename = "Designing")]
    designing: T,
}

impl<T> ProfessionMap<T> {
    pub fn get(&self, profession: Profession) -> &T {
        match profession {
            Profession::Law => &self.law,
            Profession::Psychology => &self.psychology,
            Profession::Designing => &self.designing,
        }
    }

    pub fn get_mut(&mut self, profession: Profession) -> &mut T {
        match profession {
            Profession::Law => &mut self.law,
            Profession::Psychology => &mut self.psychology,
            Profession::Designing => &mut self.designing,
        }
    }

    pub fn set(&mut self, profession: Profession, value: T) {
        *self.get_mut(profession) = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Profession, &T)> {
        Profession::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// A student's answer to one simulated task. Attachments are recorded by
/// file name only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub text: String,
    pub file_name: Option<String>,
}

/// Grows `responses` with blank entries until `index` is addressable.
pub fn task_slot(responses: &mut Vec<TaskResponse>, index: usize) -> &mut TaskResponse {
    if responses.len() <= index {
        responses.resize_with(index + 1, TaskResponse::default);
    }
    &mut responses[index]
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Personality style derived from the general quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    Creative,
    Logical,
    Social,
    Practical,
}

impl Archetype {
    /// Lookup order. Also the tie-break order of the scoring engine.
    pub const ALL: [Archetype; 4] = [
        Archetype::Creative,
        Archetype::Logical,
        Archetype::Social,
        Archetype::Practical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Creative => "Creative Thinker",
            Archetype::Logical => "Logical Analyzer",
            Archetype::Social => "Social Communicator",
            Archetype::Practical => "Practical Builder",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Career track offered for the aptitude deep-dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Profession {
    Law,
    Psychology,
    Designing,
}

impl Profession {
    pub const ALL: [Profession; 3] = [Profession::Law, Profession::Psychology, Profession::Designing];

    pub fn as_str(self) -> &'static str {
        match self {
            Profession::Law => "Law",
            Profession::Psychology => "Psychology",
            Profession::Designing => "Designing",
        }
    }

    /// Case-insensitive lookup by display name, as used in URL paths.
    pub fn parse(name: &str) -> Option<Profession> {
        Profession::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable answer. `V` is `Archetype` for general questions and a
/// numeric score for profession questions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption<V: 'static> {
    pub label: &'static str,
    pub value: V,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question<V: 'static> {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [QuestionOption<V>],
}

impl<V: Copy + PartialEq> Question<V> {
    pub fn accepts(&self, value: V) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

pub type GeneralQuestion = Question<Archetype>;
pub type ProfessionQuestion = Question<u8>;

/// Long-form description of a profession, shown before its quiz.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedProfile {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub key_skills: &'static [&'static str],
    pub personality_fit: &'static [&'static str],
    pub pathway: &'static str,
    pub salary: &'static str,
    pub growth: &'static [&'static str],
    pub fit_reason: &'static str,
}

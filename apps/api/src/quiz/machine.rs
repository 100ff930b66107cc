//! Quiz step reducer.
//!
//! `QuizMachine::reduce` maps `(QuizState, Event)` to a new `QuizState` plus
//! the effects the caller must run. The input state is never modified: a
//! rejected event leaves it as it was, an accepted one yields a replacement.
//!
//! Profession completion is split in two phases. The synchronous phase
//! computes the aptitude score, snapshots the answers and marks the insights
//! slot `Pending`; the asynchronous phase (`Event::InsightsSettled`) attaches
//! the gateway result or the static fallback. Each pending request carries a
//! token, and a settlement whose token no longer matches the slot is ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::insights::feedback::{collect_answers, settle_feedback, TaskAnswer};
use crate::insights::fallback::fallback_insights;
use crate::insights::{GatewayError, InsightsRequest};
use crate::models::insights::CareerInsights;
use crate::models::quiz::{Archetype, Profession};
use crate::models::user::{UserDetails, UserDetailsForm};
use crate::quiz::history::{task_slot, AnswerBuffer, ProfessionMap, TaskResponse};
use crate::quiz::question_bank::{general_questions, profession_questions};
use crate::quiz::scoring::{compute_aptitude, compute_archetype};
use crate::quiz::validation::validate_user_details;
use crate::quiz::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Home,
    UserDetails,
    GeneralQuiz,
    ProfessionSelection,
    ProfessionOverview,
    ProfessionQuiz,
    TaskPage,
    LoadingResults,
    Results,
}

/// Which optional steps are part of the flow. The transition graph is the
/// same for every combination; disabled steps are simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub user_details: bool,
    pub profession_overview: bool,
    pub task_page: bool,
    pub loading_results: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            user_details: true,
            profession_overview: false,
            task_page: true,
            loading_results: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "insights", rename_all = "snake_case")]
pub enum InsightsSlot {
    #[default]
    NotRequested,
    Pending {
        token: u64,
        archetype: Archetype,
    },
    Attached(CareerInsights),
    Fallback(CareerInsights),
}

impl InsightsSlot {
    pub fn insights(&self) -> Option<&CareerInsights> {
        match self {
            InsightsSlot::Attached(insights) | InsightsSlot::Fallback(insights) => Some(insights),
            InsightsSlot::NotRequested | InsightsSlot::Pending { .. } => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, InsightsSlot::Pending { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "feedback", rename_all = "snake_case")]
pub enum FeedbackSlot {
    #[default]
    NotRequested,
    Pending {
        token: u64,
        /// Indexes of the tasks sent for evaluation, in reply order.
        answered: Vec<usize>,
    },
    /// One entry per simulated task; `None` where the task was not answered.
    Ready(Vec<Option<String>>),
}

/// The whole session. Replaced, never patched, by each accepted event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizState {
    pub step: Step,
    /// Active question in whichever quiz is on screen.
    pub cursor: usize,
    pub user_details: Option<UserDetails>,
    pub general_answers: AnswerBuffer<Archetype>,
    pub final_archetype: Option<Archetype>,
    pub selected_profession: Option<Profession>,
    /// Live buffer of the profession quiz in progress.
    pub profession_answers: AnswerBuffer<u8>,
    pub aptitude_scores: ProfessionMap<Option<u8>>,
    pub profession_history: ProfessionMap<Option<AnswerBuffer<u8>>>,
    pub insights: ProfessionMap<InsightsSlot>,
    pub task_responses: ProfessionMap<Vec<TaskResponse>>,
    pub task_feedback: ProfessionMap<FeedbackSlot>,
    /// Monotonic across resets so a token issued before a reset never
    /// matches a slot created after it.
    #[serde(skip)]
    next_token: u64,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self {
            step: Step::Home,
            cursor: 0,
            user_details: None,
            general_answers: AnswerBuffer::empty(general_questions().len()),
            final_archetype: None,
            selected_profession: None,
            profession_answers: AnswerBuffer::default(),
            aptitude_scores: ProfessionMap::default(),
            profession_history: ProfessionMap::default(),
            insights: ProfessionMap::default(),
            task_responses: ProfessionMap::default(),
            task_feedback: ProfessionMap::default(),
            next_token: 0,
        }
    }

    fn begin_general_quiz(&mut self) {
        self.general_answers = AnswerBuffer::empty(general_questions().len());
        self.cursor = 0;
        self.step = Step::GeneralQuiz;
    }

    fn issue_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    fn check_cursor(&self, index: usize, len: usize) -> Result<(), QuizError> {
        if index >= len {
            return Err(QuizError::QuestionOutOfRange { index, len });
        }
        if index != self.cursor {
            return Err(QuizError::CursorMismatch {
                index,
                cursor: self.cursor,
            });
        }
        Ok(())
    }

    fn active_profession(&self) -> Result<Profession, QuizError> {
        self.selected_profession.ok_or(QuizError::NoActiveProfession)
    }

    fn simulated_tasks(&self, profession: Profession) -> &[String] {
        self.insights
            .get(profession)
            .insights()
            .map(|i| i.simulated_tasks.as_slice())
            .unwrap_or(&[])
    }
}

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    StartQuiz,
    SubmitUserDetails {
        details: UserDetailsForm,
    },
    SkipToCareers {
        #[serde(default)]
        details: Option<UserDetailsForm>,
    },
    AnswerGeneral {
        index: usize,
        archetype: Archetype,
    },
    /// Re-enter the general quiz from profession selection to revise answers.
    RevisitGeneralQuiz,
    PreviousQuestion,
    SelectProfession {
        profession: Profession,
    },
    BeginProfessionQuiz,
    AnswerProfession {
        index: usize,
        score: u8,
    },
    OpenTasks {
        profession: Profession,
    },
    UpdateTaskText {
        index: usize,
        text: String,
    },
    AttachTaskFile {
        index: usize,
        file_name: String,
    },
    SubmitTasks,
    ViewResults,
    BackToProfessions,
    Reset,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::StartQuiz => "start the quiz",
            Intent::SubmitUserDetails { .. } => "submit user details",
            Intent::SkipToCareers { .. } => "skip to careers",
            Intent::AnswerGeneral { .. } => "answer a general question",
            Intent::RevisitGeneralQuiz => "revisit the general quiz",
            Intent::PreviousQuestion => "go to the previous question",
            Intent::SelectProfession { .. } => "select a profession",
            Intent::BeginProfessionQuiz => "begin the profession quiz",
            Intent::AnswerProfession { .. } => "answer a profession question",
            Intent::OpenTasks { .. } => "open the task page",
            Intent::UpdateTaskText { .. } => "write a task response",
            Intent::AttachTaskFile { .. } => "attach a task file",
            Intent::SubmitTasks => "submit task responses",
            Intent::ViewResults => "view results",
            Intent::BackToProfessions => "go back to professions",
            Intent::Reset => "reset",
        }
    }
}

#[derive(Debug)]
pub enum Event {
    Intent(Intent),
    InsightsSettled {
        profession: Profession,
        token: u64,
        result: Result<CareerInsights, GatewayError>,
    },
    FeedbackSettled {
        profession: Profession,
        token: u64,
        result: Result<Vec<String>, GatewayError>,
    },
}

impl From<Intent> for Event {
    fn from(intent: Intent) -> Self {
        Event::Intent(intent)
    }
}

/// Asynchronous work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchInsights {
        token: u64,
        request: InsightsRequest,
    },
    EvaluateTasks {
        token: u64,
        profession: Profession,
        answers: Vec<TaskAnswer>,
    },
}

#[derive(Debug)]
pub struct Transition {
    pub state: QuizState,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizMachine {
    flow: FlowConfig,
    /// Archetype used when the general quiz was skipped or left empty.
    default_archetype: Archetype,
}

impl QuizMachine {
    pub fn new(flow: FlowConfig) -> Self {
        Self {
            flow,
            default_archetype: Archetype::Creative,
        }
    }

    pub fn flow(&self) -> FlowConfig {
        self.flow
    }

    pub fn reduce(&self, state: &QuizState, event: Event) -> Result<Transition, QuizError> {
        let mut next = state.clone();
        let mut effects = Vec::new();

        match event {
            Event::Intent(intent) => self.apply_intent(&mut next, intent, &mut effects)?,
            Event::InsightsSettled {
                profession,
                token,
                result,
            } => settle_insights(&mut next, profession, token, result),
            Event::FeedbackSettled {
                profession,
                token,
                result,
            } => settle_task_feedback(&mut next, profession, token, result),
        }

        Ok(Transition {
            state: next,
            effects,
        })
    }

    fn apply_intent(
        &self,
        s: &mut QuizState,
        intent: Intent,
        effects: &mut Vec<Effect>,
    ) -> Result<(), QuizError> {
        let step = s.step;
        let reject = QuizError::InvalidTransition {
            step,
            intent: intent.name(),
        };

        match intent {
            Intent::StartQuiz => {
                if step != Step::Home {
                    return Err(reject);
                }
                if self.flow.user_details {
                    s.step = Step::UserDetails;
                } else {
                    s.begin_general_quiz();
                }
            }

            Intent::SubmitUserDetails { details } => {
                if step != Step::UserDetails {
                    return Err(reject);
                }
                s.user_details = Some(validate_user_details(&details)?);
                s.begin_general_quiz();
            }

            Intent::SkipToCareers { details } => {
                if !matches!(step, Step::Home | Step::UserDetails) {
                    return Err(reject);
                }
                let details = match details {
                    Some(form) => Some(validate_user_details(&form)?),
                    None if self.flow.user_details => {
                        Some(validate_user_details(&UserDetailsForm::default())?)
                    }
                    None => None,
                };
                if details.is_some() {
                    s.user_details = details;
                }
                s.general_answers = AnswerBuffer::empty(general_questions().len());
                s.final_archetype = None;
                s.cursor = 0;
                s.step = Step::ProfessionSelection;
            }

            Intent::AnswerGeneral { index, archetype } => {
                if step != Step::GeneralQuiz {
                    return Err(reject);
                }
                s.check_cursor(index, s.general_answers.len())?;
                s.general_answers.set(index, archetype)?;
                if s.general_answers.is_last(index) {
                    let result = compute_archetype(s.general_answers.slots(), self.default_archetype);
                    s.final_archetype = Some(result);
                    s.cursor = 0;
                    s.step = Step::ProfessionSelection;
                } else {
                    s.cursor += 1;
                }
            }

            Intent::RevisitGeneralQuiz => {
                if step != Step::ProfessionSelection {
                    return Err(reject);
                }
                // Resume at the first gap, or the last question when complete.
                // The stored archetype stands until the end is reached again.
                let len = s.general_answers.len();
                s.cursor = s
                    .general_answers
                    .slots()
                    .iter()
                    .position(Option::is_none)
                    .unwrap_or(len.saturating_sub(1));
                s.step = Step::GeneralQuiz;
            }

            Intent::PreviousQuestion => {
                if !matches!(step, Step::GeneralQuiz | Step::ProfessionQuiz) {
                    return Err(reject);
                }
                s.cursor = s.cursor.saturating_sub(1);
            }

            Intent::SelectProfession { profession } => {
                if matches!(
                    step,
                    Step::Home | Step::UserDetails | Step::GeneralQuiz | Step::LoadingResults
                ) {
                    return Err(reject);
                }
                // A retake supersedes any fetch still running for this profession.
                if s.insights.get(profession).is_pending() {
                    s.insights.set(profession, InsightsSlot::NotRequested);
                }
                s.selected_profession = Some(profession);
                s.profession_answers = AnswerBuffer::empty(profession_questions(profession).len());
                s.cursor = 0;
                s.step = if self.flow.profession_overview {
                    Step::ProfessionOverview
                } else {
                    Step::ProfessionQuiz
                };
            }

            Intent::BeginProfessionQuiz => {
                if step != Step::ProfessionOverview {
                    return Err(reject);
                }
                s.active_profession()?;
                s.cursor = 0;
                s.step = Step::ProfessionQuiz;
            }

            Intent::AnswerProfession { index, score } => {
                if step != Step::ProfessionQuiz {
                    return Err(reject);
                }
                let profession = s.active_profession()?;
                s.check_cursor(index, s.profession_answers.len())?;
                let offered = profession_questions(profession)
                    .get(index)
                    .is_some_and(|q| q.accepts(score));
                if !offered {
                    return Err(QuizError::InvalidOption {
                        index,
                        value: score,
                    });
                }
                s.profession_answers.set(index, score)?;
                if s.profession_answers.is_last(index) {
                    self.complete_profession(s, profession, effects);
                } else {
                    s.cursor += 1;
                }
            }

            Intent::OpenTasks { profession } => {
                if !self.flow.task_page
                    || !matches!(
                        step,
                        Step::ProfessionSelection | Step::Results | Step::TaskPage
                    )
                {
                    return Err(reject);
                }
                if s.profession_history.get(profession).is_none() {
                    return Err(QuizError::ProfessionNotCompleted(profession));
                }
                s.selected_profession = Some(profession);
                s.step = Step::TaskPage;
            }

            Intent::UpdateTaskText { index, text } => {
                if step != Step::TaskPage {
                    return Err(reject);
                }
                let profession = s.active_profession()?;
                check_task_index(s, profession, index)?;
                task_slot(s.task_responses.get_mut(profession), index).text = text;
            }

            Intent::AttachTaskFile { index, file_name } => {
                if step != Step::TaskPage {
                    return Err(reject);
                }
                let profession = s.active_profession()?;
                check_task_index(s, profession, index)?;
                task_slot(s.task_responses.get_mut(profession), index).file_name = Some(file_name);
            }

            Intent::SubmitTasks => {
                if step != Step::TaskPage {
                    return Err(reject);
                }
                let profession = s.active_profession()?;
                let answers = collect_answers(
                    s.simulated_tasks(profession),
                    s.task_responses.get(profession),
                );
                if answers.is_empty() {
                    let task_count = s.simulated_tasks(profession).len();
                    s.task_feedback
                        .set(profession, FeedbackSlot::Ready(vec![None; task_count]));
                } else {
                    let token = s.issue_token();
                    s.task_feedback.set(
                        profession,
                        FeedbackSlot::Pending {
                            token,
                            answered: answers.iter().map(|a| a.index).collect(),
                        },
                    );
                    effects.push(Effect::EvaluateTasks {
                        token,
                        profession,
                        answers,
                    });
                }
            }

            Intent::ViewResults => {
                if !matches!(step, Step::ProfessionSelection | Step::TaskPage) {
                    return Err(reject);
                }
                s.step = Step::Results;
            }

            Intent::BackToProfessions => {
                if !matches!(
                    step,
                    Step::ProfessionOverview | Step::TaskPage | Step::Results | Step::LoadingResults
                ) {
                    return Err(reject);
                }
                s.cursor = 0;
                s.step = Step::ProfessionSelection;
            }

            Intent::Reset => {
                *s = QuizState {
                    next_token: s.next_token,
                    ..QuizState::new()
                };
            }
        }

        Ok(())
    }

    /// Synchronous phase of a finished profession quiz: score, snapshot and
    /// request insights, all before any asynchronous work is started.
    fn complete_profession(
        &self,
        s: &mut QuizState,
        profession: Profession,
        effects: &mut Vec<Effect>,
    ) {
        let answers = std::mem::take(&mut s.profession_answers);
        let match_score = compute_aptitude(answers.slots());

        s.aptitude_scores.set(profession, Some(match_score));
        s.profession_history.set(profession, Some(answers));
        s.task_responses.set(profession, Vec::new());
        s.task_feedback.set(profession, FeedbackSlot::NotRequested);

        let archetype = s.final_archetype.unwrap_or(self.default_archetype);
        let token = s.issue_token();
        s.insights
            .set(profession, InsightsSlot::Pending { token, archetype });
        effects.push(Effect::FetchInsights {
            token,
            request: InsightsRequest {
                archetype,
                profession,
                match_score,
            },
        });

        s.cursor = 0;
        s.step = if self.flow.task_page {
            Step::TaskPage
        } else if self.flow.loading_results {
            Step::LoadingResults
        } else {
            Step::ProfessionSelection
        };
    }
}

fn check_task_index(s: &QuizState, profession: Profession, index: usize) -> Result<(), QuizError> {
    let len = s.simulated_tasks(profession).len();
    if index >= len {
        return Err(QuizError::QuestionOutOfRange { index, len });
    }
    Ok(())
}

fn settle_insights(
    s: &mut QuizState,
    profession: Profession,
    token: u64,
    result: Result<CareerInsights, GatewayError>,
) {
    let archetype = match s.insights.get(profession) {
        InsightsSlot::Pending {
            token: expected,
            archetype,
        } if *expected == token => *archetype,
        _ => {
            debug!(%profession, token, "discarding stale insights result");
            return;
        }
    };

    let slot = match result {
        Ok(insights) => InsightsSlot::Attached(insights),
        Err(e) => {
            warn!(%profession, error = %e, "insights unavailable, using fallback data");
            InsightsSlot::Fallback(fallback_insights(profession, archetype))
        }
    };
    s.insights.set(profession, slot);

    if s.step == Step::LoadingResults && s.selected_profession == Some(profession) {
        s.step = Step::Results;
    }
}

fn settle_task_feedback(
    s: &mut QuizState,
    profession: Profession,
    token: u64,
    result: Result<Vec<String>, GatewayError>,
) {
    let answered = match s.task_feedback.get(profession) {
        FeedbackSlot::Pending {
            token: pending,
            answered,
        } if *pending == token => answered.clone(),
        _ => {
            debug!(%profession, token, "discarding stale task feedback");
            return;
        }
    };

    if let Err(e) = &result {
        warn!(%profession, error = %e, "task feedback unavailable, using fallback lines");
    }
    let task_count = s.simulated_tasks(profession).len();
    s.task_feedback.set(
        profession,
        FeedbackSlot::Ready(settle_feedback(result, &answered, task_count)),
    );
}

//! Session driver: owns the current `QuizState`, feeds events through the
//! reducer and runs the effects it requests.
//!
//! The lock is held only while reducing. Gateway calls run on spawned tasks
//! under a deadline, and their results re-enter the reducer as settlement
//! events, so a result that arrives after a reset or a retake is discarded by
//! the token check rather than by cancelling the task.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::insights::{GatewayError, InsightsGateway};
use crate::quiz::machine::{Effect, Event, FlowConfig, Intent, QuizMachine, QuizState, Step};
use crate::quiz::QuizError;

/// Outcome of one accepted intent.
pub struct Dispatched {
    pub state: QuizState,
    /// Handles of the effects started by this intent. Dropping them detaches
    /// the tasks; tests await them to observe settlement.
    pub tasks: Vec<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct Session {
    machine: QuizMachine,
    state: Arc<Mutex<QuizState>>,
    gateway: Arc<dyn InsightsGateway>,
    timeout: Duration,
}

impl Session {
    pub fn new(machine: QuizMachine, gateway: Arc<dyn InsightsGateway>, timeout: Duration) -> Self {
        Self {
            machine,
            state: Arc::new(Mutex::new(QuizState::new())),
            gateway,
            timeout,
        }
    }

    /// Optional steps the machine was built with.
    pub fn flow(&self) -> FlowConfig {
        self.machine.flow()
    }

    pub async fn snapshot(&self) -> QuizState {
        self.state.lock().await.clone()
    }

    /// Applies `intent` and starts any effects it produced.
    /// A rejected intent leaves the session untouched.
    pub async fn dispatch(&self, intent: Intent) -> Result<Dispatched, QuizError> {
        let transition = {
            let mut state = self.state.lock().await;
            let transition = self.machine.reduce(&state, intent.into())?;
            log_transition(&state, &transition.state, &transition.effects);
            *state = transition.state.clone();
            transition
        };

        let tasks = transition
            .effects
            .into_iter()
            .map(|effect| self.spawn_effect(effect))
            .collect();

        Ok(Dispatched {
            state: transition.state,
            tasks,
        })
    }

    fn spawn_effect(&self, effect: Effect) -> JoinHandle<()> {
        let session = self.clone();
        tokio::spawn(async move { session.run_effect(effect).await })
    }

    async fn run_effect(&self, effect: Effect) {
        let event = match effect {
            Effect::FetchInsights { token, request } => {
                let result = self
                    .with_deadline(self.gateway.fetch_insights(&request))
                    .await;
                Event::InsightsSettled {
                    profession: request.profession,
                    token,
                    result,
                }
            }
            Effect::EvaluateTasks {
                token,
                profession,
                answers,
            } => {
                let result = self
                    .with_deadline(self.gateway.evaluate_tasks(profession, &answers))
                    .await;
                Event::FeedbackSettled {
                    profession,
                    token,
                    result,
                }
            }
        };

        let mut state = self.state.lock().await;
        match self.machine.reduce(&state, event) {
            Ok(transition) => *state = transition.state,
            Err(e) => error!("Settlement rejected: {e}"),
        }
    }

    /// Expiry of the deadline counts as a gateway failure.
    async fn with_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(GatewayError::Timeout(self.timeout)))
    }
}

fn log_transition(before: &QuizState, after: &QuizState, effects: &[Effect]) {
    if after.step == Step::Home && before.step != Step::Home {
        let completed = before
            .aptitude_scores
            .iter()
            .filter(|(_, score)| score.is_some())
            .count();
        info!(completed_professions = completed, "Session reset");
    }
    if after.final_archetype != before.final_archetype {
        if let Some(archetype) = after.final_archetype {
            info!(
                %archetype,
                answered = after.general_answers.answered(),
                "General quiz completed"
            );
        }
    }
    for effect in effects {
        if let Effect::FetchInsights { request, .. } = effect {
            info!(
                profession = %request.profession,
                match_score = request.match_score,
                "Profession quiz completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::insights::feedback::TaskAnswer;
    use crate::insights::fallback::fallback_insights;
    use crate::insights::{InsightsRequest, OfflineGateway};
    use crate::models::insights::{CareerInsights, JobSuggestion};
    use crate::models::quiz::{Archetype, Profession};
    use crate::models::user::{Standard, UserDetailsForm};
    use crate::quiz::machine::{FeedbackSlot, InsightsSlot};

    fn generated() -> CareerInsights {
        let job = |title: &str| JobSuggestion {
            title: title.to_string(),
            summary: "summary".to_string(),
            description: "description".to_string(),
            key_skills: vec!["skill".to_string()],
            personality_fit: vec!["fit".to_string()],
            pathway: "pathway".to_string(),
            salary: "salary".to_string(),
            growth: vec!["growth".to_string()],
            fit_reason: "reason".to_string(),
        };
        CareerInsights {
            jobs: vec![job("Mediator"), job("Paralegal"), job("Notary")],
            simulated_tasks: vec!["Draft a notice.".to_string(), "Review a lease.".to_string()],
        }
    }

    /// Succeeds after an optional gate is opened. Counts calls.
    #[derive(Default)]
    struct FakeGateway {
        gate: Option<Arc<Notify>>,
        delay: Option<Duration>,
        calls: AtomicUsize,
        feedback: Vec<String>,
    }

    #[async_trait]
    impl InsightsGateway for FakeGateway {
        async fn fetch_insights(&self, _request: &InsightsRequest) -> Result<CareerInsights, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(generated())
        }

        async fn evaluate_tasks(
            &self,
            _profession: Profession,
            _answers: &[TaskAnswer],
        ) -> Result<Vec<String>, GatewayError> {
            Ok(self.feedback.clone())
        }
    }

    fn session_with(gateway: Arc<dyn InsightsGateway>, flow: FlowConfig) -> Session {
        Session::new(QuizMachine::new(flow), gateway, Duration::from_secs(30))
    }

    async fn run(session: &Session, intent: Intent) -> Dispatched {
        session.dispatch(intent).await.unwrap()
    }

    async fn to_selection(session: &Session) {
        run(
            session,
            Intent::SkipToCareers {
                details: Some(UserDetailsForm {
                    name: "Meera".to_string(),
                    email: String::new(),
                    standard: Some(Standard::Class12),
                    stream: None,
                }),
            },
        )
        .await;
    }

    /// Plays a whole profession quiz; returns the completion's effect tasks.
    async fn complete(session: &Session, profession: Profession, score: u8) -> Vec<JoinHandle<()>> {
        run(session, Intent::SelectProfession { profession }).await;
        for index in 0..9 {
            run(session, Intent::AnswerProfession { index, score }).await;
        }
        run(session, Intent::AnswerProfession { index: 9, score })
            .await
            .tasks
    }

    async fn settle(tasks: Vec<JoinHandle<()>>) {
        for task in tasks {
            task.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_completion_attaches_generated_insights() {
        let gateway = Arc::new(FakeGateway::default());
        let session = session_with(gateway.clone(), FlowConfig::default());
        to_selection(&session).await;

        let tasks = complete(&session, Profession::Law, 10).await;
        assert_eq!(tasks.len(), 1);
        let pending = session.snapshot().await;
        assert_eq!(*pending.aptitude_scores.get(Profession::Law), Some(100));

        settle(tasks).await;
        let state = session.snapshot().await;
        assert_eq!(
            state.insights.get(Profession::Law),
            &InsightsSlot::Attached(generated())
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_offline_gateway_falls_back() {
        let session = session_with(
            Arc::new(OfflineGateway),
            FlowConfig {
                task_page: false,
                ..FlowConfig::default()
            },
        );
        to_selection(&session).await;
        let tasks = complete(&session, Profession::Psychology, 7).await;
        settle(tasks).await;

        let state = session.snapshot().await;
        assert_eq!(state.step, Step::ProfessionSelection);
        assert_eq!(*state.aptitude_scores.get(Profession::Psychology), Some(70));
        assert_eq!(
            state.insights.get(Profession::Psychology),
            &InsightsSlot::Fallback(fallback_insights(Profession::Psychology, Archetype::Creative))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_gateway_times_out_to_fallback() {
        let gateway = Arc::new(FakeGateway {
            delay: Some(Duration::from_secs(120)),
            ..FakeGateway::default()
        });
        let session = session_with(gateway, FlowConfig::default());
        to_selection(&session).await;

        let tasks = complete(&session, Profession::Designing, 5).await;
        settle(tasks).await;

        let state = session.snapshot().await;
        assert!(matches!(
            state.insights.get(Profession::Designing),
            InsightsSlot::Fallback(_)
        ));
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_result() {
        let gate = Arc::new(Notify::new());
        let gateway = Arc::new(FakeGateway {
            gate: Some(gate.clone()),
            ..FakeGateway::default()
        });
        let session = session_with(gateway, FlowConfig::default());
        to_selection(&session).await;

        let tasks = complete(&session, Profession::Law, 10).await;
        let reset = run(&session, Intent::Reset).await.state;

        gate.notify_one();
        settle(tasks).await;

        let state = session.snapshot().await;
        assert_eq!(state, reset);
        assert_eq!(state.step, Step::Home);
        assert_eq!(state.insights.get(Profession::Law), &InsightsSlot::NotRequested);
        assert_eq!(*state.aptitude_scores.get(Profession::Law), None);
    }

    #[tokio::test]
    async fn test_loading_step_resolves_to_results() {
        let session = session_with(
            Arc::new(FakeGateway::default()),
            FlowConfig {
                task_page: false,
                loading_results: true,
                ..FlowConfig::default()
            },
        );
        to_selection(&session).await;

        let tasks = complete(&session, Profession::Law, 7).await;
        assert_eq!(session.snapshot().await.step, Step::LoadingResults);

        settle(tasks).await;
        assert_eq!(session.snapshot().await.step, Step::Results);
    }

    #[tokio::test]
    async fn test_task_feedback_round_trip() {
        let gateway = Arc::new(FakeGateway {
            feedback: vec!["Clear and specific.".to_string()],
            ..FakeGateway::default()
        });
        let session = session_with(gateway, FlowConfig::default());
        to_selection(&session).await;
        settle(complete(&session, Profession::Law, 7).await).await;

        for index in 0..2 {
            run(
                &session,
                Intent::UpdateTaskText {
                    index,
                    text: format!("answer {index}"),
                },
            )
            .await;
        }
        let submitted = run(&session, Intent::SubmitTasks).await;
        settle(submitted.tasks).await;

        let state = session.snapshot().await;
        assert_eq!(
            state.task_feedback.get(Profession::Law),
            &FeedbackSlot::Ready(vec![
                Some("Clear and specific.".to_string()),
                Some("Good effort! Keep exploring.".to_string()),
            ])
        );
    }

    #[test]
    fn test_flow_comes_from_machine() {
        let flow = FlowConfig {
            task_page: false,
            loading_results: true,
            ..FlowConfig::default()
        };
        let session = session_with(Arc::new(OfflineGateway), flow);
        assert_eq!(session.flow(), flow);
    }

    #[tokio::test]
    async fn test_rejected_intent_keeps_session() {
        let session = session_with(Arc::new(OfflineGateway), FlowConfig::default());
        let before = session.snapshot().await;
        let err = session.dispatch(Intent::SubmitTasks).await.err().unwrap();
        assert!(matches!(err, QuizError::InvalidTransition { .. }));
        assert_eq!(session.snapshot().await, before);
    }
}

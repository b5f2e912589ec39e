//! Run session use case
//!
//! Repeats rounds with operator-supplied topics until cancellation, then
//! hands back the accumulated transcript. The loop has no other exit:
//! between rounds the operator either supplies a fresh topic, submits
//! nothing to rerun the previous one, or cancels.

use crate::ports::round_observer::RoundObserver;
use crate::ports::topic_source::{TopicRequest, TopicSource, TopicSourceError};
use crate::use_cases::run_round::{RunRoundError, RunRoundUseCase};
use roundtable_domain::{Topic, Transcript};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Errors that can occur during a session
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error(transparent)]
    Round(#[from] RunRoundError),

    #[error("Topic source failed: {0}")]
    TopicSource(#[from] TopicSourceError),
}

/// Use case for running the indefinite round loop
pub struct RunSessionUseCase {
    round: RunRoundUseCase,
    topics: Arc<dyn TopicSource>,
}

impl RunSessionUseCase {
    pub fn new(round: RunRoundUseCase, topics: Arc<dyn TopicSource>) -> Self {
        Self { round, topics }
    }

    /// Run rounds until the operator cancels or a round aborts
    ///
    /// The token is only observed at round boundaries; an in-flight
    /// executor call is never interrupted. On cancellation the
    /// transcript is returned as accumulated.
    pub async fn execute(
        &self,
        initial_topic: Topic,
        cancel: CancellationToken,
        observer: &dyn RoundObserver,
    ) -> Result<Transcript, RunSessionError> {
        let mut transcript = Transcript::new(&initial_topic);
        let mut topic = initial_topic;
        let mut rounds = 0usize;

        loop {
            if cancel.is_cancelled() {
                info!("Session cancelled after {} rounds", rounds);
                return Ok(transcript);
            }

            self.round
                .execute(&topic, &mut transcript, observer)
                .await?;
            rounds += 1;
            observer.on_round_complete(rounds);

            match self.topics.next_topic().await? {
                TopicRequest::Cancelled => {
                    info!("Session cancelled after {} rounds", rounds);
                    return Ok(transcript);
                }
                TopicRequest::New(text) => {
                    if let Some(new_topic) = Topic::try_new(text) {
                        transcript.push_operator_note(new_topic.content());
                        topic = new_topic;
                    }
                }
                TopicRequest::Continue => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::role_executor::{ExecutorError, RoleExecutor};
    use crate::ports::round_observer::NoObserver;
    use async_trait::async_trait;
    use roundtable_domain::{Role, Taxonomy, TaxonomyBuilder, TranscriptEntry};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockExecutor {
        responses: Mutex<VecDeque<Result<String, ExecutorError>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockExecutor {
        fn scripted(responses: Vec<&str>) -> Self {
            Self {
                responses: Mutex::new(
                    responses.into_iter().map(|r| Ok(r.to_string())).collect(),
                ),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn prompt(&self, index: usize) -> String {
            self.calls.lock().unwrap()[index].1.clone()
        }
    }

    #[async_trait]
    impl RoleExecutor for MockExecutor {
        async fn execute(
            &self,
            instructions: &str,
            prompt: &str,
        ) -> Result<String, ExecutorError> {
            self.calls
                .lock()
                .unwrap()
                .push((instructions.to_string(), prompt.to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ExecutorError::RequestFailed("no more responses".into())))
        }
    }

    struct MockTopicSource {
        requests: Mutex<VecDeque<TopicRequest>>,
    }

    impl MockTopicSource {
        fn new(requests: Vec<TopicRequest>) -> Self {
            Self {
                requests: Mutex::new(VecDeque::from(requests)),
            }
        }
    }

    #[async_trait]
    impl TopicSource for MockTopicSource {
        async fn next_topic(&self) -> Result<TopicRequest, TopicSourceError> {
            // Defaults to cancellation so a test can never loop forever.
            Ok(self
                .requests
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(TopicRequest::Cancelled))
        }
    }

    fn tiny_taxonomy() -> Arc<Taxonomy> {
        Arc::new(
            TaxonomyBuilder::new("test")
                .role(Role::closer("Chair", "Summarize."))
                .category("Only", &["Chair"])
                .default_category("Only")
                .build()
                .unwrap(),
        )
    }

    fn session(executor: Arc<MockExecutor>, topics: MockTopicSource) -> RunSessionUseCase {
        RunSessionUseCase::new(
            RunRoundUseCase::new(executor, tiny_taxonomy()),
            Arc::new(topics),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_cancellation_after_first_round() {
        let executor = Arc::new(MockExecutor::scripted(vec!["Only", "done"]));
        let use_case = session(executor.clone(), MockTopicSource::new(vec![]));

        let transcript = use_case
            .execute(Topic::new("first"), CancellationToken::new(), &NoObserver)
            .await
            .unwrap();

        // One classification + one occurrence, then the source cancelled.
        assert_eq!(executor.call_count(), 2);
        assert_eq!(transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_runs_no_round() {
        let executor = Arc::new(MockExecutor::scripted(vec![]));
        let use_case = session(executor.clone(), MockTopicSource::new(vec![]));

        let token = CancellationToken::new();
        token.cancel();

        let transcript = use_case
            .execute(Topic::new("first"), token, &NoObserver)
            .await
            .unwrap();

        assert_eq!(executor.call_count(), 0);
        assert_eq!(transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_new_topic_becomes_operator_note_and_next_round_topic() {
        let executor = Arc::new(MockExecutor::scripted(vec![
            "Only", "first verdict", "Only", "second verdict",
        ]));
        let use_case = session(
            executor.clone(),
            MockTopicSource::new(vec![TopicRequest::New("second topic".to_string())]),
        );

        let transcript = use_case
            .execute(Topic::new("first topic"), CancellationToken::new(), &NoObserver)
            .await
            .unwrap();

        // Round two's classification request names the new topic.
        assert!(executor.prompt(2).contains("second topic"));
        assert!(transcript.entries().iter().any(|e| matches!(
            e,
            TranscriptEntry::OperatorNote { text } if text == "second topic"
        )));
    }

    #[tokio::test]
    async fn test_continue_reuses_previous_topic() {
        let executor = Arc::new(MockExecutor::scripted(vec![
            "Only", "first verdict", "Only", "second verdict",
        ]));
        let use_case = session(
            executor.clone(),
            MockTopicSource::new(vec![TopicRequest::Continue]),
        );

        let transcript = use_case
            .execute(Topic::new("same topic"), CancellationToken::new(), &NoObserver)
            .await
            .unwrap();

        assert!(executor.prompt(0).contains("same topic"));
        assert!(executor.prompt(2).contains("same topic"));
        // No operator note was appended.
        assert!(!transcript
            .entries()
            .iter()
            .any(|e| matches!(e, TranscriptEntry::OperatorNote { .. })));
    }

    #[tokio::test]
    async fn test_blank_new_topic_is_treated_as_continue() {
        let executor = Arc::new(MockExecutor::scripted(vec![
            "Only", "first verdict", "Only", "second verdict",
        ]));
        let use_case = session(
            executor.clone(),
            MockTopicSource::new(vec![TopicRequest::New("   ".to_string())]),
        );

        let transcript = use_case
            .execute(Topic::new("same topic"), CancellationToken::new(), &NoObserver)
            .await
            .unwrap();

        assert!(executor.prompt(2).contains("same topic"));
        assert!(!transcript
            .entries()
            .iter()
            .any(|e| matches!(e, TranscriptEntry::OperatorNote { .. })));
    }

    #[tokio::test]
    async fn test_round_failure_propagates() {
        // The classifier response is the only scripted reply, so the
        // Chair's occurrence fails.
        let executor = Arc::new(MockExecutor::scripted(vec!["Only"]));
        let use_case = session(executor, MockTopicSource::new(vec![]));

        let result = use_case
            .execute(Topic::new("first"), CancellationToken::new(), &NoObserver)
            .await;

        assert!(matches!(
            result,
            Err(RunSessionError::Round(RunRoundError::RoleExecution { .. }))
        ));
    }
}

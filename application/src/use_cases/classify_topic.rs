//! Classify topic use case
//!
//! Maps free topic text onto a category label with a single executor
//! invocation against a hidden classification persona. No retries: the
//! trimmed response is passed onward as-is, and the taxonomy resolves
//! anything unrecognized to its default sequence. Classification is an
//! advisory heuristic, not a gate.

use crate::ports::role_executor::{ExecutorError, RoleExecutor};
use roundtable_domain::{PromptTemplate, Taxonomy, Topic, log_preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during classification
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Classification failed: {0}")]
    Executor(#[from] ExecutorError),
}

/// Use case for classifying a topic against a taxonomy
pub struct ClassifyTopic {
    executor: Arc<dyn RoleExecutor>,
}

impl ClassifyTopic {
    pub fn new(executor: Arc<dyn RoleExecutor>) -> Self {
        Self { executor }
    }

    /// Obtain a (possibly unrecognized) category label for `topic`
    pub async fn execute(
        &self,
        taxonomy: &Taxonomy,
        topic: &Topic,
    ) -> Result<String, ClassificationError> {
        let instructions = PromptTemplate::classifier_instructions(taxonomy.categories());
        let request = PromptTemplate::classification_request(topic.content());

        let label = self.executor.execute(&instructions, &request).await?;
        let label = label.trim().to_string();

        debug!(
            "Classified '{}' as '{}'",
            log_preview(topic.content(), 60),
            label
        );
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roundtable_domain::panel::catalog;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockExecutor {
        responses: Mutex<VecDeque<String>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl MockExecutor {
        fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().map(String::from).collect()),
                calls: Mutex::new(Vec::new()),
            }
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
                .ok_or_else(|| ExecutorError::RequestFailed("no more responses".to_string()))
        }
    }

    #[tokio::test]
    async fn test_classification_trims_response() {
        let executor = Arc::new(MockExecutor::new(vec!["  Quick Feedback \n"]));
        let classify = ClassifyTopic::new(executor.clone());
        let taxonomy = catalog::thinking_hats();

        let label = classify
            .execute(&taxonomy, &Topic::new("is this idea any good?"))
            .await
            .unwrap();

        assert_eq!(label, "Quick Feedback");
    }

    #[tokio::test]
    async fn test_classifier_prompt_carries_labels_and_topic() {
        let executor = Arc::new(MockExecutor::new(vec!["Initial Ideas"]));
        let classify = ClassifyTopic::new(executor.clone());
        let taxonomy = catalog::thinking_hats();

        classify
            .execute(&taxonomy, &Topic::new("brainstorm a name"))
            .await
            .unwrap();

        let calls = executor.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (instructions, prompt) = &calls[0];
        assert!(instructions.contains("Solving Problems"));
        assert!(instructions.contains("Respond with only the category name."));
        assert!(prompt.contains("brainstorm a name"));
    }

    #[tokio::test]
    async fn test_executor_failure_propagates() {
        let executor = Arc::new(MockExecutor::new(vec![]));
        let classify = ClassifyTopic::new(executor);
        let taxonomy = catalog::thinking_hats();

        let result = classify.execute(&taxonomy, &Topic::new("anything")).await;
        assert!(matches!(
            result,
            Err(ClassificationError::Executor(ExecutorError::RequestFailed(_)))
        ));
    }
}

//! Run round use case
//!
//! Drives one full pass: classify the topic, resolve the category's role
//! sequence, execute each occurrence in order, and append every output
//! to the transcript as it lands so later occurrences see it.

use crate::ports::role_executor::{ExecutorError, RoleExecutor};
use crate::ports::round_observer::RoundObserver;
use crate::use_cases::classify_topic::{ClassificationError, ClassifyTopic};
use roundtable_domain::{
    PromptTemplate, PromptVariant, Taxonomy, Topic, Transcript, log_preview,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a round
///
/// Either variant aborts the round. Contributions appended before the
/// failing occurrence stay in the transcript; a round is never rolled
/// back.
#[derive(Error, Debug)]
pub enum RunRoundError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("Role '{role}' failed: {source}")]
    RoleExecution {
        role: String,
        #[source]
        source: ExecutorError,
    },
}

/// What one round produced
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Category whose sequence ran (the default category on fallback)
    pub category: String,
    /// Whether the classifier's label matched a registered category
    pub matched: bool,
    /// `(role name, output)` per occurrence, in execution order
    pub contributions: Vec<(String, String)>,
}

/// Use case for running a single classify-then-execute round
pub struct RunRoundUseCase {
    executor: Arc<dyn RoleExecutor>,
    classifier: ClassifyTopic,
    taxonomy: Arc<Taxonomy>,
}

impl RunRoundUseCase {
    pub fn new(executor: Arc<dyn RoleExecutor>, taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            classifier: ClassifyTopic::new(executor.clone()),
            executor,
            taxonomy,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Execute one round over `topic`, appending to `transcript`
    pub async fn execute(
        &self,
        topic: &Topic,
        transcript: &mut Transcript,
        observer: &dyn RoundObserver,
    ) -> Result<RoundOutcome, RunRoundError> {
        let label = self.classifier.execute(&self.taxonomy, topic).await?;

        let resolved = self.taxonomy.sequence_for(&label);
        if resolved.matched {
            info!("Category: {}", resolved.category);
        } else {
            info!(
                "Unrecognized label '{}', falling back to '{}'",
                label, resolved.category
            );
        }
        observer.on_category(&label, resolved.category, resolved.matched);
        observer.on_sequence(resolved.roles);

        let total = resolved.roles.len();
        let mut contributions = Vec::with_capacity(total);

        for (position, role) in resolved.roles.iter().enumerate() {
            observer.on_occurrence_start(role, position, total);

            let variant = PromptVariant::for_occurrence(
                role,
                position,
                total,
                self.taxonomy.opening_step(),
            );
            let prompt = PromptTemplate::for_variant(
                variant,
                role.name(),
                topic.content(),
                &transcript.render(),
            );

            debug!("{} ({}/{}) thinking", role.name(), position + 1, total);
            let output = self
                .executor
                .execute(role.instructions(), &prompt)
                .await
                .map_err(|source| RunRoundError::RoleExecution {
                    role: role.name().to_string(),
                    source,
                })?;

            // Appended before the next occurrence builds its prompt.
            transcript.push_contribution(role.name(), &output);
            contributions.push((role.name().to_string(), output.clone()));
            observer.on_occurrence_complete(role, &output);
        }

        info!(
            "Round complete: {} contributions on '{}'",
            contributions.len(),
            log_preview(topic.content(), 60)
        );
        Ok(RoundOutcome {
            category: resolved.category.to_string(),
            matched: resolved.matched,
            contributions,
        })
    }
}

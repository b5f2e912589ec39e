//! Prompt templates for classification and role occurrences

use crate::prompt::variant::PromptVariant;

/// Templates for generating the prompts sent to the executor
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instructions for the hidden classification persona
    ///
    /// The response body must be only the matched label; anything else
    /// falls through to the default sequence downstream.
    pub fn classifier_instructions<'a>(categories: impl Iterator<Item = &'a str>) -> String {
        let mut instructions = String::from(
            "Analyze the user's prompt and categorize it into one of the following categories:\n",
        );
        for (i, label) in categories.enumerate() {
            instructions.push_str(&format!("{}. {}\n", i + 1, label));
        }
        instructions.push_str("Respond with only the category name.");
        instructions
    }

    /// Request sent to the classification persona
    pub fn classification_request(topic: &str) -> String {
        format!("Classify this prompt: {}", topic)
    }

    /// Standard analysis prompt for a non-final occurrence
    pub fn analysis(role_name: &str, topic: &str, context: &str) -> String {
        format!(
            "As the {}, analyze this topic: {}\n\nConsider the following context from previous rounds:\n{}",
            role_name, topic, context
        )
    }

    /// Stage-setting prompt for a closer opening the sequence
    pub fn opening(role_name: &str, topic: &str, context: &str) -> String {
        format!(
            "As the {}, set the stage for analyzing this topic: {}\n\nCurrent context:\n{}",
            role_name, topic, context
        )
    }

    /// Final synthesis prompt over the whole transcript
    ///
    /// The synthesis must read as one self-contained answer, so the
    /// prompt forbids referencing the other panelists by name.
    pub fn synthesis(role_name: &str, context: &str) -> String {
        format!(
            "As the {}, provide a final summary based on all the insights below. Write a \
             single, self-contained answer and do not reference the other panelists by \
             name.\n\n{}",
            role_name, context
        )
    }

    /// Build the prompt for one occurrence given its variant
    pub fn for_variant(
        variant: PromptVariant,
        role_name: &str,
        topic: &str,
        context: &str,
    ) -> String {
        match variant {
            PromptVariant::Opening => Self::opening(role_name, topic, context),
            PromptVariant::Analysis => Self::analysis(role_name, topic, context),
            PromptVariant::Synthesis => Self::synthesis(role_name, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_instructions_enumerate_labels() {
        let labels = ["Quick Feedback", "Strategic Planning"];
        let instructions = PromptTemplate::classifier_instructions(labels.into_iter());
        assert!(instructions.contains("1. Quick Feedback"));
        assert!(instructions.contains("2. Strategic Planning"));
        assert!(instructions.ends_with("Respond with only the category name."));
    }

    #[test]
    fn test_classification_request_contains_topic() {
        let request = PromptTemplate::classification_request("fix the login crash");
        assert!(request.contains("fix the login crash"));
    }

    #[test]
    fn test_analysis_contains_role_topic_and_context() {
        let prompt = PromptTemplate::analysis("White Hat", "fix the crash", "Initial Topic: ...");
        assert!(prompt.contains("As the White Hat"));
        assert!(prompt.contains("fix the crash"));
        assert!(prompt.contains("Initial Topic: ..."));
    }

    #[test]
    fn test_synthesis_differs_from_analysis() {
        let context = "Initial Topic: fix the crash\n\nInsights:\n\nWhite Hat: facts\n";
        let analysis = PromptTemplate::analysis("Blue Hat", "fix the crash", context);
        let synthesis = PromptTemplate::synthesis("Blue Hat", context);
        assert_ne!(analysis, synthesis);
        assert!(synthesis.contains(context));
        assert!(synthesis.contains("do not reference the other panelists"));
        assert!(!synthesis.contains("analyze this topic"));
    }

    #[test]
    fn test_for_variant_dispatch() {
        let opening =
            PromptTemplate::for_variant(PromptVariant::Opening, "Blue Hat", "topic", "ctx");
        assert!(opening.contains("set the stage"));

        let synthesis =
            PromptTemplate::for_variant(PromptVariant::Synthesis, "Blue Hat", "topic", "ctx");
        assert!(synthesis.contains("final summary"));

        let analysis =
            PromptTemplate::for_variant(PromptVariant::Analysis, "Blue Hat", "topic", "ctx");
        assert!(analysis.contains("analyze this topic"));
    }
}

//! Transcript - the append-only discussion record
//!
//! The transcript doubles as the growing prompt context within a round
//! and as the session's final return value. Entries are only ever
//! appended; nothing is removed or reordered.

use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};

/// One entry in the discussion record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptEntry {
    /// The topic that opened the session
    Topic { text: String },
    /// One role occurrence's output
    Contribution { role: String, text: String },
    /// Topic text supplied by the operator between rounds
    OperatorNote { text: String },
}

/// Append-only discussion record (Entity)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Start a transcript from the initial topic
    pub fn new(topic: &Topic) -> Self {
        Self {
            entries: vec![TranscriptEntry::Topic {
                text: topic.content().to_string(),
            }],
        }
    }

    /// Append a role occurrence's output
    pub fn push_contribution(&mut self, role: impl Into<String>, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Contribution {
            role: role.into(),
            text: text.into(),
        });
    }

    /// Append operator-supplied topic text
    pub fn push_operator_note(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::OperatorNote {
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over role contributions only
    pub fn contributions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|e| match e {
            TranscriptEntry::Contribution { role, text } => {
                Some((role.as_str(), text.as_str()))
            }
            _ => None,
        })
    }

    /// The most recent contribution, if any
    pub fn last_contribution(&self) -> Option<(&str, &str)> {
        self.contributions().last()
    }

    /// Render the transcript as prompt context text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                TranscriptEntry::Topic { text } => {
                    out.push_str(&format!("Initial Topic: {}\n\nInsights:\n", text));
                }
                TranscriptEntry::Contribution { role, text } => {
                    out.push_str(&format!("\n{}: {}\n", role, text));
                }
                TranscriptEntry::OperatorNote { text } => {
                    out.push_str(&format!("\nUser Input: {}\n", text));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contains_only_the_topic() {
        let transcript = Transcript::new(&Topic::new("plan the migration"));
        assert_eq!(transcript.len(), 1);
        assert_eq!(
            transcript.entries()[0],
            TranscriptEntry::Topic {
                text: "plan the migration".to_string()
            }
        );
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut transcript = Transcript::new(&Topic::new("plan the migration"));
        transcript.push_contribution("Scout", "Data first.");
        transcript.push_operator_note("focus on downtime");
        transcript.push_contribution("Chair", "Ship it in stages.");

        let before: Vec<_> = transcript.entries().to_vec();
        transcript.push_contribution("Scout", "One more fact.");

        // Prior entries form an unchanged prefix after an append.
        assert_eq!(&transcript.entries()[..before.len()], before.as_slice());
        assert_eq!(transcript.len(), 5);
    }

    #[test]
    fn test_contributions_iterator_skips_notes() {
        let mut transcript = Transcript::new(&Topic::new("plan the migration"));
        transcript.push_contribution("Scout", "Data first.");
        transcript.push_operator_note("focus on downtime");
        transcript.push_contribution("Chair", "Ship it in stages.");

        let contributions: Vec<_> = transcript.contributions().collect();
        assert_eq!(
            contributions,
            vec![("Scout", "Data first."), ("Chair", "Ship it in stages.")]
        );
        assert_eq!(
            transcript.last_contribution(),
            Some(("Chair", "Ship it in stages."))
        );
    }

    #[test]
    fn test_render_format() {
        let mut transcript = Transcript::new(&Topic::new("plan the migration"));
        transcript.push_contribution("Scout", "Data first.");
        transcript.push_operator_note("focus on downtime");

        let rendered = transcript.render();
        assert!(rendered.starts_with("Initial Topic: plan the migration\n\nInsights:\n"));
        assert!(rendered.contains("\nScout: Data first.\n"));
        assert!(rendered.contains("\nUser Input: focus on downtime\n"));
        // Entries render in transcript order.
        assert!(rendered.find("Scout:").unwrap() < rendered.find("User Input:").unwrap());
    }
}

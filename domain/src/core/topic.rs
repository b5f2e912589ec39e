//! Topic value object

use serde::{Deserialize, Serialize};

/// A topic to be analyzed by the panel (Value Object)
///
/// Represents the operator-supplied text that drives one or more rounds
/// of classification and role execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Topic cannot be empty");
        Self { content }
    }

    /// Try to create a new topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Topic::new(s)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::new("fix the login crash");
        assert_eq!(t.content(), "fix the login crash");
    }

    #[test]
    fn test_topic_from_str() {
        let t: Topic = "fix the login crash".into();
        assert_eq!(t.content(), "fix the login crash");
    }

    #[test]
    #[should_panic]
    fn test_empty_topic_panics() {
        Topic::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Topic::try_new("migrate the database").is_some());
    }
}

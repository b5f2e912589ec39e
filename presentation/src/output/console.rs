//! Console output formatter for the final transcript

use colored::Colorize;
use roundtable_domain::{Transcript, TranscriptEntry};

/// Formats a transcript for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript
    pub fn format(transcript: &Transcript) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Roundtable Transcript"));
        output.push('\n');

        for entry in transcript.entries() {
            match entry {
                TranscriptEntry::Topic { text } => {
                    output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), text));
                }
                TranscriptEntry::Contribution { role, text } => {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", role).yellow().bold(),
                        text
                    ));
                }
                TranscriptEntry::OperatorNote { text } => {
                    output.push_str(&format!("\n{} {}\n", "Operator:".cyan().bold(), text));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format only the last synthesis (concise output)
    pub fn format_final(transcript: &Transcript) -> String {
        match transcript.last_contribution() {
            Some((role, text)) => {
                format!("{}\n\n{}\n", format!("=== {} ===", role).cyan().bold(), text)
            }
            None => "No contributions recorded.\n".to_string(),
        }
    }

    /// Format as JSON
    pub fn format_json(transcript: &Transcript) -> String {
        serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::Topic;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new(&Topic::new("plan the migration"));
        transcript.push_contribution("Scout", "Data first.");
        transcript.push_operator_note("focus on downtime");
        transcript.push_contribution("Chair", "Ship it in stages.");
        transcript
    }

    #[test]
    fn test_format_contains_all_entries_in_order() {
        let output = ConsoleFormatter::format(&sample());
        assert!(output.contains("plan the migration"));
        assert!(output.contains("Scout"));
        assert!(output.contains("focus on downtime"));
        assert!(output.contains("Ship it in stages."));
        assert!(output.find("Data first.").unwrap() < output.find("focus on downtime").unwrap());
    }

    #[test]
    fn test_format_final_shows_last_contribution_only() {
        let output = ConsoleFormatter::format_final(&sample());
        assert!(output.contains("Chair"));
        assert!(output.contains("Ship it in stages."));
        assert!(!output.contains("Data first."));
    }

    #[test]
    fn test_format_final_without_contributions() {
        let transcript = Transcript::new(&Topic::new("plan the migration"));
        assert_eq!(
            ConsoleFormatter::format_final(&transcript),
            "No contributions recorded.\n"
        );
    }

    #[test]
    fn test_format_json_round_trips_entries() {
        let output = ConsoleFormatter::format_json(&sample());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 4);
        assert_eq!(value["entries"][1]["role"], "Scout");
    }
}

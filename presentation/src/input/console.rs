//! Console topic source with multi-line input and persistent history

use async_trait::async_trait;
use roundtable_application::{TopicRequest, TopicSource, TopicSourceError};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::Mutex;

/// Interactive [`TopicSource`] reading multi-line topics from the terminal
///
/// A topic ends with two consecutive blank lines. Ctrl-C or EOF at the
/// prompt cancels the session; a blank submission reruns the previous
/// topic. Input history persists across sessions.
pub struct ConsoleTopicSource {
    editor: Mutex<DefaultEditor>,
    history_path: Option<PathBuf>,
}

impl ConsoleTopicSource {
    /// Create the source, loading history from `history_file` or the
    /// default location under the user data directory
    pub fn new(history_file: Option<&str>) -> Result<Self, ReadlineError> {
        let mut editor = DefaultEditor::new()?;

        let history_path = match history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("roundtable").join("history.txt")),
        };
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor: Mutex::new(editor),
            history_path,
        })
    }

    /// Prompt for the session's initial topic
    pub fn initial_topic(&self) -> Result<TopicRequest, TopicSourceError> {
        self.collect("Enter your topic")
    }

    fn collect(&self, header: &str) -> Result<TopicRequest, TopicSourceError> {
        println!("{} (finish with two consecutive blank lines):", header);

        let mut editor = self.editor.lock().unwrap();
        let mut lines: Vec<String> = Vec::new();
        let mut blank_count = 0usize;

        loop {
            match editor.readline("") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        blank_count += 1;
                        if blank_count == 2 {
                            break;
                        }
                    } else {
                        blank_count = 0;
                    }
                    lines.push(line);
                }
                Err(ReadlineError::Interrupted) => return Ok(TopicRequest::Cancelled),
                Err(ReadlineError::Eof) => {
                    // Closed stdin with no pending text ends the session;
                    // otherwise the collected text still counts.
                    if lines.iter().all(|l| l.trim().is_empty()) {
                        return Ok(TopicRequest::Cancelled);
                    }
                    break;
                }
                Err(e) => return Err(TopicSourceError::Io(e.to_string())),
            }
        }

        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let text = lines.join("\n");
        if text.trim().is_empty() {
            return Ok(TopicRequest::Continue);
        }

        let _ = editor.add_history_entry(text.replace('\n', " "));
        if let Some(ref path) = self.history_path {
            let _ = editor.save_history(path);
        }

        Ok(TopicRequest::New(text))
    }
}

#[async_trait]
impl TopicSource for ConsoleTopicSource {
    async fn next_topic(&self) -> Result<TopicRequest, TopicSourceError> {
        self.collect("\nNext topic, or submit nothing to rerun the same one")
    }
}

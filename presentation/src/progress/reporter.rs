//! Console progress reporting for round execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use roundtable_application::RoundObserver;
use roundtable_domain::Role;
use std::sync::Mutex;
use std::time::Duration;

/// Reports round progress on the console with a spinner per occurrence
pub struct ConsoleReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundObserver for ConsoleReporter {
    fn on_category(&self, label: &str, category: &str, matched: bool) {
        if matched {
            println!("\n{} {}", "Category:".cyan().bold(), category);
        } else {
            println!(
                "\n{} {} {}",
                "Category:".cyan().bold(),
                category,
                format!("(unrecognized label '{}')", label).dimmed()
            );
        }
    }

    fn on_sequence(&self, roles: &[Role]) {
        println!(
            "{} {}",
            "Sequence:".cyan().bold(),
            roles
                .iter()
                .map(|r| r.name().to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
    }

    fn on_occurrence_start(&self, role: &Role, position: usize, total: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb.set_message(format!("{} thinking ({}/{})", role.name(), position + 1, total));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_occurrence_complete(&self, role: &Role, output: &str) {
        self.clear_spinner();
        println!("\n{}", format!("── {} ──", role.name()).yellow().bold());
        println!("{}", output);
    }

    fn on_round_complete(&self, round: usize) {
        self.clear_spinner();
        println!(
            "\n{}",
            format!("--- Round {} complete ---", round).dimmed()
        );
    }
}

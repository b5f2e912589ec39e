//! Round observer port
//!
//! Defines the interface for reporting round progress: the category
//! chosen, the sequence resolved, and each occurrence's output as it
//! lands. Implementations live in the presentation layer; this is
//! display plumbing, not part of the engine's contract.

use roundtable_domain::Role;

/// Callback for progress updates during a round
pub trait RoundObserver: Send + Sync {
    /// Called once the classifier's label has been resolved.
    ///
    /// `label` is the raw (trimmed) classifier output, `category` the
    /// category actually used; they differ when `matched` is false and
    /// the default sequence took over.
    fn on_category(&self, label: &str, category: &str, matched: bool);

    /// Called with the resolved role sequence before execution starts
    fn on_sequence(&self, roles: &[Role]);

    /// Called when a role occurrence starts executing
    fn on_occurrence_start(&self, role: &Role, position: usize, total: usize);

    /// Called with a role occurrence's output
    fn on_occurrence_complete(&self, role: &Role, output: &str);

    /// Called after the round's last occurrence
    fn on_round_complete(&self, round: usize);
}

/// No-op observer for when progress reporting is not needed
pub struct NoObserver;

impl RoundObserver for NoObserver {
    fn on_category(&self, _label: &str, _category: &str, _matched: bool) {}
    fn on_sequence(&self, _roles: &[Role]) {}
    fn on_occurrence_start(&self, _role: &Role, _position: usize, _total: usize) {}
    fn on_occurrence_complete(&self, _role: &Role, _output: &str) {}
    fn on_round_complete(&self, _round: usize) {}
}

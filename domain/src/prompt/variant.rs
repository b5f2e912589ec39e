//! Prompt variant selection for a role occurrence

use crate::panel::role::Role;

/// Which prompt a role occurrence receives
///
/// Selection is by position and the explicit closer flag, never by
/// comparing role identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptVariant {
    /// Stage-setting prompt for a closer opening the sequence
    Opening,
    /// Standard analysis prompt: role name, topic, full context
    Analysis,
    /// Final synthesis prompt over the whole transcript
    Synthesis,
}

impl PromptVariant {
    /// Select the variant for the occurrence at `position` in a
    /// sequence of `len` roles
    ///
    /// The closer at the last position always synthesizes; a sequence of
    /// length one therefore synthesizes rather than opens. The opening
    /// variant only exists in taxonomies that enable it.
    pub fn for_occurrence(role: &Role, position: usize, len: usize, opening_step: bool) -> Self {
        if role.is_closer() && position + 1 == len {
            PromptVariant::Synthesis
        } else if role.is_closer() && position == 0 && opening_step {
            PromptVariant::Opening
        } else {
            PromptVariant::Analysis
        }
    }
}

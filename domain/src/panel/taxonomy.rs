//! Taxonomy - the category registry driving role sequencing
//!
//! A [`Taxonomy`] owns the role registry and the mapping from category
//! labels to ordered role sequences. Both are immutable once built;
//! [`TaxonomyBuilder::build`] validates the static configuration and is
//! the only way to construct one.

use crate::core::error::DomainError;
use crate::panel::role::Role;

/// A category's resolved execution plan for one round
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSequence<'a> {
    /// The category the sequence belongs to (the default category when
    /// the requested label was not recognized)
    pub category: &'a str,
    /// Role occurrences in execution order
    pub roles: &'a [Role],
    /// Whether the requested label matched a registered category
    pub matched: bool,
}

struct CategorySequence {
    label: String,
    roles: Vec<Role>,
}

/// Immutable classification taxonomy (Aggregate Root)
///
/// Holds the full panel of roles plus one ordered role sequence per
/// category label. Lookup of an unrecognized label degrades to the
/// default category's sequence rather than failing: classifier output is
/// advisory, and a noisy label must never abort a round.
pub struct Taxonomy {
    id: String,
    roles: Vec<Role>,
    sequences: Vec<CategorySequence>,
    default_category: String,
    opening_step: bool,
}

impl Taxonomy {
    /// Identifier of this taxonomy (e.g. `"hats"`)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All registered roles, in registration order
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Look up a role by name
    pub fn role(&self, name: &str) -> Result<&Role, DomainError> {
        self.roles
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| DomainError::UnknownRole(name.to_string()))
    }

    /// The single closing/synthesis role
    pub fn closer(&self) -> &Role {
        // Validated by the builder: exactly one closer exists.
        self.roles
            .iter()
            .find(|r| r.is_closer())
            .expect("taxonomy built without a closer")
    }

    /// Category labels in registration order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.label.as_str())
    }

    /// The category used when a label is not recognized
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Whether the closer at position 0 receives a stage-setting prompt
    pub fn opening_step(&self) -> bool {
        self.opening_step
    }

    /// Resolve a classifier label to its execution sequence
    ///
    /// The label is trimmed and matched exactly against registered
    /// category labels. Anything else, including near-miss labels and
    /// free-form classifier chatter, resolves to the default category's
    /// sequence with `matched == false`.
    pub fn sequence_for(&self, label: &str) -> ResolvedSequence<'_> {
        let trimmed = label.trim();
        match self.sequences.iter().find(|s| s.label == trimmed) {
            Some(seq) => ResolvedSequence {
                category: &seq.label,
                roles: &seq.roles,
                matched: true,
            },
            None => {
                let seq = self
                    .sequences
                    .iter()
                    .find(|s| s.label == self.default_category)
                    .expect("taxonomy built without a default sequence");
                ResolvedSequence {
                    category: &seq.label,
                    roles: &seq.roles,
                    matched: false,
                }
            }
        }
    }
}

/// Builder validating the static taxonomy configuration
pub struct TaxonomyBuilder {
    id: String,
    roles: Vec<Role>,
    sequences: Vec<(String, Vec<String>)>,
    default_category: Option<String>,
    opening_step: bool,
}

impl TaxonomyBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            roles: Vec::new(),
            sequences: Vec::new(),
            default_category: None,
            opening_step: false,
        }
    }

    /// Register a role
    pub fn role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Register a category and its role sequence, by role name
    pub fn category(mut self, label: impl Into<String>, role_names: &[&str]) -> Self {
        self.sequences.push((
            label.into(),
            role_names.iter().map(|n| n.to_string()).collect(),
        ));
        self
    }

    /// Set the fallback category for unrecognized labels
    pub fn default_category(mut self, label: impl Into<String>) -> Self {
        self.default_category = Some(label.into());
        self
    }

    /// Enable the stage-setting prompt for a closer at position 0
    pub fn with_opening_step(mut self) -> Self {
        self.opening_step = true;
        self
    }

    /// Validate and build the taxonomy
    ///
    /// These are programming-time invariants of the static catalog, not
    /// runtime conditions; a violation means the catalog itself is wrong.
    pub fn build(self) -> Result<Taxonomy, DomainError> {
        if self.roles.is_empty() {
            return Err(DomainError::configuration("no roles registered"));
        }

        for (i, role) in self.roles.iter().enumerate() {
            if self.roles[..i].iter().any(|r| r.name() == role.name()) {
                return Err(DomainError::configuration(format!(
                    "duplicate role name '{}'",
                    role.name()
                )));
            }
        }

        let closers = self.roles.iter().filter(|r| r.is_closer()).count();
        if closers != 1 {
            return Err(DomainError::configuration(format!(
                "expected exactly one closing role, found {}",
                closers
            )));
        }

        if self.sequences.is_empty() {
            return Err(DomainError::configuration("no categories registered"));
        }

        let mut sequences = Vec::with_capacity(self.sequences.len());
        for (label, names) in &self.sequences {
            if sequences
                .iter()
                .any(|s: &CategorySequence| &s.label == label)
            {
                return Err(DomainError::configuration(format!(
                    "duplicate category '{}'",
                    label
                )));
            }
            if names.is_empty() {
                return Err(DomainError::configuration(format!(
                    "category '{}' has an empty sequence",
                    label
                )));
            }
            let mut roles = Vec::with_capacity(names.len());
            for name in names {
                let role = self
                    .roles
                    .iter()
                    .find(|r| r.name() == name.as_str())
                    .ok_or_else(|| {
                        DomainError::configuration(format!(
                            "category '{}' references unknown role '{}'",
                            label, name
                        ))
                    })?;
                roles.push(role.clone());
            }
            sequences.push(CategorySequence {
                label: label.clone(),
                roles,
            });
        }

        let default_category = self
            .default_category
            .ok_or_else(|| DomainError::configuration("no default category set"))?;
        if !sequences.iter().any(|s| s.label == default_category) {
            return Err(DomainError::configuration(format!(
                "default category '{}' is not registered",
                default_category
            )));
        }

        Ok(Taxonomy {
            id: self.id,
            roles: self.roles,
            sequences,
            default_category,
            opening_step: self.opening_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Taxonomy {
        TaxonomyBuilder::new("test")
            .role(Role::new("Scout", "Collect facts."))
            .role(Role::new("Critic", "Find flaws."))
            .role(Role::closer("Chair", "Summarize."))
            .category("Review", &["Scout", "Critic", "Chair"])
            .category("Deep Dive", &["Scout", "Critic", "Scout", "Chair"])
            .default_category("Review")
            .build()
            .unwrap()
    }

    #[test]
    fn test_sequence_for_known_category() {
        let taxonomy = sample();
        let resolved = taxonomy.sequence_for("Deep Dive");
        assert!(resolved.matched);
        assert_eq!(resolved.category, "Deep Dive");
        assert_eq!(resolved.roles.len(), 4);
        assert_eq!(resolved.roles[2].name(), "Scout");
    }

    #[test]
    fn test_sequence_for_trims_whitespace() {
        let taxonomy = sample();
        let resolved = taxonomy.sequence_for("  Review \n");
        assert!(resolved.matched);
        assert_eq!(resolved.category, "Review");
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        let taxonomy = sample();
        let resolved = taxonomy.sequence_for("Unknown Category Xyz");
        assert!(!resolved.matched);
        assert_eq!(resolved.category, "Review");
        assert_eq!(resolved.roles.len(), 3);
    }

    #[test]
    fn test_case_differences_are_not_matched() {
        let taxonomy = sample();
        let resolved = taxonomy.sequence_for("review");
        assert!(!resolved.matched);
        assert_eq!(resolved.category, "Review");
    }

    #[test]
    fn test_role_lookup() {
        let taxonomy = sample();
        assert_eq!(taxonomy.role("Critic").unwrap().name(), "Critic");
        assert!(matches!(
            taxonomy.role("Ghost"),
            Err(DomainError::UnknownRole(_))
        ));
    }

    #[test]
    fn test_closer_lookup() {
        let taxonomy = sample();
        assert_eq!(taxonomy.closer().name(), "Chair");
    }

    #[test]
    fn test_build_rejects_unknown_role_reference() {
        let result = TaxonomyBuilder::new("test")
            .role(Role::closer("Chair", "Summarize."))
            .category("Review", &["Ghost", "Chair"])
            .default_category("Review")
            .build();
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_build_rejects_missing_closer() {
        let result = TaxonomyBuilder::new("test")
            .role(Role::new("Scout", "Collect facts."))
            .category("Review", &["Scout"])
            .default_category("Review")
            .build();
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_build_rejects_two_closers() {
        let result = TaxonomyBuilder::new("test")
            .role(Role::closer("Chair", "Summarize."))
            .role(Role::closer("Vice Chair", "Also summarize."))
            .category("Review", &["Chair"])
            .default_category("Review")
            .build();
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_build_rejects_unregistered_default() {
        let result = TaxonomyBuilder::new("test")
            .role(Role::closer("Chair", "Summarize."))
            .category("Review", &["Chair"])
            .default_category("Missing")
            .build();
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_build_rejects_empty_sequence() {
        let result = TaxonomyBuilder::new("test")
            .role(Role::closer("Chair", "Summarize."))
            .category("Review", &[])
            .default_category("Review")
            .build();
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }
}

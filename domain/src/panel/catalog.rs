//! Built-in taxonomy catalog
//!
//! Two independent taxonomies ship with roundtable: a general
//! problem-solving panel modeled on the six thinking hats, and a software
//! panel of developer lenses. Each defines 8 categories, a sequence per
//! category, and a default sequence for unrecognized labels.

use crate::panel::role::Role;
use crate::panel::taxonomy::{Taxonomy, TaxonomyBuilder};

/// Identifier of the thinking-hats taxonomy
pub const HATS: &str = "hats";

/// Identifier of the developer-lenses taxonomy
pub const LENSES: &str = "lenses";

/// Look up a built-in taxonomy by identifier
pub fn by_id(id: &str) -> Option<Taxonomy> {
    match id {
        HATS => Some(thinking_hats()),
        LENSES => Some(dev_lenses()),
        _ => None,
    }
}

/// The general-purpose thinking-hats panel
///
/// The Blue Hat closes every sequence; it also opens some of them, so
/// the opening step is enabled.
pub fn thinking_hats() -> Taxonomy {
    TaxonomyBuilder::new(HATS)
        .role(Role::closer(
            "Blue Hat",
            "You are the Blue Hat, responsible for managing the thinking process and \
             synthesizing information. You always provide the final summary based on all \
             the input gathered so far; your say is the final answer that will be \
             returned to the user.",
        ))
        .role(Role::new(
            "White Hat",
            "You are the White Hat, focused on gathering facts and information. You \
             should provide neutral and objective data without interpretation.",
        ))
        .role(Role::new(
            "Red Hat",
            "You are the Red Hat, expressing emotions, feelings, and intuitions. You \
             should provide gut reactions without justification.",
        ))
        .role(Role::new(
            "Black Hat",
            "You are the Black Hat, identifying risks, difficulties, and potential \
             problems. You should be cautious and defensive in your thinking.",
        ))
        .role(Role::new(
            "Yellow Hat",
            "You are the Yellow Hat, focusing on benefits and seeking harmony. You \
             should be optimistic and think constructively about the subject.",
        ))
        .role(Role::new(
            "Green Hat",
            "You are the Green Hat, generating new ideas and possibilities. You should \
             think creatively and propose innovative solutions.",
        ))
        .category("Initial Ideas", &["White Hat", "Green Hat", "Blue Hat"])
        .category(
            "Choosing between alternatives",
            &[
                "White Hat",
                "Green Hat",
                "Yellow Hat",
                "Black Hat",
                "Red Hat",
                "Blue Hat",
            ],
        )
        .category(
            "Identifying Solutions",
            &["White Hat", "Black Hat", "Green Hat", "Blue Hat"],
        )
        .category("Quick Feedback", &["Black Hat", "Green Hat", "Blue Hat"])
        .category(
            "Strategic Planning",
            &[
                "Yellow Hat",
                "Black Hat",
                "White Hat",
                "Blue Hat",
                "Green Hat",
                "Blue Hat",
            ],
        )
        .category(
            "Process Improvement",
            &[
                "White Hat",
                "White Hat",
                "Yellow Hat",
                "Black Hat",
                "Green Hat",
                "Red Hat",
                "Blue Hat",
            ],
        )
        .category(
            "Solving Problems",
            &[
                "White Hat",
                "Green Hat",
                "Red Hat",
                "Yellow Hat",
                "Black Hat",
                "Green Hat",
                "Blue Hat",
            ],
        )
        .category(
            "Performance Review",
            &[
                "Red Hat",
                "White Hat",
                "Yellow Hat",
                "Black Hat",
                "Green Hat",
                "Blue Hat",
            ],
        )
        .default_category("Solving Problems")
        .with_opening_step()
        .build()
        .expect("built-in hats taxonomy must validate")
}

/// The software-development panel of lenses
///
/// The Architecture Lens closes every sequence and never opens one, so
/// the opening step stays disabled.
pub fn dev_lenses() -> Taxonomy {
    TaxonomyBuilder::new(LENSES)
        .role(Role::closer(
            "Architecture Lens",
            "You are the Architecture Lens, responsible for considering the overall \
             structure and design patterns. You always provide the final answer based \
             on all the input gathered so far, responding to the user as if you are the \
             only assistant: your say is the final answer that will be returned to the \
             user.",
        ))
        .role(Role::new(
            "Functional Lens",
            "You are the Functional Lens, focused on core functionality and \
             requirements. You should provide neutral and objective information about \
             what the software needs to do.",
        ))
        .role(Role::new(
            "User Experience Lens",
            "You are the User Experience Lens, expressing considerations about the \
             end-user's perspective. You should provide insights on how intuitive and \
             user-friendly the software is.",
        ))
        .role(Role::new(
            "Security Lens",
            "You are the Security Lens, identifying potential vulnerabilities and \
             risks. You should be cautious and defensive in your thinking about what \
             could go wrong and how to prevent it.",
        ))
        .role(Role::new(
            "Performance Lens",
            "You are the Performance Lens, focusing on efficiency and speed \
             optimization. You should be optimistic and think constructively about how \
             to make the software perform better.",
        ))
        .role(Role::new(
            "Maintenance Lens",
            "You are the Maintenance Lens, generating ideas about code readability, \
             scalability, and long-term maintainability. You should think creatively \
             and propose innovative solutions for easier updates and expansions in the \
             future.",
        ))
        .category(
            "Initial Design",
            &[
                "Functional Lens",
                "Architecture Lens",
                "User Experience Lens",
                "Architecture Lens",
            ],
        )
        .category(
            "Feature Implementation",
            &[
                "Functional Lens",
                "Architecture Lens",
                "Performance Lens",
                "Security Lens",
                "Maintenance Lens",
                "Architecture Lens",
            ],
        )
        .category(
            "Code Review",
            &[
                "Maintenance Lens",
                "Performance Lens",
                "Security Lens",
                "Functional Lens",
                "Architecture Lens",
            ],
        )
        .category(
            "Performance Optimization",
            &["Performance Lens", "Functional Lens", "Architecture Lens"],
        )
        .category(
            "Security Audit",
            &["Security Lens", "Functional Lens", "Architecture Lens"],
        )
        .category(
            "Refactoring",
            &[
                "Maintenance Lens",
                "Performance Lens",
                "Functional Lens",
                "Architecture Lens",
            ],
        )
        .category(
            "Bug Fixing",
            &[
                "Functional Lens",
                "Security Lens",
                "Performance Lens",
                "Maintenance Lens",
                "Architecture Lens",
            ],
        )
        .category(
            "User Interface Improvement",
            &[
                "User Experience Lens",
                "Functional Lens",
                "Performance Lens",
                "Architecture Lens",
            ],
        )
        .default_category("Bug Fixing")
        .build()
        .expect("built-in lenses taxonomy must validate")
}

//! Panel domain: roles and the taxonomy that sequences them

pub mod catalog;
pub mod role;
pub mod taxonomy;

pub use role::Role;
pub use taxonomy::{ResolvedSequence, Taxonomy, TaxonomyBuilder};

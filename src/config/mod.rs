//! Configuration module
//!
//! This module contains the run configuration and the substitution rule.

mod model;
mod rule;

pub use model::RenameConfig;
pub use rule::SubstitutionRule;

//! Grammar validation engine.

pub mod rules;

pub use rules::{Rejection, Rule, RuleSet};

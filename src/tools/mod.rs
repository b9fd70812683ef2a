//! Numeric tools: dichotomy solver and the regularized incomplete beta relation.

pub mod dichotomy;
pub mod irbeta;

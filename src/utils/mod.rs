//! Test data providers.

pub mod sphere;

//! The distance oracle.
//!
//! Estimators only need the order a distance induces on points: smaller means more similar.
//! Any function returning non negative values fits, Euclidean distance is the reference choice.
//! Distances are restricted to the first dim coordinates of points.

use num_traits::Float;

/// A distance like comparator between points, restricted to the first dim coordinates.
/// Callers guarantee dim <= p.len() and dim <= q.len().
pub trait Distance<F>: Send + Sync {
    fn eval(&self, p: &[F], q: &[F], dim: usize) -> F;
}

/// Euclidean distance
#[derive(Clone, Copy, Debug, Default)]
pub struct DistL2;

impl<F: Float + Send + Sync> Distance<F> for DistL2 {
    fn eval(&self, p: &[F], q: &[F], dim: usize) -> F {
        p[..dim]
            .iter()
            .zip(q[..dim].iter())
            .fold(F::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
            .sqrt()
    }
}

/// Manhattan distance
#[derive(Clone, Copy, Debug, Default)]
pub struct DistL1;

impl<F: Float + Send + Sync> Distance<F> for DistL1 {
    fn eval(&self, p: &[F], q: &[F], dim: usize) -> F {
        p[..dim]
            .iter()
            .zip(q[..dim].iter())
            .fold(F::zero(), |acc, (&a, &b)| acc + (a - b).abs())
    }
}

// end of mod tests

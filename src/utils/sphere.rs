//! Generation of test data: points uniformly distributed on a unit sphere.
//!
//! A sphere of manifold dimension d lives in d+1 coordinates.
//! Points are obtained by normalizing standard gaussian vectors, the distribution of which
//! is invariant by rotation.

use anyhow::anyhow;

use rand_distr::{Distribution, StandardNormal};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Returns nb_points points uniformly sampled on the sphere S^manifold_dim, of ambient dimension manifold_dim+1.
/// The seed makes generation reproducible.
pub fn generate_on_sphere(
    manifold_dim: usize,
    nb_points: usize,
    seed: u64,
) -> Result<Vec<Vec<f64>>, anyhow::Error> {
    if manifold_dim == 0 {
        return Err(anyhow!("generate_on_sphere : manifold dimension must be >= 1"));
    }
    let ambient_dim = manifold_dim + 1;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut data = Vec::<Vec<f64>>::with_capacity(nb_points);
    while data.len() < nb_points {
        let v: Vec<f64> = (0..ambient_dim)
            .map(|_| StandardNormal.sample(&mut rng))
            .collect();
        let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        // a null vector has no direction, draw again
        if norm > 0. {
            data.push(v.into_iter().map(|x| x / norm).collect());
        }
    }
    log::debug!(
        "generate_on_sphere : {} points on sphere of dimension {}",
        nb_points,
        manifold_dim
    );
    Ok(data)
} // end of generate_on_sphere

// end of mod tests

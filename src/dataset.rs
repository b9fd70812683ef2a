//! A validated point set.
//!
//! Points are identified by their index in the dataset. This index is the only
//! identity used in ball and intersection computations, two distinct points with equal
//! coordinates are never merged.

use num_traits::Float;

use crate::error::DimError;

/// keep a node index compatible with Vec indexing
pub type NodeIdx = usize;

/// An ordered finite sequence of points of the same length (the ambient dimension).
#[derive(Clone, Debug)]
pub struct Dataset<F> {
    points: Vec<Vec<F>>,
    ambient_dim: usize,
}

impl<F> Dataset<F>
where
    F: Float,
{
    /// Checks that all points have the same length and finite coordinates.
    pub fn new(points: Vec<Vec<F>>) -> Result<Self, DimError> {
        let ambient_dim = points.first().map(|p| p.len()).unwrap_or(0);
        for (node, point) in points.iter().enumerate() {
            if point.len() != ambient_dim {
                return Err(DimError::RaggedPoint {
                    node,
                    len: point.len(),
                    expected: ambient_dim,
                });
            }
            if let Some(coord) = point.iter().position(|x| !x.is_finite()) {
                return Err(DimError::NonFinite { node, coord });
            }
        }
        Ok(Dataset {
            points,
            ambient_dim,
        })
    } // end of new

    pub fn get_nb_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// length of each point
    pub fn get_ambient_dim(&self) -> usize {
        self.ambient_dim
    }

    pub fn get_point(&self, node: NodeIdx) -> &[F] {
        &self.points[node]
    }

    pub fn get_points(&self) -> &[Vec<F>] {
        &self.points
    }

    /// checks dim against points length
    pub fn check_dim(&self, dim: usize) -> Result<(), DimError> {
        if dim > self.ambient_dim {
            return Err(DimError::DimensionTooLarge {
                dim,
                point_len: self.ambient_dim,
            });
        }
        Ok(())
    }
} // end of impl Dataset

/// The anchors used for averaging: indexes stride-1, 2*stride-1 ... below nb_points.
/// With stride = 10 we get {9, 19, 29, ...}
pub fn sample_anchors(nb_points: usize, stride: usize) -> Vec<NodeIdx> {
    if stride == 0 {
        return Vec::new();
    }
    (stride - 1..nb_points).step_by(stride).collect()
} // end of sample_anchors

// end of mod tests

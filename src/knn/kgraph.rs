//! A minimal k-nn graph: for each point of a dataset its knbn+1 nearest points (itself included).
//!
//! The graph is built by brute force, one parallel task by point, so the cost is
//! O(n² log(n)). It is meant for datasets of a few thousands points.
//! The graph lives for the duration of an estimation and is dropped afterwards.

use num_traits::Float;

use rayon::prelude::*;

use super::distance::Distance;
use super::neighbours::{knn, NeighbourList};
use crate::dataset::{Dataset, NodeIdx};
use crate::error::DimError;

///
/// neighbours\[i\] contains the neighbour list of node i, sorted by increasing distance,
/// with i itself at position 0.
/// All node indexing is the dataset indexing.
///
#[derive(Clone)]
pub struct KGraph<F> {
    /// number of neighbours of each node, node itself excluded
    pub(crate) knbn: usize,
    /// number of coordinates used in distance computations
    pub(crate) dim: usize,
    pub(crate) neighbours: Vec<NeighbourList<F>>,
} // end of struct KGraph

impl<F> KGraph<F>
where
    F: Float + Send + Sync,
{
    /// computes the knbn+1 nearest neighbours of each point of data, using first dim coordinates.
    pub fn new<D>(
        data: &Dataset<F>,
        dim: usize,
        knbn: usize,
        distance: &D,
    ) -> Result<Self, DimError>
    where
        D: Distance<F>,
    {
        let nb_points = data.get_nb_points();
        log::debug!(
            "KGraph::new nb points : {}, dim : {}, knbn : {}",
            nb_points,
            dim,
            knbn
        );
        if knbn + 1 > nb_points {
            return Err(DimError::TooManyNeighbours {
                asked: knbn + 1,
                nb_points,
            });
        }
        data.check_dim(dim)?;
        //
        let neighbours = (0..nb_points)
            .into_par_iter()
            .map(|node| knn(node, data, dim, knbn, distance))
            .collect::<Result<Vec<NeighbourList<F>>, DimError>>()?;
        log::trace!("KGraph::new done");
        //
        Ok(KGraph {
            knbn,
            dim,
            neighbours,
        })
    } // end of new

    /// get number of nodes of graph
    pub fn get_nb_nodes(&self) -> usize {
        self.neighbours.len()
    }

    /// get number of neighbours of each node (node itself excluded)
    pub fn get_knbn(&self) -> usize {
        self.knbn
    }

    pub fn get_dim(&self) -> usize {
        self.dim
    }

    /// returns neighbour list of node
    pub fn get_neighbours(&self, node: NodeIdx) -> &NeighbourList<F> {
        &self.neighbours[node]
    }
} // end of impl KGraph

// end of mod tests

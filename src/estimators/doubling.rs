//! Doubling property estimator.
//!
//! If the volume of balls in the data grows as 2^d each time the radius doubles,
//! the ratio |ball of radius 1| / |ball of radius 2| is 2^-d.
//! Balls are counted in number of points of the k-nn graph, the ball of radius 1 has
//! knbn+1 points. We average the ratio over anchors and return -log2 of the mean.

use num_traits::Float;

use super::{average_over_anchors, check_preconditions, graph_anchors, DimEstimate};
use crate::dataset::{Dataset, NodeIdx};
use crate::error::DimError;
use crate::knn::distance::Distance;
use crate::knn::kgraph::KGraph;
use crate::params::EstimatorParams;

pub struct DoublingEstimator {
    params: EstimatorParams,
}

impl DoublingEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        DoublingEstimator { params }
    }

    pub fn get_params(&self) -> &EstimatorParams {
        &self.params
    }

    /// builds the k-nn graph of data and estimates dimension on it.
    pub fn estimate<F, D>(&self, data: &Dataset<F>, distance: &D) -> Result<DimEstimate, DimError>
    where
        F: Float + Send + Sync,
        D: Distance<F>,
    {
        let (dim, anchors) = check_preconditions(data, &self.params)?;
        let kgraph = KGraph::new(data, dim, self.params.knbn, distance)?;
        self.estimate_on_anchors(&kgraph, &anchors)
    } // end of estimate

    /// Estimation on an already built graph, so it can be shared with the capacity estimator.
    /// The graph knbn is used, params.knbn is ignored.
    pub fn estimate_with_graph<F>(&self, kgraph: &KGraph<F>) -> Result<DimEstimate, DimError>
    where
        F: Float + Send + Sync,
    {
        let anchors = graph_anchors(kgraph.get_nb_nodes(), &self.params)?;
        self.estimate_on_anchors(kgraph, &anchors)
    } // end of estimate_with_graph

    fn estimate_on_anchors<F>(
        &self,
        kgraph: &KGraph<F>,
        anchors: &[NodeIdx],
    ) -> Result<DimEstimate, DimError>
    where
        F: Float + Send + Sync,
    {
        let knbn = kgraph.get_knbn();
        let (mean_ratio, sigma) = average_over_anchors(anchors, |a| {
            let volume = kgraph.ball_volume_2(a);
            if volume == 0 {
                return Err(DimError::NumericDomain(format!(
                    "empty ball of radius 2 at node {}",
                    a
                )));
            }
            Ok((knbn + 1) as f64 / volume as f64)
        })?;
        if !(mean_ratio > 0.) {
            return Err(DimError::NumericDomain(format!(
                "mean ratio {} not positive",
                mean_ratio
            )));
        }
        let dimension = -mean_ratio.log2();
        log::debug!(
            "doubling estimator : nb anchors : {}, mean ratio : {:.3e}, sigma : {:.3e}, dimension : {:.3e}",
            anchors.len(),
            mean_ratio,
            sigma,
            dimension
        );
        //
        Ok(DimEstimate {
            dimension,
            mean_ratio,
            sigma,
            nb_anchors: anchors.len(),
            knbn,
        })
    } // end of estimate_on_anchors
} // end of impl DoublingEstimator

// end of mod tests

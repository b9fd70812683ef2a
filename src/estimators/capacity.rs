//! Capacity estimator.
//!
//! For an anchor a we look at the overlap between the ball of radius 1 of a and the ball
//! of radius 1 of each of its members, and keep the smallest overlap divided by knbn+1.
//! The mean of this ratio over anchors, L_CAP, is matched against
//!
//! ```text
//!   L_CAP = I_{3/4}((d+1)/2, 1/2)
//! ```
//!
//! which is solved for d by dichotomy on params.dim_bracket, \[0, 10\] by default.
//! If L_CAP is outside the range of the function on the bracket the estimation fails with
//! a convergence error carrying L_CAP.

use num_traits::Float;

use super::{average_over_anchors, check_preconditions, graph_anchors, DimEstimate};
use crate::dataset::{Dataset, NodeIdx};
use crate::error::DimError;
use crate::knn::distance::Distance;
use crate::knn::kgraph::KGraph;
use crate::params::EstimatorParams;
use crate::tools::dichotomy::Dichotomy;
use crate::tools::irbeta::invert_ir_beta_with;

pub struct CapacityEstimator {
    params: EstimatorParams,
}

impl CapacityEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        CapacityEstimator { params }
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

    /// Estimation on an already built graph, so it can be shared with the doubling estimator.
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
        let ball_size = (knbn + 1) as f64;
        let (l_cap, sigma) =
            average_over_anchors(anchors, |a| Ok(kgraph.min_intersection(a) as f64 / ball_size))?;
        log::debug!(
            "capacity estimator : nb anchors : {}, L_CAP : {:.3e}, sigma : {:.3e}",
            anchors.len(),
            l_cap,
            sigma
        );
        let solver = Dichotomy::new(self.params.tolerance, self.params.max_iter);
        let dimension = invert_ir_beta_with(l_cap, self.params.dim_bracket, &solver)?;
        //
        Ok(DimEstimate {
            dimension,
            mean_ratio: l_cap,
            sigma,
            nb_anchors: anchors.len(),
            knbn,
        })
    } // end of estimate_on_anchors
} // end of impl CapacityEstimator

// end of mod tests

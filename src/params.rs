//! Parameters driving the estimators.
//!
//! Both estimators work on the same k-nn graph and average a per point ratio over
//! the same deterministic subsample of the data, the *sample anchors*.
//! With an anchor stride s, anchors are the points of index s-1, 2s-1, 3s-1 ... (0-indexed)
//! so the default stride 10 gives anchors {9, 19, 29, ...}.
//! A dataset must contain at least s+1 points.
//!
//! The capacity estimator inverts a regularized incomplete beta relation by dichotomy
//! on a bracket of candidate dimensions. The bracket, the relative tolerance and the
//! iteration cap of the dichotomy are set here.
//!
//! Default values :
//!
//!  - knbn : 15
//!  - dim : None (all coordinates of points are used in distance computations)
//!  - anchor_stride : 10
//!  - tolerance : 1.E-6
//!  - max_iter : 200
//!  - dim_bracket : (0., 10.)

use crate::error::DimError;
use crate::tools::irbeta::DIM_BRACKET;

/// main parameters driving dimension estimation
#[derive(Clone, Copy, Debug)]
pub struct EstimatorParams {
    /// number of neighbours asked for each point (the point itself excluded). default 15
    pub knbn: usize,
    /// number of leading coordinates used in distance computations. None means all.
    pub dim: Option<usize>,
    /// one point every anchor_stride points is used for averaging. default 10
    pub anchor_stride: usize,
    /// relative tolerance of dichotomy, default 1.E-6
    pub tolerance: f64,
    /// iteration cap of dichotomy, default 200
    pub max_iter: usize,
    /// range of dimension searched by the capacity estimator, default (0., 10.)
    pub dim_bracket: (f64, f64),
} // end of EstimatorParams

impl Default for EstimatorParams {
    fn default() -> Self {
        EstimatorParams {
            knbn: 15,
            dim: None,
            anchor_stride: 10,
            tolerance: 1.0E-6,
            max_iter: 200,
            dim_bracket: DIM_BRACKET,
        }
    }
}

impl EstimatorParams {
    /// parameters with knbn neighbours and distance restricted to the first dim coordinates.
    pub fn new(dim: usize, knbn: usize) -> Self {
        EstimatorParams {
            knbn,
            dim: Some(dim),
            ..Default::default()
        }
    }

    pub fn log(&self) {
        log::info!("EstimatorParams");
        log::info!("\t nb neighbours : {}", self.knbn);
        match self.dim {
            Some(dim) => log::info!("\t distance on first {} coordinates", dim),
            None => log::info!("\t distance on all coordinates"),
        }
        log::info!("\t anchor stride : {}", self.anchor_stride);
        log::info!("\t dichotomy tolerance : {:.2e}", self.tolerance);
        log::info!("\t dichotomy max iterations : {}", self.max_iter);
        log::info!(
            "\t dimension bracket : [{}, {}]",
            self.dim_bracket.0,
            self.dim_bracket.1
        );
    }

    /// sets the number of neighbours. Default to 15
    pub fn set_knbn(&mut self, knbn: usize) {
        self.knbn = knbn;
    }

    /// restricts distance to the first dim coordinates
    pub fn set_dim(&mut self, dim: usize) {
        self.dim = Some(dim);
    }

    /// sets the anchor stride. Default to 10
    pub fn set_anchor_stride(&mut self, stride: usize) {
        self.anchor_stride = stride;
    }

    /// sets relative tolerance and iteration cap of the dichotomy
    pub fn set_dichotomy(&mut self, tolerance: f64, max_iter: usize) {
        self.tolerance = tolerance;
        self.max_iter = max_iter;
    }

    pub fn set_dim_bracket(&mut self, low: f64, high: f64) {
        self.dim_bracket = (low, high);
    }

    /// minimal number of points a dataset must have to get one anchor
    pub fn get_min_nb_points(&self) -> usize {
        self.anchor_stride + 1
    }

    /// checks values that do not depend on data
    pub fn check(&self) -> Result<(), DimError> {
        if self.anchor_stride == 0 {
            return Err(DimError::InvalidParameter(String::from(
                "anchor stride must be >= 1",
            )));
        }
        if !(self.tolerance > 0.) {
            return Err(DimError::InvalidParameter(format!(
                "tolerance must be > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iter == 0 {
            return Err(DimError::InvalidParameter(String::from(
                "max_iter must be >= 1",
            )));
        }
        let (low, high) = self.dim_bracket;
        if !(low >= 0. && low < high && high.is_finite()) {
            return Err(DimError::InvalidParameter(format!(
                "bad dimension bracket [{}, {}]",
                low, high
            )));
        }
        Ok(())
    } // end of check
} // end of impl EstimatorParams

// end of mod tests

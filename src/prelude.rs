//! Gathers the public api.

pub use crate::dataset::{sample_anchors, Dataset, NodeIdx};
pub use crate::error::{DimError, ErrorKind};
pub use crate::params::EstimatorParams;

pub use crate::knn::distance::{DistL1, DistL2, Distance};
pub use crate::knn::kgraph::KGraph;
pub use crate::knn::neighbours::{knn, NeighbourList, OutEdge};

pub use crate::estimators::{ecap, edp, CapacityEstimator, DimEstimate, DoublingEstimator};

pub use crate::tools::irbeta::{invert_ir_beta, ir_beta};

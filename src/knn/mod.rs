//! Everything related to nearest neighbours: the distance oracle, k-nn ranking,
//! the k-nn graph [KGraph](kgraph::KGraph) and balls in it.

pub mod ball;
pub mod distance;
pub mod kgraph;
pub mod neighbours;

pub use kgraph::KGraph;
pub use neighbours::knn;

//! Estimation of the intrinsic dimension of a point set from relative orderings only.
//!
//! Only the order induced by a distance is used (which points are nearer to which),
//! never the distance values. Two estimators are provided:
//!  - the doubling property estimator [edp](estimators::edp),
//!  - the capacity estimator [ecap](estimators::ecap).
//!
//! Both rely on the k-nn graph [KGraph](knn::KGraph) of the data.
//! Logging uses the crates **log** and **env_logger**, set RUST_LOG=rankdim=DEBUG
//! in your environment to get a summary of each estimation.

// for logging (debug mostly, switched at compile time in cargo.toml)

use lazy_static::lazy_static;

pub mod dataset;
pub mod error;
pub mod estimators;
pub mod knn;
pub mod params;
pub mod prelude;
pub mod tools;
pub mod utils;

lazy_static! {
    static ref LOG: u64 = init_log();
}

// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    log::info!("\n ************** initializing logger *****************\n");
    1
}

/// installs env_logger once, further calls do nothing.
pub fn init_logger() {
    lazy_static::initialize(&LOG);
}

// end of tests

//! The special function linking expected overlap of neighbourhoods to dimension.
//!
//! For a candidate dimension d we use the regularized incomplete beta function
//!
//! ```text
//!   IRBeta(d) = I_x((d+1)/2, 1/2)   with x = 3/4
//! ```
//!
//! It is decreasing in d, from 2/3 at d = 0 to about 0.082 at d = 10.
//! The capacity estimator inverts it by dichotomy.

use statrs::function::beta::checked_beta_reg;

use super::dichotomy::Dichotomy;
use crate::error::DimError;

/// the fixed argument of the regularized incomplete beta function
pub const IRBETA_X: f64 = 0.75;

/// the fixed second shape parameter
pub const IRBETA_BETA: f64 = 0.5;

/// default bracket for dimension search
pub const DIM_BRACKET: (f64, f64) = (0., 10.);

/// evaluates I_{0.75}((d+1)/2, 0.5)
pub fn ir_beta(d: f64) -> Result<f64, DimError> {
    let alpha = 0.5 * (d + 1.);
    checked_beta_reg(alpha, IRBETA_BETA, IRBETA_X)
        .map_err(|e| DimError::NumericDomain(format!("ir_beta at d = {} : {}", d, e)))
} // end of ir_beta

/// Returns d in \[0, 10\] such that ir_beta(d) = target, with default tolerance and iteration cap.
pub fn invert_ir_beta(target: f64) -> Result<f64, DimError> {
    invert_ir_beta_with(target, DIM_BRACKET, &Dichotomy::default())
}

/// Returns d in bracket such that ir_beta(d) = target.
pub fn invert_ir_beta_with(
    target: f64,
    bracket: (f64, f64),
    solver: &Dichotomy,
) -> Result<f64, DimError> {
    let d = solver.solve(ir_beta, bracket.0, bracket.1, target)?;
    log::debug!("invert_ir_beta target : {:.6e} , d : {:.6e}", target, d);
    Ok(d)
} // end of invert_ir_beta_with

// end of mod tests

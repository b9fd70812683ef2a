//! dichotomy search for monotonous function

use crate::error::DimError;

/// Bisection parameters: the search stops when the bracket width is below
/// tolerance * max(1, |middle|) or after max_iter halvings.
#[derive(Clone, Copy, Debug)]
pub struct Dichotomy {
    tolerance: f64,
    max_iter: usize,
}

impl Default for Dichotomy {
    fn default() -> Self {
        Dichotomy {
            tolerance: 1.0E-6,
            max_iter: 200,
        }
    }
}

impl Dichotomy {
    pub fn new(tolerance: f64, max_iter: usize) -> Self {
        Dichotomy {
            tolerance,
            max_iter,
        }
    }

    /// Search a root of f(x) = target between lower_r and upper_r.
    /// f must be monotonous on the bracket, its direction is read from the end points.
    ///
    /// Fails with [DimError::NoSignChange] if target is not between f(lower_r) and f(upper_r),
    /// with [DimError::IterationCap] if tolerance is not reached after max_iter steps.
    pub fn solve<F>(&self, f: F, lower_r: f64, upper_r: f64, target: f64) -> Result<f64, DimError>
    where
        F: Fn(f64) -> Result<f64, DimError>,
    {
        if !(lower_r < upper_r) {
            return Err(DimError::InvalidParameter(format!(
                "dichotomy failure low {} not less than upper {}",
                lower_r, upper_r
            )));
        }
        let f_low = f(lower_r)?;
        let f_upper = f(upper_r)?;
        let delta_low = f_low - target;
        let delta_upper = f_upper - target;
        if delta_low.is_nan() || delta_upper.is_nan() {
            return Err(DimError::NumericDomain(format!(
                "dichotomy got NaN at bracket ends for target {}",
                target
            )));
        }
        if delta_low == 0. {
            return Ok(lower_r);
        }
        if delta_upper == 0. {
            return Ok(upper_r);
        }
        if delta_low.signum() == delta_upper.signum() {
            return Err(DimError::NoSignChange {
                target,
                low_value: f_low,
                high_value: f_upper,
            });
        }
        // target in range, proceed keeping f(lower)-target with the sign of delta_low
        let mut lower = lower_r;
        let mut upper = upper_r;
        let mut nbiter = 0;
        while nbiter < self.max_iter {
            let middle = 0.5 * (lower + upper);
            let delta = f(middle)? - target;
            if delta == 0. {
                log::trace!("dichotomy exact root {:.6e} after {} iterations", middle, nbiter);
                return Ok(middle);
            }
            if delta.signum() == delta_low.signum() {
                lower = middle;
            } else {
                upper = middle;
            }
            nbiter += 1;
            let middle = 0.5 * (lower + upper);
            if upper - lower <= self.tolerance * middle.abs().max(1.) {
                log::trace!("dichotomy root {:.6e} after {} iterations", middle, nbiter);
                return Ok(middle);
            }
        } // end of while
        Err(DimError::IterationCap {
            target,
            nb_iter: nbiter,
        })
    } // end of solve
} // end of impl Dichotomy

//======================================================================

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_dichotomy_inc() {
        let f = |x: f64| Ok(x * x);
        //
        let beta = Dichotomy::default().solve(f, 0., 5., 2.).unwrap();
        println!("beta : {}", beta);
        assert!((beta - 2.0f64.sqrt()).abs() < 1.0E-5);
    } // test_dichotomy_inc

    #[test]
    fn test_dichotomy_dec() {
        let f = |x: f64| Ok(1.0f64 / (x * x));
        //
        let beta = Dichotomy::default().solve(f, 0.2, 5., 1. / 2.).unwrap();
        println!("beta : {}", beta);
        assert!((beta - 2.0f64.sqrt()).abs() < 1.0E-5);
    } // test_dichotomy_dec

    #[test]
    fn test_dichotomy_bracket_end() {
        let f = |x: f64| Ok(2. * x);
        assert_eq!(Dichotomy::default().solve(f, 0., 1., 0.), Ok(0.));
        assert_eq!(Dichotomy::default().solve(f, 0., 1., 2.), Ok(1.));
    }

    #[test]
    fn test_dichotomy_out_of_range() {
        let f = |x: f64| Ok(x * x);
        let res = Dichotomy::default().solve(f, 0., 2., 5.);
        assert_eq!(
            res,
            Err(DimError::NoSignChange {
                target: 5.,
                low_value: 0.,
                high_value: 4.
            })
        );
    }

    #[test]
    fn test_dichotomy_iteration_cap() {
        let f = |x: f64| Ok(x);
        let res = Dichotomy::new(1.0E-12, 5).solve(f, 0., 1., 0.3);
        assert_eq!(
            res,
            Err(DimError::IterationCap {
                target: 0.3,
                nb_iter: 5
            })
        );
    }

    #[test]
    fn test_dichotomy_bad_bracket() {
        let f = |x: f64| Ok(x);
        assert!(Dichotomy::default().solve(f, 1., 1., 0.5).is_err());
    }
} // end of mod tests

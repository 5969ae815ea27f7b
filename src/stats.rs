//! Chi-square primitives shared across the engine
//!
//! Every test statistic handled here follows a 1-degree-of-freedom
//! chi-square distribution under the null.

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Largest 1-df chi-square statistic with a representable p-value; the
/// survival function underflows to zero in f64 just past this point.
pub const MAX_CHI_SQ_1DF: f64 = 1488.0;

/// P-value of a 1-df chi-square statistic (survival function).
pub fn chi_sq_p(chi_sq: f64) -> f64 {
    debug_assert!(chi_sq >= 0.0);
    let dist = ChiSquared::new(1.0).unwrap();
    dist.sf(chi_sq)
}

/// Chi-square statistic (1 df) whose survival p-value is `p`.
///
/// At p = 0 the true inverse is unbounded; the saturated maximum
/// [`MAX_CHI_SQ_1DF`] is returned instead, and p-values too small for the
/// inversion to resolve saturate the same way.
pub fn inverse_chi_sq_p(p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    if p <= 0.0 {
        return MAX_CHI_SQ_1DF;
    }
    if p >= 1.0 {
        return 0.0;
    }
    let dist = ChiSquared::new(1.0).unwrap();
    dist.inverse_cdf(1.0 - p).min(MAX_CHI_SQ_1DF)
}

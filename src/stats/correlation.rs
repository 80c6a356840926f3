//! Rank correlation.
//!
//! Provides the tie-corrected Kendall coefficient (tau-b) used to score
//! monotonic association between two gene abundance series.

use std::cmp::Ordering;

use thiserror::Error;

/// Precondition failures for paired statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("correlation: x and y must have the same length ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("correlation: need at least 2 observations")]
    TooFewObservations,
}

/// Kendall rank-correlation coefficient (tau-b) between `x` and `y`.
///
/// Tie-corrected:
///
/// ```text
/// tau_b = (C - D) / sqrt((n0 - Tx) * (n0 - Ty))
/// ```
///
/// where `C`/`D` count concordant/discordant pairs, `n0 = n(n-1)/2`, and
/// `Tx`/`Ty` count pairs tied on x resp. y.  Returns NaN when either series
/// is constant (the coefficient is undefined there).
pub fn kendall_tau(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    validate_paired(x, y)?;

    let n = x.len();
    let mut concordant = 0i64;
    let mut discordant = 0i64;
    let mut tied_x = 0i64;
    let mut tied_y = 0i64;

    // O(n²) pair scan; group sizes are tiny.
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i].total_cmp(&x[j]);
            let dy = y[i].total_cmp(&y[j]);
            match (dx, dy) {
                (Ordering::Equal, Ordering::Equal) => {
                    tied_x += 1;
                    tied_y += 1;
                }
                (Ordering::Equal, _) => tied_x += 1,
                (_, Ordering::Equal) => tied_y += 1,
                (a, b) if a == b => concordant += 1,
                _ => discordant += 1,
            }
        }
    }

    let n0 = (n * (n - 1) / 2) as i64;
    let denom = (((n0 - tied_x) * (n0 - tied_y)) as f64).sqrt();
    if denom == 0.0 {
        return Ok(f64::NAN);
    }
    Ok((concordant - discordant) as f64 / denom)
}

fn validate_paired(x: &[f64], y: &[f64]) -> Result<(), StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::TooFewObservations);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn perfectly_concordant_series_score_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_close(kendall_tau(&x, &y).unwrap(), 1.0);
    }

    #[test]
    fn perfectly_discordant_series_score_minus_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [9.0, 7.0, 5.0, 3.0];
        assert_close(kendall_tau(&x, &y).unwrap(), -1.0);
    }

    #[test]
    fn mixed_ordering_matches_hand_count() {
        // y has 3 inverted pairs out of 10: tau = (7 - 3) / 10.
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [3.0, 1.0, 2.0, 5.0, 4.0];
        assert_close(kendall_tau(&x, &y).unwrap(), 0.4);
    }

    #[test]
    fn ties_are_corrected() {
        // One tied pair in x: tau_b = 5 / sqrt(5 * 6).
        let x = [1.0, 1.0, 2.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_close(kendall_tau(&x, &y).unwrap(), 5.0 / 30.0_f64.sqrt());
    }

    #[test]
    fn constant_series_yield_nan() {
        let x = [2.0, 2.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        assert!(kendall_tau(&x, &y).unwrap().is_nan());
    }

    #[test]
    fn coefficient_stays_in_range() {
        let x = [0.3, 1.7, 0.2, 4.1, 2.2, 0.9];
        let y = [5.0, 0.1, 3.3, 3.3, 1.8, 2.4];
        let tau = kendall_tau(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&tau));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = kendall_tau(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::LengthMismatch { x: 2, y: 1 });
    }

    #[test]
    fn single_observation_is_an_error() {
        let err = kendall_tau(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::TooFewObservations);
    }
}

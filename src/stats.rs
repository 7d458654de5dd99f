//! Statistical routines for proportion estimates and comparison
//!
//! Confidence intervals use the Wilson score method: unlike the Wald
//! interval it never leaves [0, 1] and stays sensible for small samples and
//! extreme rates. The comparison is the classic pooled two-proportion z-test
//! with a two-sided p-value from the standard normal CDF.

use anyhow::{anyhow, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Raw z-test output, before the decision rule is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZTest {
    /// Standardized difference (rate_2 - rate_1) / SE; NaN when degenerate
    pub z: f64,
    /// Two-sided p-value 2 * (1 - cdf(|z|)); NaN when degenerate
    pub p_value: f64,
    /// True when the pooled variance is zero and the statistic is undefined
    pub degenerate: bool,
}

fn std_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| anyhow!("failed to create normal distribution: {e}"))
}

/// P(Z <= x) for the standard normal distribution
pub fn normal_cdf(x: f64) -> Result<f64> {
    Ok(std_normal()?.cdf(x))
}

/// Two-sided critical value for the given alpha (1.96 at alpha = 0.05)
pub fn z_critical(alpha: f64) -> Result<f64> {
    Ok(std_normal()?.inverse_cdf(1.0 - alpha / 2.0))
}

/// Two-sided Wilson score interval for a binomial proportion
///
/// Returns (low, high) with low <= successes/trials <= high, both inside
/// [0, 1]. Coverage is 1 - alpha. `trials` must be positive; callers
/// validate sample sizes before simulating.
pub fn wilson_interval(successes: u64, trials: u64, alpha: f64) -> Result<(f64, f64)> {
    if trials == 0 {
        return Err(anyhow!("wilson interval requires a positive trial count"));
    }
    if successes > trials {
        return Err(anyhow!(
            "successes ({successes}) cannot exceed trials ({trials})"
        ));
    }

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let z = z_critical(alpha)?;
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = (p_hat + z2 / (2.0 * n)) / denom;
    let half = (z / denom) * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt();

    let low = (center - half).clamp(0.0, 1.0);
    let high = (center + half).clamp(0.0, 1.0);

    Ok((low, high))
}

/// Pooled two-proportion z-test
///
/// Compares successes_2/trials_2 against successes_1/trials_1 under the null
/// hypothesis of equal rates. When the pooled proportion is 0 or 1 the
/// standard error collapses to zero and the statistic is undefined; the
/// result is flagged degenerate with NaN z and p rather than a divide error.
pub fn two_proportion_z_test(
    successes_1: u64,
    trials_1: u64,
    successes_2: u64,
    trials_2: u64,
) -> Result<ZTest> {
    if trials_1 == 0 || trials_2 == 0 {
        return Err(anyhow!("z-test requires positive trial counts"));
    }

    let n1 = trials_1 as f64;
    let x1 = successes_1 as f64;
    let n2 = trials_2 as f64;
    let x2 = successes_2 as f64;

    let p1 = x1 / n1;
    let p2 = x2 / n2;

    let p_pool = (x1 + x2) / (n1 + n2);
    let se = (p_pool * (1.0 - p_pool) * (1.0 / n1 + 1.0 / n2)).sqrt();

    if se == 0.0 {
        return Ok(ZTest {
            z: f64::NAN,
            p_value: f64::NAN,
            degenerate: true,
        });
    }

    let z = (p2 - p1) / se;
    let p_value = (2.0 * (1.0 - normal_cdf(z.abs())?)).clamp(0.0, 1.0);

    Ok(ZTest {
        z,
        p_value,
        degenerate: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_critical_95() {
        let z = z_critical(0.05).unwrap();
        assert!((z - 1.959964).abs() < 1e-4, "z was {z}");
    }

    #[test]
    fn test_wilson_brackets_observed_rate() {
        for &(x, n) in &[(0u64, 50u64), (5, 50), (25, 50), (50, 50), (100, 1000)] {
            let (low, high) = wilson_interval(x, n, 0.05).unwrap();
            let p_hat = x as f64 / n as f64;

            assert!(low >= 0.0 && high <= 1.0);
            assert!(low <= p_hat + 1e-12, "low {low} above rate {p_hat}");
            assert!(high >= p_hat - 1e-12, "high {high} below rate {p_hat}");
        }
    }

    #[test]
    fn test_wilson_width_shrinks_with_sample_size() {
        let (low_s, high_s) = wilson_interval(100, 1_000, 0.05).unwrap();
        let (low_l, high_l) = wilson_interval(10_000, 100_000, 0.05).unwrap();

        assert!(high_l - low_l < high_s - low_s);
    }

    #[test]
    fn test_wilson_rejects_bad_counts() {
        assert!(wilson_interval(1, 0, 0.05).is_err());
        assert!(wilson_interval(11, 10, 0.05).is_err());
    }

    #[test]
    fn test_z_test_clear_difference_is_significant() {
        // 10% vs 20% at n=1000 per arm
        let test = two_proportion_z_test(100, 1000, 200, 1000).unwrap();

        assert!(!test.degenerate);
        assert!(test.z > 0.0);
        assert!(test.p_value < 0.05);
    }

    #[test]
    fn test_z_test_identical_counts_not_significant() {
        let test = two_proportion_z_test(100, 1000, 100, 1000).unwrap();

        assert!(!test.degenerate);
        assert!(test.z.abs() < 1e-12);
        assert!((test.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_z_test_symmetry() {
        let ab = two_proportion_z_test(100, 1000, 150, 1000).unwrap();
        let ba = two_proportion_z_test(150, 1000, 100, 1000).unwrap();

        assert!((ab.z + ba.z).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
    }

    #[test]
    fn test_z_test_monotonic_in_difference() {
        // Same control arm, growing treatment difference
        let small = two_proportion_z_test(100, 1000, 120, 1000).unwrap();
        let large = two_proportion_z_test(100, 1000, 140, 1000).unwrap();

        assert!(large.z.abs() > small.z.abs());
        assert!(large.p_value < small.p_value);
    }

    #[test]
    fn test_z_test_degenerate_when_no_conversions() {
        let test = two_proportion_z_test(0, 1000, 0, 1000).unwrap();

        assert!(test.degenerate);
        assert!(test.z.is_nan());
        assert!(test.p_value.is_nan());
    }

    #[test]
    fn test_z_test_degenerate_when_all_convert() {
        let test = two_proportion_z_test(500, 500, 800, 800).unwrap();

        assert!(test.degenerate);
    }
}

//! Experiment simulation: seeded draws plus the full statistical readout
//!
//! The whole computation is a single pure transformation from
//! (configs, seed) to (results, outcome). The RNG handle is created per run
//! from the explicit seed, so no process-wide random state exists and runs
//! are exactly reproducible.

use chrono::Utc;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Binomial;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{Result, ValidationErrorExt};
use crate::experiment::{
    ExperimentConfig, ExperimentRun, TestOutcome, VariantConfig, VariantLabel, VariantResult,
};
use crate::stats;
use crate::validation;

/// Turns two variant configurations into a finished, internally consistent
/// experiment run
pub struct ExperimentSimulator;

impl ExperimentSimulator {
    /// Run one simulation with a fresh RNG seeded from `config.seed`
    ///
    /// Consumes exactly one binomial draw per variant. Fails with
    /// `SimError::InvalidInput` before anything is drawn when a parameter is
    /// out of range.
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentRun> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Run one simulation against an injected random source
    ///
    /// Exposed so tests can drive the simulation with any seeded RNG.
    pub fn run_with_rng<R: Rng>(config: &ExperimentConfig, rng: &mut R) -> Result<ExperimentRun> {
        validation::validate_variant(&config.variant_a).map_validation_err("variant_a")?;
        validation::validate_variant(&config.variant_b).map_validation_err("variant_b")?;
        validation::validate_significance_level(config.significance_level)
            .map_validation_err("significance_level")?;

        let alpha = config.significance_level;
        let variant_a = Self::simulate_variant(&config.variant_a, alpha, rng)?;
        let variant_b = Self::simulate_variant(&config.variant_b, alpha, rng)?;
        let outcome = Self::compare(&variant_a, &variant_b, alpha)?;

        info!(
            conversions_a = variant_a.conversions,
            conversions_b = variant_b.conversions,
            z = outcome.z_statistic,
            p = outcome.p_value,
            significant = outcome.significant,
            "simulation complete"
        );

        Ok(ExperimentRun {
            run_id: Uuid::new_v4(),
            executed_at: Utc::now(),
            seed: config.seed,
            variant_a,
            variant_b,
            outcome,
        })
    }

    /// One binomial draw for a variant, with its point estimate and interval
    fn simulate_variant<R: Rng>(
        config: &VariantConfig,
        alpha: f64,
        rng: &mut R,
    ) -> Result<VariantResult> {
        let binomial = Binomial::new(config.true_rate, config.sample_size)
            .map_err(|e| anyhow::anyhow!("failed to create binomial distribution: {e}"))?;

        // statrs binomial samples are whole-number f64 counts
        let conversions = binomial.sample(rng) as u64;
        let observed_rate = conversions as f64 / config.sample_size as f64;
        let (ci_low, ci_high) =
            stats::wilson_interval(conversions, config.sample_size, alpha)?;

        debug!(
            variant = config.label.as_str(),
            conversions, observed_rate, "variant simulated"
        );

        Ok(VariantResult {
            label: config.label,
            sample_size: config.sample_size,
            conversions,
            observed_rate,
            ci_low,
            ci_high,
        })
    }

    /// Pooled z-test plus the decision rule and lift summary
    fn compare(a: &VariantResult, b: &VariantResult, alpha: f64) -> Result<TestOutcome> {
        let test = stats::two_proportion_z_test(
            a.conversions,
            a.sample_size,
            b.conversions,
            b.sample_size,
        )?;

        let significant = !test.degenerate && test.p_value < alpha;

        let absolute_lift = b.observed_rate - a.observed_rate;
        let relative_lift = if a.observed_rate > 0.0 {
            absolute_lift / a.observed_rate
        } else {
            0.0
        };

        let winner = if significant {
            if b.observed_rate > a.observed_rate {
                Some(VariantLabel::B)
            } else {
                Some(VariantLabel::A)
            }
        } else {
            None
        };

        Ok(TestOutcome {
            z_statistic: test.z,
            p_value: test.p_value,
            significant,
            degenerate: test.degenerate,
            absolute_lift,
            relative_lift,
            winner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimError;

    #[test]
    fn test_same_seed_reproduces_draws() {
        let config = ExperimentConfig::default();

        let first = ExperimentSimulator::run(&config).unwrap();
        let second = ExperimentSimulator::run(&config).unwrap();

        assert_eq!(first.variant_a.conversions, second.variant_a.conversions);
        assert_eq!(first.variant_b.conversions, second.variant_b.conversions);
        assert_eq!(first.outcome.z_statistic, second.outcome.z_statistic);
        assert_eq!(first.outcome.p_value, second.outcome.p_value);
    }

    #[test]
    fn test_injected_rng_matches_seeded_run() {
        let config = ExperimentConfig::default();

        let seeded = ExperimentSimulator::run(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let injected = ExperimentSimulator::run_with_rng(&config, &mut rng).unwrap();

        assert_eq!(seeded.variant_a.conversions, injected.variant_a.conversions);
        assert_eq!(seeded.variant_b.conversions, injected.variant_b.conversions);
    }

    #[test]
    fn test_zero_sample_size_rejected_before_drawing() {
        let mut config = ExperimentConfig::default();
        config.variant_a.sample_size = 0;

        match ExperimentSimulator::run(&config) {
            Err(SimError::InvalidInput { field, .. }) => assert_eq!(field, "variant_a"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_rate_rejected() {
        let mut config = ExperimentConfig::default();
        config.variant_b.true_rate = 1.5;

        assert!(matches!(
            ExperimentSimulator::run(&config),
            Err(SimError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_winner_only_when_significant() {
        // Identical arms: never significant, never a winner
        let mut config = ExperimentConfig::default();
        config.variant_b.true_rate = config.variant_a.true_rate;

        let run = ExperimentSimulator::run(&config).unwrap();
        if !run.outcome.significant {
            assert_eq!(run.outcome.winner, None);
        } else {
            assert!(run.outcome.winner.is_some());
        }
    }

    #[test]
    fn test_zero_rate_control_gives_zero_relative_lift() {
        let mut config = ExperimentConfig::default();
        config.variant_a.true_rate = 0.0;
        config.variant_a.sample_size = 100;
        config.variant_b.true_rate = 0.5;
        config.variant_b.sample_size = 100;

        let run = ExperimentSimulator::run(&config).unwrap();

        // p = 0 draws exactly zero conversions
        assert_eq!(run.variant_a.conversions, 0);
        assert_eq!(run.outcome.relative_lift, 0.0);
    }
}

//! Configuration management for splitsim
//!
//! All configurable parameters in one place with environment variable
//! overrides. Sensible defaults, configurable where the tool is embedded.

use std::env;

use tracing::info;

use crate::constants::{
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, DEFAULT_TRUE_RATE_A, DEFAULT_TRUE_RATE_B,
    SIGNIFICANCE_LEVEL,
};
use crate::experiment::{ExperimentConfig, VariantConfig, VariantLabel};

/// Simulator configuration with defaults and env overrides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    /// Visitors in variant A
    pub sample_size_a: u64,
    /// Visitors in variant B
    pub sample_size_b: u64,
    /// Assumed true conversion rate of variant A
    pub true_rate_a: f64,
    /// Assumed true conversion rate of variant B
    pub true_rate_b: f64,
    /// Seed for the pseudo-random source
    pub seed: u64,
    /// Two-sided significance threshold
    pub significance_level: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sample_size_a: DEFAULT_SAMPLE_SIZE,
            sample_size_b: DEFAULT_SAMPLE_SIZE,
            true_rate_a: DEFAULT_TRUE_RATE_A,
            true_rate_b: DEFAULT_TRUE_RATE_B,
            seed: DEFAULT_SEED,
            significance_level: SIGNIFICANCE_LEVEL,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from environment variables
    ///
    /// Supported overrides:
    /// - SPLITSIM_SAMPLE_SIZE_A / SPLITSIM_SAMPLE_SIZE_B
    /// - SPLITSIM_TRUE_RATE_A / SPLITSIM_TRUE_RATE_B
    /// - SPLITSIM_SEED
    /// - SPLITSIM_SIGNIFICANCE_LEVEL
    ///
    /// Unparsable values fall back to the defaults; validation of the final
    /// values happens inside the simulator.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("SPLITSIM_SAMPLE_SIZE_A") {
            if let Ok(n) = val.parse() {
                config.sample_size_a = n;
            }
        }

        if let Ok(val) = env::var("SPLITSIM_SAMPLE_SIZE_B") {
            if let Ok(n) = val.parse() {
                config.sample_size_b = n;
            }
        }

        if let Ok(val) = env::var("SPLITSIM_TRUE_RATE_A") {
            if let Ok(r) = val.parse() {
                config.true_rate_a = r;
            }
        }

        if let Ok(val) = env::var("SPLITSIM_TRUE_RATE_B") {
            if let Ok(r) = val.parse() {
                config.true_rate_b = r;
            }
        }

        if let Ok(val) = env::var("SPLITSIM_SEED") {
            if let Ok(s) = val.parse() {
                config.seed = s;
            }
        }

        if let Ok(val) = env::var("SPLITSIM_SIGNIFICANCE_LEVEL") {
            if let Ok(a) = val.parse() {
                config.significance_level = a;
            }
        }

        config
    }

    /// Log the effective configuration at startup
    pub fn log_summary(&self) {
        info!(
            sample_size_a = self.sample_size_a,
            sample_size_b = self.sample_size_b,
            true_rate_a = self.true_rate_a,
            true_rate_b = self.true_rate_b,
            seed = self.seed,
            significance_level = self.significance_level,
            "simulator configuration"
        );
    }

    /// Materialize the per-run experiment configuration
    pub fn to_experiment(&self) -> ExperimentConfig {
        ExperimentConfig {
            variant_a: VariantConfig::new(VariantLabel::A, self.sample_size_a, self.true_rate_a),
            variant_b: VariantConfig::new(VariantLabel::B, self.sample_size_b, self.true_rate_b),
            seed: self.seed,
            significance_level: self.significance_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();

        assert_eq!(config.sample_size_a, 10_000);
        assert_eq!(config.sample_size_b, 10_000);
        assert!((config.true_rate_a - 0.10).abs() < f64::EPSILON);
        assert!((config.true_rate_b - 0.12).abs() < f64::EPSILON);
        assert_eq!(config.seed, 42);
        assert!((config.significance_level - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_experiment_labels_arms() {
        let experiment = SimulatorConfig::default().to_experiment();

        assert_eq!(experiment.variant_a.label, VariantLabel::A);
        assert_eq!(experiment.variant_b.label, VariantLabel::B);
        assert_eq!(experiment.seed, 42);
    }
}

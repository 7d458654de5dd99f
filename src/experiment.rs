//! Core data model for a simulated A/B experiment
//!
//! All entities are created fresh on each run and discarded after rendering.
//! Nothing here is cached or mutated across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, DEFAULT_TRUE_RATE_A, DEFAULT_TRUE_RATE_B,
    SIGNIFICANCE_LEVEL,
};

/// Arm of the A/B test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantLabel {
    A,
    B,
}

impl VariantLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantLabel::A => "A",
            VariantLabel::B => "B",
        }
    }

    /// Display name used by the surfaces ("Variant A" / "Variant B")
    pub fn display_name(&self) -> String {
        format!("Variant {}", self.as_str())
    }
}

/// Configuration for one arm: how many visitors to simulate and the assumed
/// true conversion rate the draws come from. Immutable once supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub label: VariantLabel,
    /// Visitors to simulate for this arm
    pub sample_size: u64,
    /// Assumed true conversion rate in [0, 1]
    pub true_rate: f64,
}

impl VariantConfig {
    pub fn new(label: VariantLabel, sample_size: u64, true_rate: f64) -> Self {
        Self {
            label,
            sample_size,
            true_rate,
        }
    }
}

/// Full configuration for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub variant_a: VariantConfig,
    pub variant_b: VariantConfig,
    /// Seed for the pseudo-random source; same seed + same configs
    /// reproduce the exact same draws
    pub seed: u64,
    /// Two-sided Type I error rate for the test and the intervals
    pub significance_level: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            variant_a: VariantConfig::new(VariantLabel::A, DEFAULT_SAMPLE_SIZE, DEFAULT_TRUE_RATE_A),
            variant_b: VariantConfig::new(VariantLabel::B, DEFAULT_SAMPLE_SIZE, DEFAULT_TRUE_RATE_B),
            seed: DEFAULT_SEED,
            significance_level: SIGNIFICANCE_LEVEL,
        }
    }
}

/// Observed outcome for one arm after the draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    pub label: VariantLabel,
    pub sample_size: u64,
    /// Simulated conversions, always in [0, sample_size]
    pub conversions: u64,
    /// conversions / sample_size
    pub observed_rate: f64,
    /// Lower bound of the 95% Wilson interval, ci_low <= observed_rate
    pub ci_low: f64,
    /// Upper bound of the 95% Wilson interval, observed_rate <= ci_high
    pub ci_high: f64,
}

/// Result of the pooled two-proportion z-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// z = (rate_B - rate_A) / pooled SE; NaN when the test is degenerate
    pub z_statistic: f64,
    /// Two-sided p-value; NaN when the test is degenerate
    pub p_value: f64,
    /// p_value < significance threshold; always false when degenerate
    pub significant: bool,
    /// True when the pooled variance is zero and z/p are undefined
    pub degenerate: bool,
    /// observed_rate_B - observed_rate_A
    pub absolute_lift: f64,
    /// absolute_lift / observed_rate_A, or 0 when the A rate is 0
    pub relative_lift: f64,
    /// The better-performing arm, only when the difference is significant
    pub winner: Option<VariantLabel>,
}

/// One finished simulation run: both arm results plus the test outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRun {
    pub run_id: Uuid,
    pub executed_at: DateTime<Utc>,
    pub seed: u64,
    pub variant_a: VariantResult,
    pub variant_b: VariantResult,
    pub outcome: TestOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_scenario() {
        let config = ExperimentConfig::default();

        assert_eq!(config.variant_a.sample_size, 10_000);
        assert_eq!(config.variant_b.sample_size, 10_000);
        assert!((config.variant_a.true_rate - 0.10).abs() < f64::EPSILON);
        assert!((config.variant_b.true_rate - 0.12).abs() < f64::EPSILON);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_label_display_names() {
        assert_eq!(VariantLabel::A.display_name(), "Variant A");
        assert_eq!(VariantLabel::B.as_str(), "B");
    }
}

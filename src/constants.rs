//! Documented constants for the simulator
//!
//! All tunable parameters in one place with justification for their values.
//! Centralizing constants prevents magic numbers and makes tuning easier.

// =============================================================================
// STATISTICAL DECISION CONSTANTS
// =============================================================================

/// Significance threshold for the two-proportion test (p < 0.05)
///
/// Justification:
/// - 0.05 is the conventional two-sided Type I error rate for A/B readouts
/// - The decision rule `significant = p_value < SIGNIFICANCE_LEVEL` is a
///   fixed configuration constant, never derived from the data
/// - Also drives the confidence-interval coverage: 1 - alpha = 95%
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

// =============================================================================
// DEFAULT EXPERIMENT PARAMETERS
// The canonical demo scenario: a 10% baseline with a 2pp uplift at 10k
// visitors per arm, which lands near the edge of detectability.
// =============================================================================

/// Default visitors per variant
pub const DEFAULT_SAMPLE_SIZE: u64 = 10_000;

/// Default assumed true conversion rate for variant A (the control)
pub const DEFAULT_TRUE_RATE_A: f64 = 0.10;

/// Default assumed true conversion rate for variant B (the treatment)
pub const DEFAULT_TRUE_RATE_B: f64 = 0.12;

/// Default seed for the pseudo-random source
///
/// Runs with the same seed and inputs reproduce the exact same draws. The
/// surfaces let users override this when they want fresh outcomes.
pub const DEFAULT_SEED: u64 = 42;

// =============================================================================
// INPUT GUARDS
// =============================================================================

/// Maximum visitors per variant
///
/// Justification:
/// - Binomial sampling cost grows with n; a billion visitors per arm is far
///   beyond any realistic simulation and keeps a single run interactive
/// - Caps the loss of f64 precision when dividing conversion counts
pub const MAX_SAMPLE_SIZE: u64 = 1_000_000_000;

//! splitsim
//!
//! A/B test simulation calculator. Given visitor counts and assumed true
//! conversion rates for two variants, draws seeded binomial outcomes and
//! reports observed rates, 95% Wilson confidence intervals, a pooled
//! two-proportion z-test, and a significance decision, plus a render model
//! (summary lines and a bar chart description) for the surfaces.
//!
//! # Design
//! - Pure core: `ExperimentSimulator::run` is a single transformation from
//!   (configs, seed) to (results, outcome); each run owns its RNG
//! - Rendering is a separate pass (`report::build`) over the returned data
//! - Input and output surfaces (CLI here, TUI in `splitsim-tui`) stay thin

pub mod config;
pub mod constants;
pub mod errors;
pub mod experiment;
pub mod report;
pub mod simulation;
pub mod stats;
pub mod tracing_setup;
pub mod validation;

pub use errors::{Result, SimError};
pub use experiment::{ExperimentConfig, ExperimentRun, TestOutcome, VariantConfig, VariantResult};
pub use simulation::ExperimentSimulator;

// Re-export dependencies to ensure tests/benchmarks use the same version
pub use chrono;
pub use rand;
pub use uuid;

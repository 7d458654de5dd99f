//! Input validation for experiment parameters
//!
//! Rejects impossible configurations before the random draw runs, so a bad
//! parameter never produces a half-computed result.

use anyhow::{anyhow, Result};

use crate::constants::MAX_SAMPLE_SIZE;
use crate::experiment::VariantConfig;

/// Validate a visitor count
pub fn validate_sample_size(sample_size: u64) -> Result<()> {
    if sample_size == 0 {
        return Err(anyhow!("sample size must be a positive integer"));
    }

    if sample_size > MAX_SAMPLE_SIZE {
        return Err(anyhow!(
            "sample size too large: {sample_size} (max: {MAX_SAMPLE_SIZE})"
        ));
    }

    Ok(())
}

/// Validate a conversion rate
pub fn validate_rate(rate: f64) -> Result<()> {
    if !rate.is_finite() {
        return Err(anyhow!("conversion rate must be a finite number"));
    }

    if !(0.0..=1.0).contains(&rate) {
        return Err(anyhow!(
            "conversion rate must lie in [0, 1], got: {rate}"
        ));
    }

    Ok(())
}

/// Validate a significance level
pub fn validate_significance_level(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
        return Err(anyhow!(
            "significance level must lie in (0, 1), got: {alpha}"
        ));
    }

    Ok(())
}

/// Validate a full variant configuration
pub fn validate_variant(config: &VariantConfig) -> Result<()> {
    validate_sample_size(config.sample_size)
        .map_err(|e| anyhow!("variant {}: {e}", config.label.as_str()))?;
    validate_rate(config.true_rate)
        .map_err(|e| anyhow!("variant {}: {e}", config.label.as_str()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::VariantLabel;

    #[test]
    fn test_sample_size_bounds() {
        assert!(validate_sample_size(0).is_err());
        assert!(validate_sample_size(1).is_ok());
        assert!(validate_sample_size(MAX_SAMPLE_SIZE).is_ok());
        assert!(validate_sample_size(MAX_SAMPLE_SIZE + 1).is_err());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(validate_rate(0.0).is_ok());
        assert!(validate_rate(0.12).is_ok());
        assert!(validate_rate(1.0).is_ok());
        assert!(validate_rate(-0.01).is_err());
        assert!(validate_rate(1.01).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_significance_level_bounds() {
        assert!(validate_significance_level(0.05).is_ok());
        assert!(validate_significance_level(0.0).is_err());
        assert!(validate_significance_level(1.0).is_err());
        assert!(validate_significance_level(f64::NAN).is_err());
    }

    #[test]
    fn test_variant_error_names_the_variant() {
        let bad = VariantConfig::new(VariantLabel::B, 0, 0.1);
        let err = validate_variant(&bad).unwrap_err();
        assert!(err.to_string().contains("variant B"));
    }
}

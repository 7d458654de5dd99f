//! Render pass over a finished run
//!
//! Builds everything the surfaces need without touching the simulation:
//! formatted summary lines, a styled decision message, and a chart
//! description with asymmetric error bars. The CLI prints these, the TUI
//! draws them.

use serde::{Deserialize, Serialize};

use crate::experiment::{ExperimentRun, VariantResult};

/// Styling hint for the decision message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStyle {
    /// Significant difference detected
    Success,
    /// No significant difference, or degenerate test
    Warning,
}

/// Categorical decision message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub style: DecisionStyle,
    pub message: String,
}

/// One bar of the conversion-rate chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    /// Bar height: the observed conversion rate
    pub value: f64,
    /// Downward error span: observed_rate - ci_low
    pub err_low: f64,
    /// Upward error span: ci_high - observed_rate
    pub err_high: f64,
}

/// Two-bar categorical chart with asymmetric error bars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub bars: Vec<ChartBar>,
    pub y_axis_label: String,
}

/// Complete render model for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub run_id: uuid::Uuid,
    pub executed_at: chrono::DateTime<chrono::Utc>,
    pub seed: u64,
    /// Per-variant rate + confidence interval lines
    pub variant_lines: Vec<String>,
    /// Z-statistic (4 dp) and p-value (6 dp) line
    pub statistic_line: String,
    pub decision: Decision,
    pub chart: ChartSpec,
}

impl SummaryReport {
    /// Plain-text rendering for non-interactive surfaces
    pub fn to_text(&self) -> String {
        let mut lines = vec!["Results Summary".to_string()];
        lines.extend(self.variant_lines.iter().cloned());
        lines.push(self.statistic_line.clone());
        lines.push(self.decision.message.clone());
        lines.join("\n")
    }
}

/// Format a rate in [0, 1] as a percentage with two decimals
pub fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn variant_line(result: &VariantResult) -> String {
    format!(
        "{} Conversion Rate: {}  (95% CI: {} - {})",
        result.label.display_name(),
        percent(result.observed_rate),
        percent(result.ci_low),
        percent(result.ci_high),
    )
}

fn chart_bar(result: &VariantResult) -> ChartBar {
    ChartBar {
        label: result.label.display_name(),
        value: result.observed_rate,
        err_low: (result.observed_rate - result.ci_low).max(0.0),
        err_high: (result.ci_high - result.observed_rate).max(0.0),
    }
}

/// Build the render model for a finished run
pub fn build(run: &ExperimentRun) -> SummaryReport {
    let outcome = &run.outcome;

    let statistic_line = if outcome.degenerate {
        "Z-Statistic: undefined,  P-Value: undefined".to_string()
    } else {
        format!(
            "Z-Statistic: {:.4},  P-Value: {:.6}",
            outcome.z_statistic, outcome.p_value
        )
    };

    let decision = if outcome.degenerate {
        Decision {
            style: DecisionStyle::Warning,
            message: "Test is degenerate: no variation in outcomes, significance is undefined."
                .to_string(),
        }
    } else if outcome.significant {
        let winner = outcome
            .winner
            .map(|label| label.display_name())
            .unwrap_or_else(|| "one variant".to_string());
        Decision {
            style: DecisionStyle::Success,
            message: format!(
                "Reject the null hypothesis: {winner} performs significantly better!"
            ),
        }
    } else {
        Decision {
            style: DecisionStyle::Warning,
            message: "Fail to reject the null hypothesis: difference is not statistically significant."
                .to_string(),
        }
    };

    SummaryReport {
        run_id: run.run_id,
        executed_at: run.executed_at,
        seed: run.seed,
        variant_lines: vec![variant_line(&run.variant_a), variant_line(&run.variant_b)],
        statistic_line,
        decision,
        chart: ChartSpec {
            bars: vec![chart_bar(&run.variant_a), chart_bar(&run.variant_b)],
            y_axis_label: "Conversion Rate".to_string(),
        },
    }
}

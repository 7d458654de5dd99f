//! splitsim CLI: one-shot A/B test simulation
//!
//! Parameters default from the environment config; flags override. Prints
//! the text summary with a bar chart, or the full render model as JSON.

use anyhow::Result;
use clap::Parser;

use splitsim::config::SimulatorConfig;
use splitsim::report::{self, ChartSpec};
use splitsim::simulation::ExperimentSimulator;
use splitsim::tracing_setup;

/// Simulate an A/B test and report statistical significance
#[derive(Parser, Debug)]
#[command(name = "splitsim", version, about)]
struct Cli {
    /// Visitors in variant A
    #[arg(long)]
    visitors_a: Option<u64>,

    /// Visitors in variant B
    #[arg(long)]
    visitors_b: Option<u64>,

    /// Assumed true conversion rate of variant A (in [0, 1])
    #[arg(long)]
    rate_a: Option<f64>,

    /// Assumed true conversion rate of variant B (in [0, 1])
    #[arg(long)]
    rate_b: Option<f64>,

    /// Seed for the pseudo-random source
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full render model as JSON instead of text
    #[arg(long)]
    json: bool,
}

const CHART_WIDTH: usize = 40;

/// Horizontal bar rendering of the chart description, intervals as brackets
fn render_chart(chart: &ChartSpec) -> String {
    let scale_max = chart
        .bars
        .iter()
        .map(|b| b.value + b.err_high)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut lines = vec![format!("{} (95% CI)", chart.y_axis_label)];
    for bar in &chart.bars {
        let cols = ((bar.value / scale_max) * CHART_WIDTH as f64).round() as usize;
        lines.push(format!(
            "{:<9} {:<width$} {} [{} - {}]",
            bar.label,
            "█".repeat(cols),
            report::percent(bar.value),
            report::percent(bar.value - bar.err_low),
            report::percent(bar.value + bar.err_high),
            width = CHART_WIDTH,
        ));
    }
    lines.join("\n")
}

fn main() -> Result<()> {
    tracing_setup::init_tracing();

    let cli = Cli::parse();
    let mut config = SimulatorConfig::from_env();

    if let Some(n) = cli.visitors_a {
        config.sample_size_a = n;
    }
    if let Some(n) = cli.visitors_b {
        config.sample_size_b = n;
    }
    if let Some(r) = cli.rate_a {
        config.true_rate_a = r;
    }
    if let Some(r) = cli.rate_b {
        config.true_rate_b = r;
    }
    if let Some(s) = cli.seed {
        config.seed = s;
    }

    config.log_summary();

    let run = ExperimentSimulator::run(&config.to_experiment())?;
    let summary = report::build(&run);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.to_text());
        println!();
        println!("{}", render_chart(&summary.chart));
    }

    Ok(())
}

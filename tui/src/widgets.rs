use ratatui::{prelude::*, widgets::*};

use splitsim::report::{percent, ChartSpec, DecisionStyle};

use crate::types::{App, VERSION};

// ============================================================================
// THEME - muted terminal palette, one accent per meaning
// ============================================================================

/// Accent for focused inputs and headings
const ACCENT: Color = Color::Rgb(130, 160, 220);
/// Significant result banner
const SUCCESS: Color = Color::Rgb(150, 230, 170);
/// Non-significant / degenerate banner
const WARNING: Color = Color::Rgb(255, 183, 130);
/// Primary text
const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 240);
/// Secondary text
const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 160);
/// Subtle borders
const BORDER_SUBTLE: Color = Color::Rgb(60, 60, 60);
/// Variant A bar
const BAR_A: Color = Color::Rgb(120, 180, 230);
/// Variant B bar
const BAR_B: Color = Color::Rgb(240, 150, 140);

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
}

pub fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "A/B Test Simulator",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  v{VERSION}"), Style::default().fg(TEXT_SECONDARY)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (i, field) in app.fields.iter().enumerate() {
        let focused = i == app.focus;
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };

        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.param.label()),
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}{}", field.buffer, if focused { "_" } else { "" }),
            value_style,
        )));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines).block(panel("Parameters")), area);
}

pub fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(WARNING).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    match &app.report {
        Some(report) => {
            for text in &report.variant_lines {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(TEXT_PRIMARY),
                )));
            }
            lines.push(Line::from(Span::styled(
                report.statistic_line.clone(),
                Style::default().fg(TEXT_PRIMARY),
            )));
            lines.push(Line::default());

            let (color, prefix) = match report.decision.style {
                DecisionStyle::Success => (SUCCESS, "✓ "),
                DecisionStyle::Warning => (WARNING, "✗ "),
            };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{}", report.decision.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("seed {}  run {}", report.seed, report.run_id),
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Press Enter to run the simulation",
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Results Summary")),
        area,
    );
}

/// Vertical bar chart with error-bar whiskers above each bar
///
/// Bar height is the observed rate; the whisker spans up to ci_high. The
/// lower bound is printed in the bar's caption since the bar body covers it.
pub fn render_chart(f: &mut Frame, area: Rect, chart: &ChartSpec) {
    let block = panel(&chart.y_axis_label);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Caption needs two rows; everything above is plot space
    if inner.height < 4 || chart.bars.is_empty() {
        return;
    }
    let plot_rows = (inner.height - 2) as usize;

    let scale = chart
        .bars
        .iter()
        .map(|b| b.value + b.err_high)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let colors = [BAR_A, BAR_B];
    let slot = inner.width as usize / chart.bars.len().max(1);
    let bar_width = (slot.saturating_sub(4)).clamp(2, 12);

    let mut rows: Vec<Line> = Vec::new();
    for row in 0..plot_rows {
        let band_hi = scale * (plot_rows - row) as f64 / plot_rows as f64;
        let band_lo = scale * (plot_rows - row - 1) as f64 / plot_rows as f64;

        let mut spans: Vec<Span> = Vec::new();
        for (i, bar) in chart.bars.iter().enumerate() {
            let color = colors[i % colors.len()];
            let whisker_top = bar.value + bar.err_high;

            let cell = if bar.value >= band_hi {
                "█".repeat(bar_width)
            } else if whisker_top >= band_lo && bar.value < band_hi {
                let cap = if whisker_top < band_hi { "┬" } else { "│" };
                let pad = (bar_width - 1) / 2;
                format!("{}{}{}", " ".repeat(pad), cap, " ".repeat(bar_width - pad - 1))
            } else {
                " ".repeat(bar_width)
            };

            let margin = slot.saturating_sub(bar_width) / 2;
            spans.push(Span::raw(" ".repeat(margin)));
            spans.push(Span::styled(cell, Style::default().fg(color)));
            spans.push(Span::raw(" ".repeat(slot.saturating_sub(bar_width + margin))));
        }
        rows.push(Line::from(spans));
    }

    // Captions: label, then rate with the full interval
    for caption in 0..2 {
        let mut spans: Vec<Span> = Vec::new();
        for bar in &chart.bars {
            let text = if caption == 0 {
                bar.label.clone()
            } else {
                format!(
                    "{} [{} - {}]",
                    percent(bar.value),
                    percent(bar.value - bar.err_low),
                    percent(bar.value + bar.err_high),
                )
            };
            spans.push(Span::styled(
                format!("{text:^slot$}"),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }
        rows.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(rows), inner);
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        "Tab/↑↓ switch field   type to edit   Enter run   q quit",
        Style::default().fg(TEXT_SECONDARY),
    ));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

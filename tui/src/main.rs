//! Interactive terminal surface for splitsim
//!
//! Four numeric parameters plus a seed, a run trigger, and a rendered
//! summary with a bar chart. The core simulation stays in the library; this
//! binary only gathers input and draws the returned render model.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::prelude::*;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

mod types;
mod widgets;

use types::App;
use widgets::{render_chart, render_footer, render_header, render_inputs, render_results};

fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, outer[0]);
    render_footer(f, outer[2]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(outer[1]);

    render_inputs(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(8)])
        .split(columns[1]);

    render_results(f, right[0], app);
    if let Some(report) = &app.report {
        render_chart(f, right[1], &report.chart);
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.trigger_run(),
                KeyCode::Tab | KeyCode::Down => app.focus_next(),
                KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
                KeyCode::Backspace => app.focused_field().pop(),
                KeyCode::Char(c) => app.focused_field().push(c),
                _ => {}
            }
        }
    }
}

fn main() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

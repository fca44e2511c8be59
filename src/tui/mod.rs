//! Terminal UI for the slide puzzle.

mod app;
mod input;
mod ui;

use crate::app_config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

use app::App;
use ui::BoardLayout;

/// Runs the puzzle TUI until the player quits.
pub fn run(config: AppConfig) -> Result<()> {
    // Log to a file so tracing output cannot corrupt the terminal.
    let log_file = std::fs::File::create("slide_puzzle.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting slide puzzle TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(&config), &config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draw/poll loop: one input event at a time, each handled with a
/// bounded synchronous engine call before the next draw.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    config: &AppConfig,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let mut layout = BoardLayout::default();

    loop {
        terminal.draw(|f| layout = ui::draw(f, &app))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    info!("User quit");
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
                KeyCode::Char('s') | KeyCode::Char('S') => app.shuffle(),
                KeyCode::Char(c) if c.is_ascii_digit() => app.slide_numbered(c),
                KeyCode::Enter | KeyCode::Char(' ') => app.slide_at_cursor(),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.move_cursor(key.code);
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(position) = layout.hit(mouse.column, mouse.row) {
                        debug!(position = %position, "Mouse slide request");
                        app.slide_at(position);
                    }
                }
            }
            _ => {}
        }
    }
}

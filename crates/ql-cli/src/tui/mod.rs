mod app;
mod views;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use ql_core::{Library, View};

use app::App;

pub fn run(quest: Option<&str>) -> Result<(), String> {
    let mut app = App::new(Library::builtin());

    // Resolve --quest before touching the terminal so the error is readable.
    if let Some(name) = quest {
        app.start_quest_by_name(name).map_err(|e| e.to_string())?;
    }

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match app.session.view {
                View::Library => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                    KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                    KeyCode::Char('g') => app.move_to_top(),
                    KeyCode::Char('G') => app.move_to_bottom(),
                    KeyCode::Enter => app.start_selected_quest(),
                    KeyCode::Char('?') => app.toggle_help(),
                    _ => {}
                },
                View::Quest => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => app.advance_step(),
                    KeyCode::Esc => app.exit_quest(),
                    KeyCode::Char('?') => app.toggle_help(),
                    _ => {}
                },
            }
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.session.view {
        View::Library => views::library::draw(frame, app, chunks[0]),
        View::Quest => views::quest::draw(frame, app, chunks[0]),
    }

    views::draw_status_bar(frame, app, chunks[1]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}

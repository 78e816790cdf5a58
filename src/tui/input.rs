use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

use super::actions::{ApplyResult, apply_action, handle_focused_text, translate};
use super::app::App;
use super::ui;

/// Redraw at least this often so the timer keeps counting.
const TICK: Duration = Duration::from_millis(250);

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (Windows reports Press + Release)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Help modal takes over input
        if app.help_modal {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => app.close_help(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_help_by(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_help_by(-1),
                _ => {}
            }
            continue;
        }

        match translate(app.focus, key) {
            Some(action) => {
                if apply_action(app, action) == ApplyResult::Quit {
                    return Ok(());
                }
            }
            None => handle_focused_text(app, key),
        }
    }
}

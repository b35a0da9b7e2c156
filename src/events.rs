//! Keyboard input handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // City tabs
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.prev_city(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_city(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.dashboard.cities().len() {
                app.select_city_index(index);
            } else {
                app.set_status_message(format!("No city #{}", c));
            }
        }

        // Chart window
        KeyCode::Char('w') => {
            app.next_window();
            app.set_status_message(format!("Window: {}", app.dashboard.window().label()));
        }
        KeyCode::Char('W') => {
            app.prev_window();
            app.set_status_message(format!("Window: {}", app.dashboard.window().label()));
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

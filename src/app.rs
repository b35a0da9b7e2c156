//! Terminal application state and navigation logic.
//!
//! [`App`] is the renderer-side shell around a [`DashboardController`]. It
//! holds purely presentational state (help overlay, status messages, theme)
//! and turns keystrokes into `select_city` / `select_window` intents. It
//! never mutates the view model.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::dashboard::DashboardController;
use crate::data::ViewModel;
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub dashboard: DashboardController,
    source_description: String,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App around a dashboard.
    pub fn new(dashboard: DashboardController, source_description: &str, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            dashboard,
            source_description: source_description.to_string(),
            theme,
            status_message: None,
        }
    }

    /// The current view model.
    pub fn view(&self) -> Arc<ViewModel> {
        self.dashboard.view()
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        &self.source_description
    }

    /// Pull pending updates into the view. Returns true if it changed.
    pub fn refresh(&mut self) -> bool {
        self.dashboard.refresh()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg),
            _ => None,
        }
    }

    fn selected_index(&self) -> usize {
        let selected = self.dashboard.selected_city();
        self.dashboard
            .cities()
            .iter()
            .position(|c| c == selected)
            .unwrap_or(0)
    }

    /// Select the next city tab, wrapping around.
    pub fn next_city(&mut self) {
        let len = self.dashboard.cities().len();
        self.select_city_index((self.selected_index() + 1) % len);
    }

    /// Select the previous city tab, wrapping around.
    pub fn prev_city(&mut self) {
        let len = self.dashboard.cities().len();
        self.select_city_index((self.selected_index() + len - 1) % len);
    }

    /// Select a city by tab position. Out-of-range positions are ignored.
    pub fn select_city_index(&mut self, index: usize) {
        let Some(city) = self.dashboard.cities().get(index).cloned() else {
            return;
        };
        self.dashboard.select_city(&city);
    }

    /// Switch to the next longer chart window.
    pub fn next_window(&mut self) {
        let window = self.dashboard.window().next();
        self.dashboard.select_window(window);
    }

    /// Switch to the next shorter chart window.
    pub fn prev_window(&mut self) {
        let window = self.dashboard.window().prev();
        self.dashboard.select_window(window);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Write a view model to `path` as pretty-printed JSON.
pub fn write_snapshot(view: &ViewModel, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(view)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

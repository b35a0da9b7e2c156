//! Terminal UI rendering using ratatui.
//!
//! Every function here reads the [`ViewModel`](crate::data::ViewModel) and
//! presentational state from [`App`]; nothing in the renderer changes
//! dashboard state.
//!
//! ## Submodules
//!
//! - [`overview`]: Current conditions and the summary statistics grid
//! - [`chart`]: Temperature trend for the selected window
//! - [`alerts`]: Alert feed, selected city first
//! - [`common`]: Shared components (header, city tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (common::render_header)               │
//! ├──────────────────────────────────────────────┤
//! │ City tabs (common::render_tabs)              │
//! ├───────────────┬──────────────────────────────┤
//! │ Current       │                              │
//! │ (overview)    │ Chart (chart::render)        │
//! ├───────────────┤                              │
//! │ Summary       ├──────────────────────────────┤
//! │ (overview)    │ Alerts (alerts::render)      │
//! ├───────────────┴──────────────────────────────┤
//! │ Status Bar (common::render_status_bar)       │
//! └──────────────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```

pub mod alerts;
pub mod chart;
pub mod common;
pub mod overview;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for a usable display.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, app, area);
        return;
    }

    let view = app.view();

    let rows = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // City tabs
        Constraint::Min(10),   // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, &view, rows[0]);
    common::render_tabs(frame, app, &view, rows[1]);

    let columns = Layout::horizontal([Constraint::Length(34), Constraint::Min(24)]).split(rows[2]);

    let left = Layout::vertical([Constraint::Length(7), Constraint::Min(6)]).split(columns[0]);
    overview::render_current(frame, app, &view, left[0]);
    overview::render_summary(frame, app, &view, left[1]);

    let right = Layout::vertical([Constraint::Min(8), Constraint::Length(7)]).split(columns[1]);
    chart::render(frame, app, &view, right[0]);
    alerts::render(frame, app, &view, right[1]);

    common::render_status_bar(frame, app, &view, rows[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

fn render_too_small(frame: &mut Frame, app: &App, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.warning));
    let height = 5.min(area.height);
    let centered = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height) / 2,
        area.width,
        height,
    );
    frame.render_widget(paragraph, centered);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};
    use skywatch_adapters::MockWeatherSource;
    use skywatch_types::Timestamp;

    use crate::dashboard::{DashboardController, DashboardOptions, FixedClock};

    fn app() -> App {
        let cities = vec!["Delhi".to_string(), "Mumbai".to_string()];
        let now = Timestamp::from_secs(1_700_000_000);
        let dashboard = DashboardController::new(
            Arc::new(MockWeatherSource::new(cities.clone()).anchored_at(now)),
            DashboardOptions {
                cities,
                ..Default::default()
            },
        )
        .unwrap()
        .with_clock(Arc::new(FixedClock(now)));
        App::new(dashboard, "demo data", Theme::dark())
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_before_data() {
        let screen = draw(&app(), 100, 30);
        assert!(screen.contains("Delhi"));
        assert!(screen.contains("Mumbai"));
        assert!(screen.contains("N/A"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_ready_view() {
        let mut app = app();
        app.dashboard.start();
        tokio::time::sleep(Duration::from_millis(1)).await;
        app.refresh();

        let screen = draw(&app, 120, 32);
        assert!(screen.contains("Temperature"));
        assert!(screen.contains("Last 24 Hours"));
        assert!(!screen.contains("Loading"));
    }

    #[test]
    fn test_too_small() {
        let screen = draw(&app(), 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.toggle_help();
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}

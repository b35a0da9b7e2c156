//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::DashboardState;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for stale data and pending states.
    pub warning: Color,
    /// Color for errors and heat alerts.
    pub critical: Color,
    /// Color for fresh data.
    pub healthy: Color,
    /// Color for cold readings.
    pub cold: Color,
    /// Color of the temperature line.
    pub series: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section headings and labels.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            cold: Color::LightBlue,
            series: Color::LightYellow,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Yellow,
            critical: Color::Red,
            healthy: Color::Green,
            cold: Color::Blue,
            series: Color::Magenta,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for a dashboard state indicator.
    pub fn state_style(&self, state: DashboardState) -> Style {
        match state {
            DashboardState::Idle => Style::default().add_modifier(Modifier::DIM),
            DashboardState::Loading => Style::default().fg(self.warning),
            DashboardState::Ready => Style::default().fg(self.healthy),
            DashboardState::Error => Style::default().fg(self.critical).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for a temperature in °C.
    pub fn temperature_style(&self, celsius: f64) -> Style {
        if celsius > 35.0 {
            Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
        } else if celsius >= 30.0 {
            Style::default().fg(self.warning)
        } else if celsius < 10.0 {
            Style::default().fg(self.cold)
        } else {
            Style::default()
        }
    }
}

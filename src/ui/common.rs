//! Common UI components shared across panels.
//!
//! This module contains the header bar, city tabs, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::data::format::{format_age, format_interval};
use crate::data::{DashboardState, ViewModel};

/// Render the header bar.
///
/// Displays: state indicator, selected city, chart window, data source.
pub fn render_header(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let state_style = app.theme.state_style(view.state);

    let mut spans = vec![
        Span::styled(" ● ", state_style),
        Span::styled("SKYWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            view.selected_city.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(view.state.label(), state_style),
    ];

    if view.loading && view.state == DashboardState::Ready {
        spans.push(Span::styled(
            " (refreshing)",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::raw(view.window.label()));
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.source_description().to_string(),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the city tab bar, numbered for the 1-9 shortcuts.
pub fn render_tabs(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let titles: Vec<Line> = view
        .cities
        .iter()
        .enumerate()
        .map(|(i, city)| {
            if i < 9 {
                Line::from(format!(" {}:{} ", i + 1, city))
            } else {
                Line::from(format!(" {} ", city))
            }
        })
        .collect();

    let selected = view
        .cities
        .iter()
        .position(|c| *c == view.selected_city)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data age, polling intervals, fetch errors, available controls.
/// Temporary status messages take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let updated = match view.last_updated {
        Some(at) => format!("Updated {}", format_age(app.dashboard.now().duration_since(at))),
        None if view.state == DashboardState::Loading => "Loading...".to_string(),
        None => "No data".to_string(),
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", updated),
        Style::default().add_modifier(Modifier::DIM),
    )];

    if let Some(kind) = view.error_state {
        let text = if view.is_stale() {
            format!("| {}, showing last data ", kind.label())
        } else {
            format!("| {} ", kind.label())
        };
        spans.push(Span::styled(text, Style::default().fg(app.theme.critical)));
    }
    if let Some(kind) = view.alerts_error {
        spans.push(Span::styled(
            format!("| alerts: {} ", kind.label()),
            Style::default().fg(app.theme.warning),
        ));
    }

    spans.push(Span::styled(
        format!(
            "| every {}/{} | ←→:city w:window ?:help q:quit",
            format_interval(app.dashboard.readings_interval()),
            format_interval(app.dashboard.alerts_interval()),
        ),
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Cities"),
        Line::from("  ←/→ h/l     Previous/next city"),
        Line::from("  Tab/S-Tab   Previous/next city"),
        Line::from("  1-9         Jump to city"),
        Line::from(""),
        section(" Chart"),
        Line::from("  w           Longer window"),
        Line::from("  W           Shorter window"),
        Line::from(""),
        section(" General"),
        Line::from("  ?           Toggle help"),
        Line::from("  q Esc       Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 18u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

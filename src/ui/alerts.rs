//! Alert feed panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::view::time_label;
use crate::data::{TimeWindow, ViewModel};

/// Render alerts with the selected city's first.
pub fn render(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let city_count = view.city_alerts().count();
    let title = format!(" Alerts ({} here, {} total) ", city_count, view.alerts.len());

    let block = Block::default()
        .title(title)
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if view.alerts.is_empty() {
        let text = if view.alerts_error.is_some() {
            "Alerts unavailable"
        } else {
            "No active alerts"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let (here, elsewhere): (Vec<_>, Vec<_>) = view
        .alerts
        .iter()
        .partition(|a| a.city.eq_ignore_ascii_case(&view.selected_city));

    let items: Vec<ListItem> = here
        .iter()
        .map(|a| (a, true))
        .chain(elsewhere.iter().map(|a| (a, false)))
        .map(|(alert, selected)| {
            let style = if selected {
                Style::default().fg(app.theme.critical).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", time_label(alert.timestamp, TimeWindow::Last5Days)),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{}: ", alert.city), style),
                Span::styled(alert.message.clone(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

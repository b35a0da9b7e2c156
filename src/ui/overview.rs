//! Current conditions and summary statistics panels.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::{DashboardState, Stat, ViewModel};

fn block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

fn optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "N/A".to_string(),
    }
}

/// Render the most recent reading for the selected city.
pub fn render_current(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let block = block(app, " Current ");

    let Some(reading) = &view.latest_reading else {
        let text = match view.state {
            DashboardState::Loading => "Loading...",
            DashboardState::Error => "Unable to load readings",
            _ => "No data",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let temp_style = reading
        .temperature
        .map(|t| app.theme.temperature_style(t))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::raw(" Temperature "),
            Span::styled(optional(reading.temperature, " °C"), temp_style.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw(" Feels like  "),
            Span::raw(optional(reading.feels_like, " °C")),
        ]),
        Line::from(vec![
            Span::raw(" Humidity    "),
            Span::raw(optional(reading.humidity, " %")),
        ]),
        Line::from(vec![
            Span::raw(" Wind        "),
            Span::raw(optional(reading.wind_speed, " m/s")),
        ]),
        Line::from(vec![
            Span::raw(" Condition   "),
            Span::raw(reading.condition.label()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn stat_cell(app: &App, stat: Stat, temperature: bool) -> Cell<'static> {
    match stat {
        Stat::Value(v) if temperature => Cell::from(stat.to_string()).style(app.theme.temperature_style(v)),
        Stat::Value(_) => Cell::from(stat.to_string()),
        Stat::Unavailable => {
            Cell::from(stat.to_string()).style(Style::default().add_modifier(Modifier::DIM))
        }
    }
}

/// Render the aggregate statistics over every held reading.
pub fn render_summary(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let s = &view.summary;
    let title = format!(" Summary ({} samples) ", s.sample_count);

    let header = Row::new(vec!["", "avg", "max", "min"]).style(app.theme.header);

    let rows = vec![
        Row::new(vec![
            Cell::from("Temp °C"),
            stat_cell(app, s.avg_temp, true),
            stat_cell(app, s.max_temp, true),
            stat_cell(app, s.min_temp, true),
        ]),
        Row::new(vec![
            Cell::from("Feels °C"),
            stat_cell(app, s.avg_feels_like, true),
            stat_cell(app, s.max_feels_like, true),
            stat_cell(app, s.min_feels_like, true),
        ]),
        Row::new(vec![
            Cell::from("Humid %"),
            stat_cell(app, s.avg_humidity, false),
        ]),
        Row::new(vec![
            Cell::from("Wind m/s"),
            stat_cell(app, s.avg_wind_speed, false),
        ]),
        Row::new(vec![
            Cell::from("Mostly"),
            Cell::from(s.dominant_condition.map(|c| c.label()).unwrap_or("N/A")),
        ]),
    ];

    let widths = [
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block(app, &title));

    frame.render_widget(table, area);
}

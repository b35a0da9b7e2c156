//! Temperature trend chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{ChartPoint, DashboardState, ViewModel};

/// Render the windowed temperature series as a line chart.
pub fn render(frame: &mut Frame, app: &App, view: &ViewModel, area: Rect) {
    let block = Block::default()
        .title(format!(" Temperature · {} ", view.window.label()))
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if view.chart_series.is_empty() {
        let text = match view.state {
            DashboardState::Loading => "Loading...",
            _ => "No readings in this window",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let points = plot_points(&view.chart_series);
    let (x_bounds, y_bounds) = bounds(&points);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.series))
        .data(&points);

    let first = view.chart_series.first().map(|p| p.time_label.as_str()).unwrap_or("");
    let last = view.chart_series.last().map(|p| p.time_label.as_str()).unwrap_or("");

    let x_axis = Axis::default()
        .style(Style::default().fg(app.theme.border))
        .bounds(x_bounds)
        .labels(vec![Span::raw(first.to_string()), Span::raw(last.to_string())]);

    let y_axis = Axis::default()
        .style(Style::default().fg(app.theme.border))
        .bounds(y_bounds)
        .labels(vec![
            Span::raw(format!("{:.0}", y_bounds[0])),
            Span::raw(format!("{:.0}", (y_bounds[0] + y_bounds[1]) / 2.0)),
            Span::raw(format!("{:.0}", y_bounds[1])),
        ]);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Points as (seconds since the first point, °C).
fn plot_points(series: &[ChartPoint]) -> Vec<(f64, f64)> {
    let origin = series.first().map(|p| p.timestamp.as_millis()).unwrap_or(0);
    series
        .iter()
        .map(|p| ((p.timestamp.as_millis() - origin) as f64 / 1000.0, p.temperature))
        .collect()
}

/// Axis bounds with a one degree margin so a flat series stays visible.
fn bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let x_max = points.iter().map(|p| p.0).fold(0.0, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    ([0.0, x_max.max(1.0)], [(y_min - 1.0).floor(), (y_max + 1.0).ceil()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_types::Timestamp;

    fn point(secs: i64, temperature: f64) -> ChartPoint {
        ChartPoint {
            time_label: String::new(),
            timestamp: Timestamp::from_secs(secs),
            temperature,
        }
    }

    #[test]
    fn test_points_are_relative_to_first() {
        let points = plot_points(&[point(1000, 20.0), point(4600, 21.5)]);
        assert_eq!(points, vec![(0.0, 20.0), (3600.0, 21.5)]);
    }

    #[test]
    fn test_bounds_pad_flat_series() {
        let (x, y) = bounds(&[(0.0, 25.0)]);
        assert_eq!(x, [0.0, 1.0]);
        assert_eq!(y, [24.0, 26.0]);
    }

    #[test]
    fn test_bounds_cover_range() {
        let (x, y) = bounds(&[(0.0, 18.2), (7200.0, 31.7), (3600.0, 24.0)]);
        assert_eq!(x, [0.0, 7200.0]);
        assert_eq!(y, [17.0, 33.0]);
    }
}

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_compact_currency, format_percentage};
use crate::util::styles::{HELP_COLOR, header_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};
use roiplan_core::{Lever, SweepMetric, SweepPoint};

use super::Screen;

pub struct SensitivityScreen;

impl SensitivityScreen {
    pub fn new() -> Self {
        Self
    }

    fn metric_color(metric: SweepMetric) -> Color {
        match metric {
            SweepMetric::Savings => Color::Green,
            SweepMetric::Roi => Color::Cyan,
            SweepMetric::PaybackMonths => Color::Magenta,
        }
    }

    fn format_axis_value(metric: SweepMetric, value: f64) -> String {
        match metric {
            SweepMetric::Savings => format_compact_currency(value),
            SweepMetric::Roi => format!("{value:.2}x"),
            SweepMetric::PaybackMonths => format!("{value:.1}"),
        }
    }

    /// Y-axis bounds padded so flat series stay visible
    fn y_bounds(metric: SweepMetric, points: &[SweepPoint]) -> [f64; 2] {
        let (min, max) = metric.range(points).unwrap_or((0.0, 1.0));
        let padding = (max - min).abs().max(1.0) * 0.1;
        let min = min - padding;
        let max = max + padding;
        // Payback can never be negative
        if metric == SweepMetric::PaybackMonths {
            [min.max(0.0), max]
        } else {
            [min, max]
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let sensitivity = &state.sensitivity_state;
        let lever_spans: Vec<Span> = Lever::ALL
            .iter()
            .flat_map(|lever| {
                let style = if *lever == sensitivity.lever {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default().fg(HELP_COLOR)
                };
                [Span::styled(format!(" {} ", lever.short_label()), style), Span::raw(" ")]
            })
            .collect();

        let mut lever_line = vec![Span::raw("Lever to vary: ")];
        lever_line.extend(lever_spans);

        let lines = vec![
            Line::from(Span::styled(self.title(), header_style())),
            Line::from(lever_line),
            Line::from(vec![
                Span::raw("Steps: "),
                Span::styled(sensitivity.steps.to_string(), Style::default().bold()),
                Span::styled(
                    format!("  ({} points, 0%..40%)", sensitivity.points.len()),
                    Style::default().fg(HELP_COLOR),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &AppState, metric: SweepMetric) {
        let points = &state.sensitivity_state.points;
        let lever = state.sensitivity_state.lever;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", metric.label()));

        if points.is_empty() {
            let paragraph = Paragraph::new(Line::from("  No data to display.")).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let data = metric.series(points);

        let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
        let x_max = data.last().map(|(x, _)| *x).unwrap_or(0.4);
        let [y_min, y_max] = Self::y_bounds(metric, points);

        let dataset = Dataset::default()
            .name(metric.short_label())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Self::metric_color(metric)))
            .data(&data);

        let x_labels = vec![
            Span::raw(format_percentage(x_min)),
            Span::raw(format_percentage((x_min + x_max) / 2.0)),
            Span::raw(format_percentage(x_max)),
        ];

        let y_labels = vec![
            Span::raw(Self::format_axis_value(metric, y_min)),
            Span::raw(Self::format_axis_value(metric, (y_min + y_max) / 2.0)),
            Span::raw(Self::format_axis_value(metric, y_max)),
        ];

        let x_axis = Axis::default()
            .title(lever.label().dark_gray())
            .bounds([x_min, x_max])
            .labels(x_labels);

        let y_axis = Axis::default().bounds([y_min, y_max]).labels(y_labels);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

impl Component for SensitivityScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('v') => {
                let lever = state.sensitivity_state.lever.toggled();
                state.set_lever(lever);
                EventResult::Handled
            }
            KeyCode::Char('[') => {
                state.adjust_sweep_steps(-1);
                EventResult::Handled
            }
            KeyCode::Char(']') => {
                state.adjust_sweep_steps(1);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_header(frame, chunks[0], state);
        for (metric, chunk) in SweepMetric::ALL.into_iter().zip(&chunks[1..4]) {
            self.render_chart(frame, *chunk, state, metric);
        }

        let caption = Paragraph::new(Line::from(Span::styled(
            state.sensitivity_state.lever.caption(),
            Style::default().fg(HELP_COLOR),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(caption, chunks[4]);
    }
}

impl Screen for SensitivityScreen {
    fn title(&self) -> &str {
        "Sensitivity"
    }
}

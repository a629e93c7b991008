use crate::components::{Component, EventResult};
use crate::report::result_rows;
use crate::state::AppState;
use crate::util::format::{format_currency_short, format_months, format_multiple};
use crate::util::styles::{HELP_COLOR, header_style, payback_color, value_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::Screen;

pub struct CalculatorScreen;

impl CalculatorScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(self.title(), header_style())),
            Line::from(vec![
                Span::raw("Explore how "),
                Span::styled("manpower savings", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" and "),
                Span::styled(
                    "productivity gains",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" turn into measurable ROI."),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows: Vec<Row> = result_rows(&state.result)
            .into_iter()
            .map(|(metric, value)| {
                Row::new(vec![
                    Cell::from(metric),
                    Cell::from(Line::from(value).alignment(Alignment::Right)),
                ])
            })
            .collect();

        let header = Row::new(vec![
            Cell::from("Metric"),
            Cell::from(Line::from("Value").alignment(Alignment::Right)),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let table = Table::new(rows, [Constraint::Min(26), Constraint::Length(16)])
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" RESULTS "));

        frame.render_widget(table, area);
    }

    fn render_chip(frame: &mut Frame, area: Rect, label: &str, value: String, style: Style) {
        let lines = vec![
            Line::from(Span::styled(label.to_string(), Style::default().fg(HELP_COLOR))),
            Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn render_chips(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let result = &state.result;
        Self::render_chip(
            frame,
            chunks[0],
            "Savings",
            format_currency_short(result.savings),
            value_style(result.savings),
        );
        Self::render_chip(
            frame,
            chunks[1],
            "ROI (x)",
            format_multiple(result.roi),
            value_style(result.roi),
        );
        Self::render_chip(
            frame,
            chunks[2],
            "Payback",
            format_months(result.payback_months),
            Style::default().fg(payback_color(result.payback_months)),
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let export_line = match &state.calculator_state.last_export {
            Some(path) => Line::from(vec![
                Span::styled("Last export: ", Style::default().fg(HELP_COLOR)),
                Span::styled(path.display().to_string(), Style::default().fg(Color::Green)),
            ]),
            None => Line::from(Span::styled(
                "[e] Download results as CSV",
                Style::default().fg(HELP_COLOR),
            )),
        };

        let lines = vec![
            export_line,
            Line::from(""),
            Line::from(Span::styled(
                "Didactic model for classroom use. It illustrates why an outcome-based, \
                 platform-led operating model can self-fund via tech-for-labor substitution \
                 and productivity improvements.",
                Style::default().fg(HELP_COLOR),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}

impl Component for CalculatorScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('e') => {
                match state.export_csv() {
                    Ok(path) => state.set_status(format!("Saved {}", path.display())),
                    Err(e) => {
                        tracing::warn!(error = %e, "CSV export failed");
                        state.set_error(format!("Export failed: {}", e));
                    }
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(9), // Results table
                Constraint::Length(4), // Metric chips
                Constraint::Min(0),    // Export + caption
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_table(frame, chunks[1], state);
        self.render_chips(frame, chunks[2], state);
        self.render_footer(frame, chunks[3], state);
    }
}

impl Screen for CalculatorScreen {
    fn title(&self) -> &str {
        "Security+ ROI Sandbox"
    }
}

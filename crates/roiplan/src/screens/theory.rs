//! Theory map: the three theory-to-case markdown documents, one after another.

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, WARNING_COLOR, header_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;

const PAGE_SCROLL: u16 = 10;

pub struct TheoryScreen {
    /// Furthest offset that still fills the pane, as of the last render
    max_scroll: u16,
}

impl TheoryScreen {
    pub fn new() -> Self {
        Self { max_scroll: 0 }
    }
}

/// Light markdown styling: headings, quotes, bullets and rules.
///
/// Anything else is passed through as plain text.
pub fn markdown_lines(markdown: &str) -> Vec<Line<'static>> {
    markdown
        .lines()
        .map(|raw| {
            let line = raw.trim_end();
            let trimmed = line.trim_start();

            if trimmed.starts_with('#') {
                let text = trimmed.trim_start_matches('#').trim_start();
                let level = trimmed.len() - trimmed.trim_start_matches('#').len();
                let style = if level <= 1 {
                    header_style().add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default()
                        .fg(HEADER_COLOR)
                        .add_modifier(Modifier::BOLD)
                };
                Line::from(Span::styled(text.to_string(), style))
            } else if let Some(quote) = trimmed.strip_prefix('>') {
                Line::from(vec![
                    Span::styled("│ ", Style::default().fg(HELP_COLOR)),
                    Span::styled(
                        quote.trim_start().to_string(),
                        Style::default()
                            .fg(WARNING_COLOR)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ])
            } else if trimmed == "---" || trimmed == "***" {
                Line::from(Span::styled("─".repeat(40), Style::default().fg(HELP_COLOR)))
            } else if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                let indent = &line[..line.len() - trimmed.len()];
                Line::from(format!("{indent}  • {item}"))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

impl Component for TheoryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let theory = &mut state.theory_state;
        match key.code {
            KeyCode::PageDown => {
                theory.scroll_offset = theory
                    .scroll_offset
                    .saturating_add(PAGE_SCROLL)
                    .min(self.max_scroll);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                theory.scroll_offset = theory
                    .scroll_offset
                    .min(self.max_scroll)
                    .saturating_sub(PAGE_SCROLL);
                EventResult::Handled
            }
            KeyCode::Home => {
                theory.scroll_offset = 0;
                EventResult::Handled
            }
            KeyCode::Char('r') => {
                state.reload_documents();
                state.set_status("Reloaded theory documents".to_string());
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            Line::from(Span::styled("Theory-to-Case Map", header_style())),
            Line::from(Span::styled(
                "These summaries connect course theory to the Security+ case.",
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(""),
        ];

        for (i, doc) in state.theory_state.documents.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(HELP_COLOR),
                )));
            }
            lines.push(Line::from(Span::styled(
                doc.title,
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )));
            lines.push(Line::from(""));
            lines.extend(markdown_lines(&doc.content));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title())),
            )
            .wrap(Wrap { trim: false });

        // Wrapped height includes the borders, as does the area
        let overflow = paragraph
            .line_count(area.width)
            .saturating_sub(usize::from(area.height));
        self.max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        let offset = state.theory_state.scroll_offset.min(self.max_scroll);
        frame.render_widget(paragraph.scroll((offset, 0)), area);
    }
}

impl Screen for TheoryScreen {
    fn title(&self) -> &str {
        "Theory Map"
    }
}

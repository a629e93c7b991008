use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, header_style};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Screen;
use super::theory::markdown_lines;

const ABOUT_TEXT: &str = "\
**Course:** Technology & Digitization of Supply Chains
**School:** SP Jain School of Global Management
**Team:** Group 4 (Sanchit, Midhun, Venarose, Dhruv)

## What this app demonstrates
- We operationalize the case narrative into a quantitative sandbox.
- We connect slide claims to academic frameworks and page-anchored evidence.
- We make the value-proposition shift (from guard-hours to outcomes) measurable.

## Slide taglines you can add
- Value Proposition slide: \"Explore how manpower savings and productivity gains turn into ROI. Scan to try our interactive Security+ model.\"
- Caption near QR/link: \"This sandbox lets you adjust labor share, manpower cuts, and productivity gains to see how Security+ economics deliver measurable ROI.\"

---
If you have our deck or GitHub link, you can jump between slides, this app, and the theory files for full transparency.";

pub struct AboutScreen;

impl AboutScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Component for AboutScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            Line::from(Span::styled(self.title(), header_style())),
            Line::from(""),
        ];
        lines.extend(markdown_lines(&ABOUT_TEXT.replace("**", "")));
        lines.push(Line::from(""));

        let location = match state.data_dir() {
            Some(dir) => format!("Data directory: {}", dir.display()),
            None => "Data directory: (none)".to_string(),
        };
        lines.push(Line::from(Span::styled(
            location,
            Style::default().fg(HELP_COLOR),
        )));
        lines.push(Line::from(Span::styled(
            format!("Docs directory: {}", state.docs_root.display()),
            Style::default().fg(HELP_COLOR),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" About "))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl Screen for AboutScreen {
    fn title(&self) -> &str {
        "About this companion"
    }
}

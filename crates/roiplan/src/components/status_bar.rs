use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.active_tab {
            TabId::Calculator => {
                "1-4: tabs | j/k: field | h/l: adjust | m/p: presets | e: export CSV | ctrl+s: save defaults | q: quit"
            }
            TabId::Sensitivity => {
                "1-4: tabs | j/k: field | h/l: adjust | v: lever | [/]: steps | q: quit"
            }
            TabId::Theory => "1-4: tabs | PgUp/PgDn: scroll | r: reload docs | q: quit",
            TabId::About => "1-4: tabs | q: quit",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(Span::styled(status, Style::default().fg(Color::Green)))
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

//! "Adjust assumptions" panel: the five scenario inputs plus presets.

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency_short;
use crate::util::styles::{HELP_COLOR, focused_block_with_help, header_style};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use roiplan_core::{InputField, Preset, RoiScenario};

const SLIDER_WIDTH: usize = 20;

pub struct Sidebar;

impl Sidebar {
    pub fn new() -> Self {
        Self
    }

    fn format_value(field: InputField, value: f64) -> String {
        if field.is_currency() {
            format_currency_short(value)
        } else {
            format!("{value:.2}")
        }
    }

    /// Text slider for bounded fractional inputs, e.g. `[=====|-----]`
    fn slider(field: InputField, scenario: &RoiScenario) -> Option<String> {
        let bounds = field.bounds();
        let max = bounds.max?;
        let span = max - bounds.min;
        let ratio = if span > 0.0 {
            ((field.get(scenario) - bounds.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * SLIDER_WIDTH as f64).round() as usize;
        Some(format!(
            "{:.2} [{}|{}] {:.2}",
            bounds.min,
            "=".repeat(filled),
            "-".repeat(SLIDER_WIDTH - filled),
            max
        ))
    }

    fn field_lines(state: &AppState) -> Vec<Line<'static>> {
        let focused = state.sidebar_state.focused();
        let mut lines = Vec::new();

        for field in InputField::ALL {
            let is_focused = field == focused;
            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if is_focused { "> " } else { "  " };
            let value = field.get(&state.scenario);

            lines.push(Line::from(Span::styled(
                format!("{prefix}{}", field.label()),
                label_style,
            )));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    Self::format_value(field, value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(slider) = Self::slider(field, &state.scenario) {
                lines.push(Line::from(Span::styled(
                    format!("    {slider}"),
                    Style::default().fg(HELP_COLOR),
                )));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Component for Sidebar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                state.sidebar_state.move_up();
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.sidebar_state.move_down();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
                state.nudge_focused(-1);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                state.nudge_focused(1);
                EventResult::Handled
            }
            KeyCode::Char('m') => {
                state.apply_preset(Preset::MallJewel);
                EventResult::Handled
            }
            KeyCode::Char('p') => {
                state.apply_preset(Preset::PrecinctJtc);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block_with_help(
            " Adjust assumptions ",
            true,
            "j/k select  h/l adjust",
        );

        let mut lines = vec![
            Line::from(Span::styled(
                "Defaults mirror the case narrative: labor ~80% of cost, ~20% manpower \
                 reduction, ~25% productivity gain, platform cost ~$600k.",
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(""),
        ];
        lines.extend(Self::field_lines(state));

        lines.push(Line::from(Span::styled("Quick presets", header_style())));
        for (key, preset) in ['m', 'p'].into_iter().zip(Preset::ALL) {
            lines.push(Line::from(vec![
                Span::styled(format!("  [{key}] "), Style::default().fg(Color::Yellow)),
                Span::raw(preset.name()),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_slider_only_for_bounded_fields() {
        let scenario = RoiScenario::default();
        assert!(Sidebar::slider(InputField::AnnualOpsCost, &scenario).is_none());

        let slider = Sidebar::slider(InputField::ManpowerReduction, &scenario).unwrap();
        // 0.20 of a 0.00..0.50 range fills 8 of 20 cells
        assert_eq!(slider, "0.00 [========|------------] 0.50");
    }

    #[test]
    fn test_keys_move_focus_and_adjust() {
        let mut sidebar = Sidebar::new();
        let mut state = AppState::default();

        assert_eq!(sidebar.handle_key(key(KeyCode::Char('j')), &mut state), EventResult::Handled);
        assert_eq!(state.sidebar_state.focused(), InputField::LaborShare);

        sidebar.handle_key(key(KeyCode::Char('l')), &mut state);
        assert_eq!(state.scenario.labor_share, 0.81);

        sidebar.handle_key(key(KeyCode::Char('p')), &mut state);
        assert_eq!(state.scenario.labor_share, 0.78);

        assert_eq!(
            sidebar.handle_key(key(KeyCode::Char('z')), &mut state),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_focus_stays_in_range() {
        let mut sidebar = Sidebar::new();
        let mut state = AppState::default();

        sidebar.handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.sidebar_state.focused_field, 0);

        for _ in 0..10 {
            sidebar.handle_key(key(KeyCode::Down), &mut state);
        }
        assert_eq!(state.sidebar_state.focused(), InputField::PlatformCost);
    }
}

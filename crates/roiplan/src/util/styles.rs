//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for unfocused borders
pub const BORDER_COLOR: Color = Color::White;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
///
/// # Example
/// ```ignore
/// let block = focused_block_with_help("Adjust assumptions", is_focused, "j/k select  h/l adjust");
/// ```
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Get the appropriate style for a monetary value.
pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

/// Color for a payback period: green within a year, yellow within three, red beyond.
///
/// Zero payback means no platform cost and is shown as neutral.
pub fn payback_color(months: f64) -> Color {
    if months <= 0.0 {
        BORDER_COLOR
    } else if months <= 12.0 {
        POSITIVE_COLOR
    } else if months <= 36.0 {
        WARNING_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Style for a section title inside a panel
pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_COLOR)
        .add_modifier(Modifier::BOLD)
}

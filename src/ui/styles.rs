use crate::domain::{Phase, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Highlighted row (list cursor / focused settings row)
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style, first colour of the theme gradient
pub fn border_style(theme: Theme) -> Style {
    Style::default().fg(theme.start())
}

/// Title style for panes, last colour of the theme gradient
pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme.end())
        .add_modifier(Modifier::BOLD)
}

/// Big clock digits. Breaks use the softer end of the gradient.
pub fn clock_style(theme: Theme, phase: Phase) -> Style {
    let color = match phase {
        Phase::Work => theme.end(),
        Phase::Break => theme.start(),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Phase progress gauge
pub fn gauge_style(theme: Theme) -> Style {
    Style::default().fg(theme.end()).bg(Color::DarkGray)
}

/// Row of the task the current work phase is for
pub fn current_task_style(theme: Theme) -> Style {
    Style::default()
        .fg(theme.end())
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

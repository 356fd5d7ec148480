use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the keys that do something in `mode`
fn hints_for(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " Space start/pause   ",
            "r reset   ",
            "m music   ",
            "↑/↓ move   ",
            "Enter select   ",
            "a add   ",
            "e edit   ",
            "x delete   ",
            "s settings   ",
            "q quit",
        ],
        UiMode::AddingTask | UiMode::EditingTask => vec![" Enter save   ", "Esc cancel"],
        UiMode::Settings => vec![
            " Tab/↑↓ move   ",
            "←/→ theme   ",
            "Enter apply   ",
            "Esc back   ",
            "Ctrl+C quit",
        ],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, mode: UiMode) {
    let hints = Line::from(hints_for(mode).into_iter().map(Span::raw).collect::<Vec<_>>());

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

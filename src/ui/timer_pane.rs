use crate::app::AppState;
use crate::domain::format_clock;
use crate::ui::styles::{
    border_style, clock_style, current_task_style, gauge_style, hint_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Rows of one big glyph
const GLYPH_HEIGHT: usize = 5;

/// 3x5 block digits, indexed by value
const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const COLON: [&str; GLYPH_HEIGHT] = [" ", "█", " ", "█", " "];

/// Render `MM:SS` text as five rows of block glyphs
fn big_clock_lines(clock: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            clock
                .chars()
                .filter_map(|c| match c {
                    ':' => Some(COLON[row]),
                    _ => c.to_digit(10).map(|d| DIGITS[d as usize][row]),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render the countdown pane: phase, clock, progress, current task, controls
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let phase = app.session.phase();

    let date = Local::now().format("%a %b %d");
    let title = format!(" {} Focus Timer ({}) 🍅 {} ", phase.symbol(), date, app.completed_pomodoros);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(title, title_style(theme)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                   // Phase heading
            Constraint::Length(GLYPH_HEIGHT as u16), // Clock
            Constraint::Length(1),                   // Progress
            Constraint::Length(1),                   // Current task
            Constraint::Length(1),                   // Controls
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(phase.title(), title_style(theme))))
        .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let clock = format_clock(app.session.remaining_secs());
    let clock_lines: Vec<Line> = if inner.width as usize >= clock.len() * 4 {
        big_clock_lines(&clock).into_iter().map(Line::raw).collect()
    } else {
        // Too narrow for block glyphs
        vec![Line::raw(""), Line::raw(""), Line::raw(clock)]
    };
    let clock_widget = Paragraph::new(clock_lines)
        .style(clock_style(theme, phase))
        .alignment(Alignment::Center);
    f.render_widget(clock_widget, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(theme))
        .ratio(app.session.progress(&app.settings))
        .label(if app.session.is_running() { "running" } else { "paused" });
    f.render_widget(gauge, chunks[2]);

    let current = match app.current_task() {
        Some(task) => Line::from(vec![
            Span::raw("Current Task: "),
            Span::styled(task.text.clone(), current_task_style(theme)),
        ]),
        None => Line::from(Span::styled("No current task", hint_style())),
    };
    f.render_widget(Paragraph::new(current).alignment(Alignment::Center), chunks[3]);

    let toggle = if app.session.is_running() { "⏸ Pause" } else { "▶ Start" };
    let controls = Line::from(vec![
        Span::styled("[Space] ", title_style(theme)),
        Span::raw(format!("{}   ", toggle)),
        Span::styled("[r] ", title_style(theme)),
        Span::raw("⏭ Reset   "),
        Span::styled("[m] ", title_style(theme)),
        Span::raw("♫ Focus Playlist"),
    ]);
    f.render_widget(Paragraph::new(controls).alignment(Alignment::Center), chunks[4]);
}

use crate::app::{AppState, SettingsField};
use crate::domain::{MinutesField, Theme};
use crate::ui::styles::{
    border_style, default_style, hint_style, modal_title_style, selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label line plus `> value█` input line, cursor only when focused
fn input_lines(label: &str, value: String, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused { modal_title_style() } else { default_style() };
    vec![
        Line::from(Span::styled(label.to_string(), label_style)),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value, modal_title_style()),
            if focused {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]),
    ]
}

/// A one-line "button"
fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused { selected_style() } else { default_style() };
    Line::from(Span::styled(format!("[ {} ]", label), style))
}

fn section<'a>(title: &str, theme: Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(format!(" {} ", title), title_style(theme)))
}

/// Render the settings view: timer form, theme picker and account panel
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let focus = app.settings_form.focus;
    let logged_in = app.account.is_logged_in();

    let outer = section("Settings", theme);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let account_height = if logged_in { 4 } else { 7 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),              // Timer settings
            Constraint::Length(5),              // Theme settings
            Constraint::Length(account_height), // Login / account
            Constraint::Min(0),
        ])
        .split(inner);

    // Timer settings
    let mut timer_lines = Vec::new();
    timer_lines.extend(input_lines(
        MinutesField::Work.label(),
        app.settings_form.work_input.clone(),
        focus == SettingsField::WorkMinutes,
    ));
    timer_lines.extend(input_lines(
        MinutesField::Break.label(),
        app.settings_form.break_input.clone(),
        focus == SettingsField::BreakMinutes,
    ));
    timer_lines.push(button_line("Save Timer Settings", focus == SettingsField::SaveTimer));
    f.render_widget(
        Paragraph::new(timer_lines).block(section("⏱ Timer Settings", theme)),
        chunks[0],
    );

    // Theme settings
    let theme_lines: Vec<Line> = Theme::all()
        .iter()
        .map(|t| {
            let is_current = *t == theme;
            let marker = if is_current { "● " } else { "○ " };
            let style = match (is_current, focus == SettingsField::Theme) {
                (true, true) => selected_style(),
                (true, false) => title_style(theme),
                _ => default_style(),
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(t.start())),
                Span::styled(t.name(), style),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(theme_lines).block(section("🎨 Theme Settings", theme)),
        chunks[1],
    );

    // Login / account
    let (account_title, account_lines) = if logged_in {
        (
            "🔑 Account",
            vec![
                Line::raw(format!("Logged in as: {}", app.account.email)),
                button_line("Logout", focus == SettingsField::Account),
            ],
        )
    } else {
        let mut lines = Vec::new();
        lines.extend(input_lines(
            "Email",
            app.account.email.clone(),
            focus == SettingsField::Email,
        ));
        lines.extend(input_lines(
            "Password",
            app.account.masked_password(),
            focus == SettingsField::Password,
        ));
        lines.push(button_line("Login", focus == SettingsField::Account));
        ("🔑 Login", lines)
    };
    f.render_widget(
        Paragraph::new(account_lines).block(section(account_title, theme)),
        chunks[2],
    );

    let help = Paragraph::new(Line::from(Span::styled(
        "Tab/↑↓ move  ·  ←/→ theme  ·  Enter apply  ·  Esc back",
        hint_style(),
    )));
    f.render_widget(help, chunks[3]);
}

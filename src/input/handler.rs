use crate::app::{AppState, SettingsField};
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
    }
}

/// Handle keys in the session view
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_highlight_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_highlight_down();
            Ok(false)
        }

        // Start / pause the countdown
        KeyCode::Char(' ') => {
            app.toggle_timer(Instant::now());
            Ok(false)
        }

        // Reset to the full phase duration
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        // Focus playlist
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.open_music();
            Ok(false)
        }

        // Select / deselect current task
        KeyCode::Enter => {
            app.select_highlighted();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Edit task
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_highlighted();
            Ok(false)
        }

        // Settings
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_settings();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding or editing a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the settings view
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let focus = app.settings_form.focus;

    match key.code {
        // Back to the session view
        KeyCode::Esc => {
            app.toggle_settings();
            Ok(false)
        }

        KeyCode::Tab | KeyCode::Down => {
            app.settings_focus_next();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.settings_focus_prev();
            Ok(false)
        }

        // Theme picker
        KeyCode::Left if focus == SettingsField::Theme => {
            app.cycle_theme(false);
            Ok(false)
        }
        KeyCode::Right if focus == SettingsField::Theme => {
            app.cycle_theme(true);
            Ok(false)
        }

        KeyCode::Enter => {
            app.settings_activate();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.settings_backspace();
            Ok(false)
        }

        KeyCode::Char(c) if focus.is_text() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.settings_add_char(c);
            Ok(false)
        }

        // Space presses the focused button
        KeyCode::Char(' ') => {
            app.settings_activate();
            Ok(false)
        }

        _ => Ok(false),
    }
}

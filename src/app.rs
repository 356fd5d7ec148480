use crate::config::Config;
use crate::desktop;
use crate::domain::{
    Account, MinutesField, Phase, PhaseComplete, Session, Task, TaskList, Theme, TimerSettings,
    UiMode,
};
use crate::ticker::Ticker;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Input form state for adding or editing a task
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub text: String,
}

/// Rows of the settings view, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    WorkMinutes,
    BreakMinutes,
    SaveTimer,
    Theme,
    Email,
    Password,
    /// Login button when logged out, logout button when logged in
    Account,
}

impl SettingsField {
    /// Rows that can take focus; the credential inputs disappear once logged in
    pub fn visible(logged_in: bool) -> &'static [SettingsField] {
        if logged_in {
            &[
                SettingsField::WorkMinutes,
                SettingsField::BreakMinutes,
                SettingsField::SaveTimer,
                SettingsField::Theme,
                SettingsField::Account,
            ]
        } else {
            &[
                SettingsField::WorkMinutes,
                SettingsField::BreakMinutes,
                SettingsField::SaveTimer,
                SettingsField::Theme,
                SettingsField::Email,
                SettingsField::Password,
                SettingsField::Account,
            ]
        }
    }

    /// Whether typed characters go into this row
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::WorkMinutes | Self::BreakMinutes | Self::Email | Self::Password
        )
    }
}

/// Settings view state: focused row and the raw text of the numeric inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub focus: SettingsField,
    pub work_input: String,
    pub break_input: String,
}

impl SettingsForm {
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            focus: SettingsField::WorkMinutes,
            work_input: settings.get(MinutesField::Work).to_string(),
            break_input: settings.get(MinutesField::Break).to_string(),
        }
    }

    pub fn input(&self, field: MinutesField) -> &str {
        match field {
            MinutesField::Work => &self.work_input,
            MinutesField::Break => &self.break_input,
        }
    }
}

/// Main application state
pub struct AppState {
    pub settings: TimerSettings,
    pub session: Session,
    pub ticker: Ticker,
    pub tasks: TaskList,
    pub highlighted: usize, // Cursor row in the task list
    pub theme: Theme,
    pub account: Account,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub settings_form: SettingsForm,
    pub playlist_url: String,
    pub notifications: bool,
    pub completed_pomodoros: u32, // Work phases run to zero this session
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let settings = config.timer;
        Self {
            settings,
            session: Session::new(&settings),
            ticker: Ticker::new(),
            tasks: TaskList::new(),
            highlighted: 0,
            theme: config.theme,
            account: Account::default(),
            ui_mode: UiMode::Normal,
            input_form: None,
            settings_form: SettingsForm::new(&settings),
            playlist_url: config.playlist_url.clone(),
            notifications: config.notifications,
            completed_pomodoros: 0,
        }
    }

    /// Start or pause the countdown
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.session.toggle() {
            self.ticker.arm(now);
            info!(
                phase = self.session.phase().name(),
                remaining = self.session.remaining_secs(),
                "countdown started"
            );
        } else {
            self.ticker.disarm();
            info!(remaining = self.session.remaining_secs(), "countdown paused");
        }
    }

    /// Stop and reload the current phase's full duration
    pub fn reset_timer(&mut self) {
        self.session.reset(&self.settings);
        self.ticker.disarm();
        info!(
            phase = self.session.phase().name(),
            remaining = self.session.remaining_secs(),
            "countdown reset"
        );
    }

    /// Apply every countdown second that fell due up to `now`
    pub fn tick(&mut self, now: Instant) {
        let due = self.ticker.due(now);
        for _ in 0..due {
            if let Some(done) = self.session.tick(&self.settings) {
                self.finish_phase(done);
                break;
            }
        }
    }

    fn finish_phase(&mut self, done: PhaseComplete) {
        self.ticker.disarm();

        if done.finished == Phase::Work {
            self.completed_pomodoros += 1;
            if let Some(task) = self.tasks.complete_selected() {
                info!(task = %task.text, "task completed by finished work phase");
            }
        }

        info!(
            finished = done.finished.name(),
            next = done.next.name(),
            remaining = self.session.remaining_secs(),
            "phase finished"
        );

        if self.notifications {
            desktop::notify_phase_finished(done.finished, done.next);
        }
    }

    /// Cancel any pending tick before the app goes away
    pub fn shutdown(&mut self) {
        if self.ticker.is_armed() {
            self.ticker.disarm();
            debug!("countdown ticker cancelled");
        }
    }

    /// Open the focus playlist in the browser
    pub fn open_music(&self) {
        match desktop::open_url(&self.playlist_url) {
            Ok(()) => info!(url = %self.playlist_url, "opened playlist"),
            Err(e) => warn!(url = %self.playlist_url, error = %e, "failed to open playlist"),
        }
    }

    /// Task under the list cursor
    pub fn highlighted_task(&self) -> Option<&Task> {
        self.tasks.as_slice().get(self.highlighted)
    }

    /// The task the current work phase is for
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.selected()
    }

    /// Move the list cursor up
    pub fn move_highlight_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Move the list cursor down
    pub fn move_highlight_down(&mut self) {
        if self.highlighted + 1 < self.tasks.len() {
            self.highlighted += 1;
        }
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, text: &str) -> Option<Uuid> {
        let id = self.tasks.add(text)?;
        info!(%id, text = text.trim(), "task added");
        Some(id)
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the highlighted task in the editor
    pub fn start_edit_task(&mut self) {
        let Some(id) = self.highlighted_task().map(|t| t.id) else {
            return;
        };
        if let Some(text) = self.tasks.start_edit(id) {
            self.input_form = Some(InputFormState { text });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Add character to input form
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    /// Backspace in input form
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Submit the input form. Blank text keeps the form open.
    pub fn submit_input_form(&mut self) {
        let Some(text) = self.input_form.as_ref().map(|f| f.text.clone()) else {
            return;
        };

        let accepted = match self.ui_mode {
            UiMode::AddingTask => {
                let added = self.add_task(&text).is_some();
                if added {
                    self.highlighted = self.tasks.len() - 1;
                }
                added
            }
            UiMode::EditingTask => {
                let id = self.tasks.editing_id();
                let committed = self.tasks.commit_edit(&text);
                if committed {
                    info!(id = ?id, text = text.trim(), "task edited");
                }
                committed
            }
            _ => false,
        };

        if accepted {
            self.input_form = None;
            self.ui_mode = UiMode::Normal;
        } else {
            debug!("blank task text ignored");
        }
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        if self.ui_mode == UiMode::EditingTask {
            self.tasks.cancel_edit();
        }
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Delete the highlighted task
    pub fn delete_highlighted(&mut self) {
        let Some(id) = self.highlighted_task().map(|t| t.id) else {
            return;
        };
        if let Some(task) = self.tasks.delete(id) {
            info!(%id, text = %task.text, "task deleted");
        }
        if self.highlighted >= self.tasks.len() {
            self.highlighted = self.tasks.len().saturating_sub(1);
        }
    }

    /// Select or deselect the highlighted task as the current one
    pub fn select_highlighted(&mut self) {
        let Some(id) = self.highlighted_task().map(|t| t.id) else {
            return;
        };
        if self.tasks.select(id, self.session.is_running()) {
            debug!(selected = ?self.tasks.selected_id(), "current task changed");
        } else {
            debug!("task selection is locked while the countdown runs");
        }
    }

    /// Show or hide the settings view
    pub fn toggle_settings(&mut self) {
        if self.ui_mode == UiMode::Settings {
            self.ui_mode = UiMode::Normal;
        } else {
            self.settings_form = SettingsForm::new(&self.settings);
            self.ui_mode = UiMode::Settings;
        }
    }

    fn move_settings_focus(&mut self, forward: bool) {
        let fields = SettingsField::visible(self.account.is_logged_in());
        let idx = fields
            .iter()
            .position(|f| *f == self.settings_form.focus)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % fields.len()
        } else {
            (idx + fields.len() - 1) % fields.len()
        };
        self.settings_form.focus = fields[next];
    }

    pub fn settings_focus_next(&mut self) {
        self.move_settings_focus(true);
    }

    pub fn settings_focus_prev(&mut self) {
        self.move_settings_focus(false);
    }

    /// Re-read a numeric input into the live settings
    fn apply_minutes_input(&mut self, field: MinutesField) {
        let minutes = field.resolve(self.settings_form.input(field));
        self.settings.set(field, minutes);
    }

    /// Type into the focused settings row
    pub fn settings_add_char(&mut self, c: char) {
        match self.settings_form.focus {
            SettingsField::WorkMinutes => {
                self.settings_form.work_input.push(c);
                self.apply_minutes_input(MinutesField::Work);
            }
            SettingsField::BreakMinutes => {
                self.settings_form.break_input.push(c);
                self.apply_minutes_input(MinutesField::Break);
            }
            SettingsField::Email => self.account.email.push(c),
            SettingsField::Password => self.account.password.push(c),
            _ => {}
        }
    }

    /// Backspace in the focused settings row
    pub fn settings_backspace(&mut self) {
        match self.settings_form.focus {
            SettingsField::WorkMinutes => {
                self.settings_form.work_input.pop();
                self.apply_minutes_input(MinutesField::Work);
            }
            SettingsField::BreakMinutes => {
                self.settings_form.break_input.pop();
                self.apply_minutes_input(MinutesField::Break);
            }
            SettingsField::Email => {
                self.account.email.pop();
            }
            SettingsField::Password => {
                self.account.password.pop();
            }
            _ => {}
        }
    }

    /// Enter on the focused settings row
    pub fn settings_activate(&mut self) {
        match self.settings_form.focus {
            SettingsField::WorkMinutes | SettingsField::BreakMinutes | SettingsField::SaveTimer => {
                self.save_timer_settings()
            }
            SettingsField::Theme => self.cycle_theme(true),
            SettingsField::Email | SettingsField::Password => self.login(),
            SettingsField::Account => {
                if self.account.is_logged_in() {
                    self.logout();
                } else {
                    self.login();
                }
            }
        }
    }

    /// Load the work duration into the clock and close the panel
    pub fn save_timer_settings(&mut self) {
        self.session.set_remaining(self.settings.phase_secs(Phase::Work));
        self.settings_form.work_input = self.settings.work_minutes.to_string();
        self.settings_form.break_input = self.settings.break_minutes.to_string();
        self.ui_mode = UiMode::Normal;
        info!(
            work_minutes = self.settings.work_minutes,
            break_minutes = self.settings.break_minutes,
            "timer settings saved"
        );
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            info!(theme = theme.name(), "theme changed");
        }
    }

    pub fn cycle_theme(&mut self, forward: bool) {
        self.set_theme(self.theme.cycle(forward));
    }

    /// Cosmetic login; closes the panel when both fields are filled
    pub fn login(&mut self) {
        match self.account.login() {
            Ok(()) => {
                info!(email = %self.account.email, "logged in");
                self.ui_mode = UiMode::Normal;
            }
            Err(e) => debug!(error = %e, "login ignored"),
        }
    }

    pub fn logout(&mut self) {
        self.account.logout();
        info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let config = Config {
            notifications: false,
            ..Config::default()
        };
        AppState::new(&config)
    }

    /// Start the countdown and let it run until the phase flips
    fn run_phase(app: &mut AppState) {
        let start = Instant::now();
        let secs = app.session.remaining_secs() as u64;
        app.toggle_timer(start);
        app.tick(start + Duration::from_secs(secs));
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.session.remaining_secs(), 1500);
        assert_eq!(app.session.phase(), Phase::Work);
        assert!(!app.session.is_running());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.is_empty());
        assert_eq!(app.theme, Theme::BlackWhite);
    }

    #[test]
    fn test_toggle_arms_and_disarms_ticker() {
        let mut app = create_test_app();
        let start = Instant::now();

        app.toggle_timer(start);
        assert!(app.session.is_running());
        assert!(app.ticker.is_armed());

        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.session.remaining_secs(), 1497);

        app.toggle_timer(start + Duration::from_secs(3));
        assert!(!app.ticker.is_armed());

        app.tick(start + Duration::from_secs(60));
        assert_eq!(app.session.remaining_secs(), 1497);
    }

    #[test]
    fn test_reset_timer() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.toggle_timer(start);
        app.tick(start + Duration::from_secs(100));

        app.reset_timer();
        assert!(!app.session.is_running());
        assert!(!app.ticker.is_armed());
        assert_eq!(app.session.remaining_secs(), 1500);
    }

    #[test]
    fn test_work_break_cycle() {
        let mut app = create_test_app();

        run_phase(&mut app);
        assert_eq!(app.session.phase(), Phase::Break);
        assert_eq!(app.session.remaining_secs(), 300);
        assert!(!app.session.is_running());
        assert!(!app.ticker.is_armed());

        run_phase(&mut app);
        assert_eq!(app.session.phase(), Phase::Work);
        assert_eq!(app.session.remaining_secs(), 1500);
        assert_eq!(app.completed_pomodoros, 1);
    }

    #[test]
    fn test_late_tick_stops_at_phase_end() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.toggle_timer(start);

        // Far more seconds than the work phase; the break must not start counting
        app.tick(start + Duration::from_secs(5000));
        assert_eq!(app.session.phase(), Phase::Break);
        assert_eq!(app.session.remaining_secs(), 300);
    }

    #[test]
    fn test_work_completion_marks_selected_task() {
        let mut app = create_test_app();
        let id = app.add_task("Write report").unwrap();
        app.add_task("Other").unwrap();
        app.select_highlighted();
        assert_eq!(app.tasks.selected_id(), Some(id));

        run_phase(&mut app);

        assert!(app.tasks.get(id).unwrap().completed);
        assert!(app.tasks.selected_id().is_none());
        assert!(!app.tasks.as_slice()[1].completed);
    }

    #[test]
    fn test_break_completion_leaves_tasks_alone() {
        let mut app = create_test_app();
        run_phase(&mut app);
        assert_eq!(app.session.phase(), Phase::Break);

        let id = app.add_task("During break").unwrap();
        app.select_highlighted();

        run_phase(&mut app);

        assert!(!app.tasks.get(id).unwrap().completed);
        assert_eq!(app.tasks.selected_id(), Some(id));
    }

    #[test]
    fn test_selection_locked_while_running() {
        let mut app = create_test_app();
        app.add_task("a");
        let b = app.add_task("b").unwrap();
        app.select_highlighted();
        let a = app.tasks.selected_id();

        app.toggle_timer(Instant::now());
        app.move_highlight_down();
        app.select_highlighted();
        assert_eq!(app.tasks.selected_id(), a);

        app.toggle_timer(Instant::now());
        app.select_highlighted();
        assert_eq!(app.tasks.selected_id(), Some(b));
    }

    #[test]
    fn test_add_task_via_form() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "  ".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        app.input_form = Some(InputFormState::default());
        for c in "Buy milk".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.as_slice()[0].text, "Buy milk");
        assert!(!app.tasks.as_slice()[0].completed);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_edit_task_via_form() {
        let mut app = create_test_app();
        let id = app.add_task("Draft").unwrap();

        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::EditingTask);
        assert_eq!(app.input_form.as_ref().unwrap().text, "Draft");

        for _ in 0..5 {
            app.input_form_backspace();
        }
        app.input_form_add_char(' ');
        app.submit_input_form();
        assert_eq!(app.tasks.get(id).unwrap().text, "Draft");
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        for c in "Final".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();
        assert_eq!(app.tasks.get(id).unwrap().text, "Final");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.editing_id().is_none());
    }

    #[test]
    fn test_cancel_edit() {
        let mut app = create_test_app();
        let id = app.add_task("Keep me").unwrap();
        app.start_edit_task();
        app.input_form_add_char('!');
        app.cancel_input_form();

        assert_eq!(app.tasks.get(id).unwrap().text, "Keep me");
        assert!(app.tasks.editing_id().is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_selected_task_clears_selection() {
        let mut app = create_test_app();
        app.add_task("a");
        app.add_task("b");
        app.move_highlight_down();
        app.select_highlighted();
        assert!(app.current_task().is_some());

        app.delete_highlighted();
        assert!(app.current_task().is_none());
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.highlighted, 0);
    }

    #[test]
    fn test_highlight_bounds() {
        let mut app = create_test_app();
        app.move_highlight_down();
        assert_eq!(app.highlighted, 0);

        app.add_task("a");
        app.add_task("b");
        app.move_highlight_down();
        app.move_highlight_down();
        assert_eq!(app.highlighted, 1);

        app.move_highlight_up();
        app.move_highlight_up();
        assert_eq!(app.highlighted, 0);
    }

    #[test]
    fn test_settings_edits_apply_live() {
        let mut app = create_test_app();
        app.toggle_settings();
        assert_eq!(app.ui_mode, UiMode::Settings);
        assert_eq!(app.settings_form.work_input, "25");

        app.settings_backspace();
        app.settings_backspace();
        assert_eq!(app.settings.work_minutes, 25);

        app.settings_add_char('4');
        app.settings_add_char('0');
        assert_eq!(app.settings.work_minutes, 40);
        // Only saving touches the clock
        assert_eq!(app.session.remaining_secs(), 1500);

        app.settings_focus_next();
        app.settings_backspace();
        app.settings_add_char('x');
        assert_eq!(app.settings.break_minutes, 5);
    }

    #[test]
    fn test_save_timer_settings() {
        let mut app = create_test_app();
        app.toggle_settings();
        app.settings_backspace();
        app.settings_backspace();
        app.settings_add_char('9');
        app.settings_add_char('0');
        assert_eq!(app.settings.work_minutes, 60);

        app.settings_activate();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.session.remaining_secs(), 3600);
        assert_eq!(app.settings_form.work_input, "60");
    }

    #[test]
    fn test_save_applies_work_duration_in_break() {
        let mut app = create_test_app();
        run_phase(&mut app);
        assert_eq!(app.session.phase(), Phase::Break);

        app.toggle_settings();
        app.save_timer_settings();
        assert_eq!(app.session.phase(), Phase::Break);
        assert_eq!(app.session.remaining_secs(), 1500);
    }

    #[test]
    fn test_settings_focus_wraps() {
        let mut app = create_test_app();
        app.toggle_settings();
        app.settings_focus_prev();
        assert_eq!(app.settings_form.focus, SettingsField::Account);
        app.settings_focus_next();
        assert_eq!(app.settings_form.focus, SettingsField::WorkMinutes);
    }

    #[test]
    fn test_theme_selection() {
        let mut app = create_test_app();
        app.toggle_settings();
        app.settings_form.focus = SettingsField::Theme;

        app.settings_activate();
        assert_eq!(app.theme, Theme::BlueRed);
        assert_eq!(app.ui_mode, UiMode::Settings);

        app.cycle_theme(false);
        assert_eq!(app.theme, Theme::BlackWhite);

        app.set_theme(Theme::RedGreen);
        assert_eq!(app.theme, Theme::RedGreen);
    }

    #[test]
    fn test_login_and_logout() {
        let mut app = create_test_app();
        app.toggle_settings();
        app.settings_form.focus = SettingsField::Email;
        for c in "me@example.com".chars() {
            app.settings_add_char(c);
        }

        app.settings_activate();
        assert!(!app.account.is_logged_in());
        assert_eq!(app.ui_mode, UiMode::Settings);

        app.settings_focus_next();
        assert_eq!(app.settings_form.focus, SettingsField::Password);
        for c in "secret".chars() {
            app.settings_add_char(c);
        }
        app.settings_activate();
        assert!(app.account.is_logged_in());
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.toggle_settings();
        app.settings_form.focus = SettingsField::Account;
        app.settings_activate();
        assert!(!app.account.is_logged_in());
        assert!(app.account.email.is_empty());
        assert!(app.account.password.is_empty());
    }

    #[test]
    fn test_logged_in_hides_credential_fields() {
        assert!(!SettingsField::visible(true).contains(&SettingsField::Email));
        assert!(SettingsField::visible(false).contains(&SettingsField::Password));
    }

    #[test]
    fn test_shutdown_cancels_ticker() {
        let mut app = create_test_app();
        let start = Instant::now();
        app.toggle_timer(start);
        app.shutdown();
        app.tick(start + Duration::from_secs(10));
        assert_eq!(app.session.remaining_secs(), 1500);
    }
}

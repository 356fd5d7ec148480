use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the central card gets, in columns
pub const CARD_MAX_WIDTH: u16 = 64;

/// Rows taken by the timer pane, borders included
pub const TIMER_PANE_HEIGHT: u16 = 11;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    /// Whole card below the hint bar (settings view)
    pub card_area: Rect,
    /// Session view: clock on top, tasks below
    pub timer_area: Rect,
    pub task_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - A centred card no wider than `CARD_MAX_WIDTH`
///   - Session view splits it into timer pane and task pane
pub fn create_layout(area: Rect) -> MainLayout {
    // Split into top bar and main content
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let card_area = centered_column(main_chunks[1], CARD_MAX_WIDTH);

    let session_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TIMER_PANE_HEIGHT), // Timer pane
            Constraint::Min(0),                    // Task pane
        ])
        .split(card_area);

    MainLayout {
        keybindings_area,
        card_area,
        timer_area: session_split[0],
        task_area: session_split[1],
    }
}

/// Horizontally centre a column of at most `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Create centered modal area (for the task input form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

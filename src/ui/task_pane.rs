use crate::app::AppState;
use crate::domain::{Task, Theme};
use crate::ui::styles::{
    border_style, current_task_style, default_style, done_style, hint_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let done = app.tasks.as_slice().iter().filter(|t| t.completed).count();
    let title = format!(" Tasks ({}/{}) ", done, app.tasks.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(title, title_style(theme)));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks yet. Press 'a' to add one.",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let selected = app.tasks.selected_id();
    let editing = app.tasks.editing_id();

    let items: Vec<ListItem> = app
        .tasks
        .as_slice()
        .iter()
        .map(|task| {
            let line = create_task_line(
                task,
                selected == Some(task.id),
                editing == Some(task.id),
                theme,
            );
            ListItem::new(line).style(default_style())
        })
        .collect();

    // Stateful so the highlighted row stays scrolled into view
    let mut state = ListState::default();
    state.select(Some(app.highlighted));

    let list = List::new(items).block(block).highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task
/// Format: ▶ [✓] Write proposal  ✎  · done 14:05
fn create_task_line(task: &Task, is_current: bool, is_editing: bool, theme: Theme) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(if is_current { "▶ " } else { "  " }));
    spans.push(Span::raw(if task.completed { "[✓] " } else { "[ ] " }));

    let text_style = if task.completed {
        done_style()
    } else if is_current {
        current_task_style(theme)
    } else {
        default_style()
    };
    spans.push(Span::styled(task.text.clone(), text_style));

    if is_editing {
        spans.push(Span::styled("  ✎".to_string(), hint_style()));
    }

    if let Some(at) = task.completed_at {
        spans.push(Span::styled(format!("  · done {}", at.format("%H:%M")), hint_style()));
    }

    Line::from(spans)
}

use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single entry on the task list
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Opaque unique identifier
    pub id: Uuid,
    /// Display text, never empty after trimming
    pub text: String,
    pub completed: bool,
    /// When a finished work phase marked the task completed
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            completed_at: None,
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Local::now());
    }
}

/// Ordered tasks plus the "current" selection and the single edit slot
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    selected: Option<Uuid>,
    editing: Option<Uuid>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a task. Whitespace-only text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Put a task into edit mode, returning its current text to seed the editor.
    /// Any other task being edited leaves edit mode.
    pub fn start_edit(&mut self, id: Uuid) -> Option<String> {
        let text = self.get(id)?.text.clone();
        self.editing = Some(id);
        Some(text)
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing
    }

    /// Store replacement text for the task in edit mode. Empty text is
    /// discarded and the task stays in edit mode.
    pub fn commit_edit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(id) = self.editing else {
            return false;
        };
        if let Some(task) = self.get_mut(id) {
            task.text = text.to_string();
        }
        self.editing = None;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove a task, dropping the selection and edit slot if they pointed at it
    pub fn delete(&mut self, id: Uuid) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(self.tasks.remove(idx))
    }

    /// Toggle the selection onto `id`. Refused while the countdown runs.
    pub fn select(&mut self, id: Uuid, countdown_running: bool) -> bool {
        if countdown_running || self.get(id).is_none() {
            return false;
        }
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        true
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Mark the selected task completed and clear the selection
    pub fn complete_selected(&mut self) -> Option<&Task> {
        let id = self.selected.take()?;
        let task = self.get_mut(id)?;
        task.complete();
        Some(&*task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list_with(texts: &[&str]) -> (TaskList, Vec<Uuid>) {
        let mut list = TaskList::new();
        let ids = texts.iter().filter_map(|t| list.add(t)).collect();
        (list, ids)
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        let id = list.add("  Buy milk ").unwrap();

        assert_eq!(list.len(), 1);
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_whitespace_is_ignored() {
        let mut list = TaskList::new();
        assert!(list.add("  ").is_none());
        assert!(list.add("").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let (list, _) = list_with(&["one", "two", "three"]);
        let texts: Vec<&str> = list.as_slice().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, ids) = list_with(&["same", "same"]);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_edit_commit() {
        let (mut list, ids) = list_with(&["draft"]);
        assert_eq!(list.start_edit(ids[0]), Some("draft".to_string()));
        assert_eq!(list.editing_id(), Some(ids[0]));

        assert!(list.commit_edit("  final  "));
        assert_eq!(list.get(ids[0]).unwrap().text, "final");
        assert!(list.editing_id().is_none());
    }

    #[test]
    fn test_edit_empty_keeps_text_and_mode() {
        let (mut list, ids) = list_with(&["draft"]);
        list.start_edit(ids[0]);

        assert!(!list.commit_edit("   "));
        assert_eq!(list.get(ids[0]).unwrap().text, "draft");
        assert_eq!(list.editing_id(), Some(ids[0]));
    }

    #[test]
    fn test_edit_moves_between_tasks() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.start_edit(ids[0]);
        list.start_edit(ids[1]);
        assert_eq!(list.editing_id(), Some(ids[1]));

        list.cancel_edit();
        assert!(list.editing_id().is_none());
    }

    #[test]
    fn test_delete_clears_selection() {
        let (mut list, ids) = list_with(&["a", "b"]);
        assert!(list.select(ids[0], false));

        let removed = list.delete(ids[0]).unwrap();
        assert_eq!(removed.text, "a");
        assert!(list.selected_id().is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.select(ids[0], false);
        list.delete(ids[1]);
        assert_eq!(list.selected_id(), Some(ids[0]));
    }

    #[test]
    fn test_select_toggles() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.select(ids[0], false);
        assert_eq!(list.selected_id(), Some(ids[0]));

        list.select(ids[1], false);
        assert_eq!(list.selected_id(), Some(ids[1]));

        list.select(ids[1], false);
        assert!(list.selected_id().is_none());
    }

    #[test]
    fn test_select_refused_while_running() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.select(ids[0], false);

        assert!(!list.select(ids[1], true));
        assert!(!list.select(ids[0], true));
        assert_eq!(list.selected_id(), Some(ids[0]));
    }

    #[test]
    fn test_complete_selected() {
        let (mut list, ids) = list_with(&["a", "b"]);
        list.select(ids[1], false);

        let done = list.complete_selected().unwrap();
        assert_eq!(done.id, ids[1]);
        assert!(done.completed);
        assert!(done.completed_at.is_some());
        assert!(list.selected_id().is_none());
        assert!(!list.get(ids[0]).unwrap().completed);

        assert!(list.complete_selected().is_none());
    }
}

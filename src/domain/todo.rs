use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// One checklist item inside a [`Todo`]. `completed` toggles independently
/// of the surrounding entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// A dated journal entry: a title, free-text content, an ordered checklist
/// and a free-text reflection. `id`, `user_id` and `created_at` are fixed at
/// creation; `updated_at` moves on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub tasks: Vec<Task>,
    pub reflection: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Caller is expected to pass fields that already went through
    /// [`TodoDraft::normalized`].
    pub fn new(
        user_id: Uuid,
        title: String,
        content: String,
        tasks: Vec<Task>,
        reflection: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            tasks,
            reflection,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// True when the checklist is non-empty and every task is done. An entry
    /// with zero tasks is never fully completed.
    pub fn is_fully_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.completed)
    }
}

/// Unvalidated input for creating or replacing a [`Todo`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub content: String,
    pub tasks: Vec<Task>,
    pub reflection: String,
}

impl TodoDraft {
    /// Trims all text fields, drops tasks whose text is empty after
    /// trimming, and enforces the persistence invariants: a non-empty title
    /// and at least one surviving task.
    pub fn normalized(self) -> Result<TodoDraft, DomainError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(DomainError::EmptyTitle);
        }

        let tasks: Vec<Task> = self
            .tasks
            .into_iter()
            .filter_map(|task| {
                let text = task.text.trim().to_owned();
                (!text.is_empty()).then_some(Task {
                    text,
                    completed: task.completed,
                })
            })
            .collect();
        if tasks.is_empty() {
            return Err(DomainError::NoTasks);
        }

        Ok(TodoDraft {
            title,
            content: self.content.trim().to_owned(),
            tasks,
            reflection: self.reflection.trim().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, tasks: Vec<Task>) -> TodoDraft {
        TodoDraft {
            title: title.to_owned(),
            tasks,
            ..TodoDraft::default()
        }
    }

    #[test]
    fn normalized_trims_fields_and_drops_empty_tasks() {
        let input = TodoDraft {
            title: "  monday plan  ".to_owned(),
            content: " write report ".to_owned(),
            tasks: vec![
                Task::new("  draft intro  "),
                Task::new("   "),
                Task::new(""),
                Task::new("send mail"),
            ],
            reflection: " went fine ".to_owned(),
        };

        let draft = input.normalized().unwrap();
        assert_eq!(draft.title, "monday plan");
        assert_eq!(draft.content, "write report");
        assert_eq!(draft.reflection, "went fine");
        assert_eq!(draft.tasks.len(), 2);
        assert_eq!(draft.tasks[0].text, "draft intro");
        assert_eq!(draft.tasks[1].text, "send mail");
    }

    #[test]
    fn normalized_rejects_blank_title() {
        let err = draft("   ", vec![Task::new("a")]).normalized().unwrap_err();
        assert_eq!(err, DomainError::EmptyTitle);
    }

    #[test]
    fn normalized_rejects_drafts_without_a_single_real_task() {
        let err = draft("plan", vec![Task::new("  "), Task::new("")])
            .normalized()
            .unwrap_err();
        assert_eq!(err, DomainError::NoTasks);

        let err = draft("plan", Vec::new()).normalized().unwrap_err();
        assert_eq!(err, DomainError::NoTasks);
    }

    #[test]
    fn zero_task_todo_is_never_fully_completed() {
        let todo = Todo::new(
            Uuid::new_v4(),
            "plan".into(),
            String::new(),
            Vec::new(),
            String::new(),
        );
        assert!(!todo.is_fully_completed());
    }

    #[test]
    fn serialized_layout_uses_camel_case_keys() {
        let todo = Todo::new(
            Uuid::new_v4(),
            "plan".into(),
            String::new(),
            vec![Task::new("a")],
            String::new(),
        );
        let json = serde_json::to_value(&todo).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["id", "userId", "title", "content", "tasks", "reflection", "createdAt", "updatedAt"] {
            assert!(keys.contains(&key), "missing key {key}");
        }
    }
}

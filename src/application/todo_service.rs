use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::data::record_store::{self, RecordStore};
use crate::domain::error::DomainError;
use crate::domain::todo::{Todo, TodoDraft};

/// User-scoped CRUD over the `todos` collection. Every operation is a full
/// read-modify-write against the record store; nothing here is atomic
/// against a second concurrent writer, which is an accepted limitation of
/// the single-tab storage model.
#[derive(Clone)]
pub struct TodoService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> TodoService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All entries owned by `user_id`, in stored (insertion) order. Callers
    /// re-sort for display, see [`crate::application::filter::newest_first`].
    pub fn list_by_user(&self, user_id: Uuid) -> Vec<Todo> {
        let todos: Vec<Todo> = self.store.read_all(record_store::TODOS);
        todos
            .into_iter()
            .filter(|todo| todo.user_id == user_id)
            .collect()
    }

    /// Linear scan over the full collection. Does not check ownership; use
    /// [`Self::get_owned`] before exposing the record to a user.
    pub fn get(&self, id: Uuid) -> Option<Todo> {
        let todos: Vec<Todo> = self.store.read_all(record_store::TODOS);
        todos.into_iter().find(|todo| todo.id == id)
    }

    /// The ownership check the store itself does not enforce: an entry
    /// owned by someone else is [`DomainError::Forbidden`].
    pub fn get_owned(&self, id: Uuid, user_id: Uuid) -> Result<Todo, DomainError> {
        let todo = self.get(id).ok_or(DomainError::TodoNotFound(id))?;
        if todo.user_id != user_id {
            return Err(DomainError::Forbidden);
        }
        Ok(todo)
    }

    /// Validates the draft and appends a new entry. Nothing is written when
    /// validation fails.
    #[instrument(skip(self, draft))]
    pub fn create(&self, user_id: Uuid, draft: TodoDraft) -> Result<Todo, DomainError> {
        let draft = draft.normalized()?;
        let todo = Todo::new(
            user_id,
            draft.title,
            draft.content,
            draft.tasks,
            draft.reflection,
        );

        let mut todos: Vec<Todo> = self.store.read_all(record_store::TODOS);
        todos.push(todo.clone());
        self.store.write_all(record_store::TODOS, &todos);

        info!(todo_id = %todo.id, user_id = %user_id, "todo created");
        Ok(todo)
    }

    /// Full-record replace. `id`, `user_id` and `created_at` are taken from
    /// the stored record; `updated_at` becomes now. No write happens on any
    /// failure path.
    #[instrument(skip(self, draft))]
    pub fn update(&self, id: Uuid, user_id: Uuid, draft: TodoDraft) -> Result<Todo, DomainError> {
        let draft = draft.normalized()?;

        let mut todos: Vec<Todo> = self.store.read_all(record_store::TODOS);
        let Some(existing) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Err(DomainError::TodoNotFound(id));
        };
        if existing.user_id != user_id {
            return Err(DomainError::Forbidden);
        }

        existing.title = draft.title;
        existing.content = draft.content;
        existing.tasks = draft.tasks;
        existing.reflection = draft.reflection;
        existing.updated_at = Utc::now();
        let updated = existing.clone();

        self.store.write_all(record_store::TODOS, &todos);
        info!(todo_id = %id, "todo updated");
        Ok(updated)
    }

    /// Removes the entry with the given id; a benign no-op when absent.
    #[instrument(skip(self))]
    pub fn delete(&self, id: Uuid) {
        let mut todos: Vec<Todo> = self.store.read_all(record_store::TODOS);
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() != before {
            self.store.write_all(record_store::TODOS, &todos);
            info!(todo_id = %id, "todo deleted");
        }
    }
}

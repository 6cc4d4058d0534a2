//! Search and status filtering for list views, plus the canonical display
//! ordering.

use crate::domain::todo::Todo;

/// Status facet of the list view. `Pending` is the complement of
/// `Completed`, so an entry with zero tasks counts as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => todo.is_fully_completed(),
            StatusFilter::Pending => !todo.is_fully_completed(),
        }
    }
}

/// Case-insensitive substring match against the title, the content, or any
/// task text. A query that is empty after trimming matches everything.
pub fn matches_query(todo: &Todo, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    todo.title.to_lowercase().contains(&query)
        || todo.content.to_lowercase().contains(&query)
        || todo
            .tasks
            .iter()
            .any(|task| task.text.to_lowercase().contains(&query))
}

pub fn filter_todos<'a>(todos: &'a [Todo], query: &str, status: StatusFilter) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|todo| status.matches(todo) && matches_query(todo, query))
        .collect()
}

/// Sorts by `created_at` descending, the sort used everywhere an entry list
/// is shown.
pub fn newest_first(todos: &mut [Todo]) {
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::domain::todo::Task;

    fn todo(title: &str, content: &str, tasks: &[(&str, bool)]) -> Todo {
        Todo::new(
            Uuid::new_v4(),
            title.into(),
            content.into(),
            tasks
                .iter()
                .map(|(text, done)| Task {
                    text: (*text).to_owned(),
                    completed: *done,
                })
                .collect(),
            String::new(),
        )
    }

    #[test]
    fn query_searches_title_content_and_task_text() {
        let entry = todo("Weekly Plan", "ship the report", &[("water plants", false)]);

        assert!(matches_query(&entry, "weekly"));
        assert!(matches_query(&entry, "REPORT"));
        assert!(matches_query(&entry, "plants"));
        assert!(!matches_query(&entry, "holiday"));
        assert!(matches_query(&entry, "   "));
    }

    #[test]
    fn status_filters_split_on_full_completion() {
        let done = todo("done", "", &[("a", true), ("b", true)]);
        let pending = todo("pending", "", &[("a", true), ("b", false)]);
        let empty = todo("empty", "", &[]);

        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&pending));
        assert!(!StatusFilter::Completed.matches(&empty));

        assert!(!StatusFilter::Pending.matches(&done));
        assert!(StatusFilter::Pending.matches(&pending));
        assert!(StatusFilter::Pending.matches(&empty));

        assert!(StatusFilter::All.matches(&done) && StatusFilter::All.matches(&empty));
    }

    #[test]
    fn filter_combines_status_and_query() {
        let todos = vec![
            todo("buy milk", "", &[("milk", true)]),
            todo("buy bread", "", &[("bread", false)]),
        ];
        let hits = filter_todos(&todos, "buy", StatusFilter::Pending);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "buy bread");
    }

    #[test]
    fn newest_first_orders_by_creation_time_descending() {
        let mut old = todo("old", "", &[("a", false)]);
        old.created_at = Utc::now() - Duration::days(2);
        let mut mid = todo("mid", "", &[("a", false)]);
        mid.created_at = Utc::now() - Duration::days(1);
        let new = todo("new", "", &[("a", false)]);

        let mut todos = vec![old, new, mid];
        newest_first(&mut todos);
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }
}

//! Data model and persistence core for a personal weekly todo journal.
//!
//! The crate has no UI or network surface of its own. It provides the
//! record types, a pluggable whole-collection [`data::record_store::RecordStore`],
//! the session and CRUD services, and pure aggregation over a user's
//! entries; any presentation layer sits on top of these.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;

pub use application::auth_service::AuthService;
pub use application::filter::{StatusFilter, filter_todos, matches_query, newest_first};
pub use application::stats::{DayStats, TodoStats, WeeklyReport, weekly_report, weekly_report_local};
pub use application::todo_service::TodoService;
pub use data::memory::{MemoryStore, NullStore};
pub use data::record_store::{JsonFileStore, RecordStore};
pub use domain::error::DomainError;
pub use domain::todo::{Task, Todo, TodoDraft};
pub use domain::user::User;
pub use infrastructure::config::AppConfig;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("todo must contain at least one task")]
    NoTasks,
    #[error("user already exists: {0}")]
    UserAlreadyExists(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("todo not found: {0}")]
    TodoNotFound(Uuid),
    #[error("forbidden")]
    Forbidden,
}

pub mod error;
pub mod todo;
pub mod user;

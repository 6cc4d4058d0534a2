pub mod auth_service;
pub mod filter;
pub mod stats;
pub mod todo_service;

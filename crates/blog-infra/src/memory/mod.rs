//! In-memory repositories - used when no database is configured.

mod repository;

pub use repository::{InMemoryArticleRepository, InMemoryBaseRepository, InMemoryUserRepository};

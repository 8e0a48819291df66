//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! storage, markdown conversion and HTML templating.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory storage only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod markdown;
pub mod memory;
pub mod template;

// Re-exports - always available
pub use database::DatabaseConfig;
pub use markdown::ComrakMarkdownConverter;
pub use memory::{InMemoryArticleRepository, InMemoryUserRepository};
pub use template::TeraTemplateRenderer;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresArticleRepository, PostgresUserRepository};

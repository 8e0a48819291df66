//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod markdown;
mod repository;
mod template;

pub use markdown::MarkdownConverter;
pub use repository::{ArticleRepository, BaseRepository, UserRepository};
pub use template::{TemplateError, TemplateRenderer};

//! Domain entities - the core business objects.

mod article;
mod user;

pub use article::{Article, newest_first};
pub use user::User;

/// An entity addressed by a unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

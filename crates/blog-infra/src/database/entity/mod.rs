//! SeaORM entities backing the repositories.

pub mod article;
pub mod user;

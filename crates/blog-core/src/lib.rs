//! # Blog Core
//!
//! The domain layer of the blog.
//! Entities, the ports infrastructure must implement, and the mapping from
//! stored articles to their rendered forms. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod rendering;

pub use error::DomainError;

//! Markdown conversion backed by comrak.

mod converter;

pub use converter::ComrakMarkdownConverter;

//! Mapping from stored articles to what pages and the API hand out.
//!
//! Pages always render markdown. The API only does so when asked through
//! [`Converter`].

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::domain::{Article, User};
use crate::error::DomainError;
use crate::ports::MarkdownConverter;

/// Conversion requested by an API caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Markdown,
}

impl Converter {
    /// Parse the `converter` query parameter. Absent means raw output.
    pub fn from_param(param: Option<&str>) -> Result<Option<Self>, DomainError> {
        match param {
            None => Ok(None),
            Some("markdown") => Ok(Some(Self::Markdown)),
            Some(other) => Err(DomainError::UnsupportedConverter(other.to_string())),
        }
    }
}

/// An article shaped for an HTML template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedArticle {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub content: String,
    pub author: User,
    pub added_at: String,
}

/// View-model of the article listing.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPage {
    pub title: String,
    pub articles: Vec<RenderedArticle>,
}

/// View-model of a single article page.
#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
    pub title: String,
    pub article: RenderedArticle,
}

/// View-model of an error page.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
}

impl BlogPage {
    pub fn new(articles: Vec<RenderedArticle>) -> Self {
        Self {
            title: "Blog".to_string(),
            articles,
        }
    }
}

impl ArticlePage {
    pub fn new(article: RenderedArticle) -> Self {
        Self {
            title: article.title.clone(),
            article,
        }
    }
}

impl ErrorPage {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            title: "Not Found".to_string(),
            message: message.into(),
        }
    }
}

/// Shape an article for a page: markdown fields become HTML and the date is
/// made human readable.
pub fn render_article(
    article: Article,
    author: User,
    markdown: &dyn MarkdownConverter,
) -> RenderedArticle {
    RenderedArticle {
        headline: markdown.convert(&article.headline),
        content: markdown.convert(&article.content),
        added_at: format_added_at(&article.added_at),
        slug: article.slug,
        title: article.title,
        author,
    }
}

/// Apply the conversion an API caller asked for, if any.
pub fn convert_article(
    article: Article,
    converter: Option<Converter>,
    markdown: &dyn MarkdownConverter,
) -> Article {
    match converter {
        Some(Converter::Markdown) => Article {
            headline: markdown.convert(&article.headline),
            content: markdown.convert(&article.content),
            ..article
        },
        None => article,
    }
}

/// English long date with an ordinal day, e.g. `September 28th, 2017`.
pub fn format_added_at(added_at: &DateTime<Utc>) -> String {
    let day = added_at.day();
    format!(
        "{} {}{}, {}",
        added_at.format("%B"),
        day,
        ordinal_suffix(day),
        added_at.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

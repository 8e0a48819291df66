use std::cmp::Ordering;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::Keyed;

/// Article entity - a blog post, identified by slug.
///
/// The author is referenced by login; resolving it to a [`super::User`] is
/// left to whoever needs the full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub content: String,
    pub author_login: String,
    pub added_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article stamped with the current time.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        headline: impl Into<String>,
        content: impl Into<String>,
        author_login: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            headline: headline.into(),
            content: content.into(),
            author_login: author_login.into(),
            added_at: storable(Utc::now()),
        }
    }

    /// Replace the creation timestamp, e.g. when importing existing articles.
    pub fn with_added_at(self, added_at: DateTime<Utc>) -> Self {
        Self {
            added_at: storable(added_at),
            ..self
        }
    }

    fn newest_first_cmp(&self, other: &Self) -> Ordering {
        other
            .added_at
            .cmp(&self.added_at)
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

impl Keyed for Article {
    fn key(&self) -> &str {
        &self.slug
    }
}

/// Timestamps are kept at microsecond precision, the resolution of a
/// PostgreSQL `timestamptz`, so a saved article reads back equal.
fn storable(added_at: DateTime<Utc>) -> DateTime<Utc> {
    added_at.trunc_subsecs(6)
}

/// Sort articles by `added_at` descending. Ties fall back to slug ascending
/// so the order never depends on the storage backend.
pub fn newest_first(articles: &mut [Article]) {
    articles.sort_by(Article::newest_first_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 9, day, 12, 0, 0).unwrap()
    }

    fn article(slug: &str, day: u32) -> Article {
        Article::new(slug, slug, "headline", "content", "springjuergen").with_added_at(at(day))
    }

    #[test]
    fn test_newest_first_orders_descending() {
        let mut articles = vec![
            article("spring-4.3-ga", 1),
            article("spring-5-ga", 28),
            article("spring-4.2-ga", 2),
        ];

        newest_first(&mut articles);

        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["spring-5-ga", "spring-4.2-ga", "spring-4.3-ga"]);
        assert!(articles.windows(2).all(|w| w[0].added_at >= w[1].added_at));
    }

    #[test]
    fn test_newest_first_breaks_ties_by_slug() {
        let mut articles = vec![article("b", 5), article("c", 5), article("a", 5)];

        newest_first(&mut articles);

        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_added_at_is_truncated_to_microseconds() {
        let precise = Utc.with_ymd_and_hms(2017, 9, 28, 12, 0, 12).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);

        let article = Article::new("spring-5-ga", "t", "h", "c", "springjuergen")
            .with_added_at(precise);

        assert_eq!(article.added_at.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(article.clone().with_added_at(article.added_at), article);
        assert_eq!(
            Article::new("a", "t", "h", "c", "l").added_at.timestamp_subsec_nanos() % 1_000,
            0
        );
    }

    #[test]
    fn test_with_added_at_keeps_other_fields() {
        let original = Article::new("slug", "Title", "head", "body", "smaldini");
        let moved = original.clone().with_added_at(at(3));

        assert_eq!(moved.added_at, at(3));
        assert_eq!(moved.slug, original.slug);
        assert_eq!(moved.author_login, original.author_login);
        assert_eq!(moved.key(), "slug");
    }
}

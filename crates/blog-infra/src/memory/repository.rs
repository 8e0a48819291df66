//! In-memory repository implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Article, Keyed, User, newest_first};
use blog_core::error::RepoError;
use blog_core::ports::{ArticleRepository, BaseRepository, UserRepository};

/// Generic in-memory repository over a `Vec` guarded by an async RwLock.
///
/// Entities keep their insertion order; saving an existing key replaces it
/// in place. Note: Data is lost on process restart.
pub struct InMemoryBaseRepository<T> {
    store: RwLock<Vec<T>>,
}

impl<T> InMemoryBaseRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryBaseRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, str> for InMemoryBaseRepository<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|entity| entity.key() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;

        match store.iter_mut().find(|stored| stored.key() == entity.key()) {
            Some(stored) => *stored = entity.clone(),
            None => store.push(entity.clone()),
        }

        Ok(entity)
    }
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryBaseRepository<User>;

/// In-memory article repository.
pub type InMemoryArticleRepository = InMemoryBaseRepository<Article>;

impl UserRepository for InMemoryUserRepository {}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_all_by_order_by_added_at_desc(&self) -> Result<Vec<Article>, RepoError> {
        let mut articles = self.find_all().await?;
        newest_first(&mut articles);
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn juergen() -> User {
        User::new("springjuergen", "Juergen", "Hoeller")
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = InMemoryArticleRepository::new();
        let article = Article::new(
            "spring-5-ga",
            "Spring Framework 5.0 goes GA",
            "Dear Spring community ...",
            "Lorem ipsum",
            "springjuergen",
        );

        let saved = repo.save(article.clone()).await.unwrap();

        assert_eq!(saved, article);
        assert_eq!(repo.find_by_id("spring-5-ga").await.unwrap(), Some(article));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.find_by_id("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_key() {
        let repo = InMemoryUserRepository::new();
        repo.save(juergen()).await.unwrap();
        repo.save(User::new("smaldini", "Stéphane", "Maldini"))
            .await
            .unwrap();

        let updated = juergen().with_description("Spring Framework lead");
        repo.save(updated.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], updated);
        assert_eq!(all[1].login, "smaldini");
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_added_at_desc() {
        let repo = InMemoryArticleRepository::new();
        let now = Utc::now();
        for (slug, age) in [("old", 30), ("newest", 0), ("middle", 10)] {
            let article = Article::new(slug, slug, "", "", "springjuergen")
                .with_added_at(now - Duration::days(age));
            repo.save(article).await.unwrap();
        }

        let articles = repo.find_all_by_order_by_added_at_desc().await.unwrap();

        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "old"]);
        assert!(articles.windows(2).all(|w| w[0].added_at >= w[1].added_at));
    }
}

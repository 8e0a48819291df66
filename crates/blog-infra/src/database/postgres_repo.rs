//! PostgreSQL repository implementations.

use async_trait::async_trait;

use blog_core::domain::{Article, newest_first};
use blog_core::error::RepoError;
use blog_core::ports::{ArticleRepository, BaseRepository, UserRepository};

use super::entity::article::Entity as ArticleEntity;
use super::entity::user::Entity as UserEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

impl UserRepository for PostgresUserRepository {}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_all_by_order_by_added_at_desc(&self) -> Result<Vec<Article>, RepoError> {
        let mut articles = BaseRepository::<Article, str>::find_all(self).await?;
        tracing::debug!(count = articles.len(), "Sorting articles newest first");

        newest_first(&mut articles);
        Ok(articles)
    }
}

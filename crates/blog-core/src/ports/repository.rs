use async_trait::async_trait;

use crate::domain::{Article, User};
use crate::error::RepoError;

/// Generic repository trait defining the CRUD operations the blog needs.
#[async_trait]
pub trait BaseRepository<T, ID: ?Sized>: Send + Sync {
    /// Find an entity by its unique ID. A missing entity is `Ok(None)`.
    async fn find_by_id(&self, id: &ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity (insert or replace by key), returning it unchanged.
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository, keyed by login.
pub trait UserRepository: BaseRepository<User, str> {}

/// Article repository, keyed by slug.
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, str> {
    /// All articles, newest first. See [`crate::domain::newest_first`].
    async fn find_all_by_order_by_added_at_desc(&self) -> Result<Vec<Article>, RepoError>;
}

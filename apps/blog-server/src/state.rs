//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{ArticleRepository, MarkdownConverter, TemplateRenderer, UserRepository};
use blog_infra::{
    ComrakMarkdownConverter, InMemoryArticleRepository, InMemoryUserRepository,
    TeraTemplateRenderer,
};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::{PostgresArticleRepository, PostgresUserRepository, database};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub users: Arc<dyn UserRepository>,
    pub markdown: Arc<dyn MarkdownConverter>,
    pub templates: Arc<dyn TemplateRenderer>,
}

type Repositories = (Arc<dyn ArticleRepository>, Arc<dyn UserRepository>);

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryArticleRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    )
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Result<Self, blog_core::ports::TemplateError> {
        let templates = match &config.template_dir {
            Some(pattern) => TeraTemplateRenderer::from_glob(pattern)?,
            None => TeraTemplateRenderer::embedded()?,
        };

        #[cfg(feature = "postgres")]
        let (articles, users): Repositories = {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(conn) => (
                        Arc::new(PostgresArticleRepository::new(conn.clone())),
                        Arc::new(PostgresUserRepository::new(conn)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory_repositories()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_repositories()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (articles, users): Repositories = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_repositories()
        };

        tracing::info!("Application state initialized");

        Ok(Self {
            articles,
            users,
            markdown: Arc::new(ComrakMarkdownConverter::new()),
            templates: Arc::new(templates),
        })
    }

    /// In-memory state with the embedded templates.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let (articles, users) = in_memory_repositories();
        Self {
            articles,
            users,
            markdown: Arc::new(ComrakMarkdownConverter::new()),
            templates: Arc::new(
                TeraTemplateRenderer::embedded().expect("embedded templates are valid"),
            ),
        }
    }
}

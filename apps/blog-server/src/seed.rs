//! Sample data inserted at startup.

use chrono::{Duration, Utc};

use blog_core::domain::{Article, User};
use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

use crate::state::AppState;

/// Insert one author and two articles. The second article is the newer one.
pub async fn seed(state: &AppState) -> Result<(), RepoError> {
    let smaldini = state
        .users
        .save(User::new("smaldini", "Stéphane", "Maldini"))
        .await?;

    let now = Utc::now();
    let articles = [
        Article::new(
            "reactor-bismuth-is-out",
            "Reactor Bismuth is out",
            "Lorem ipsum",
            "dolor **sit** amet https://projectreactor.io/",
            &smaldini.login,
        )
        .with_added_at(now - Duration::seconds(1)),
        Article::new(
            "reactor-aluminium-has-landed",
            "Reactor Aluminium has landed",
            "Lorem ipsum",
            "dolor **sit** amet https://projectreactor.io/",
            &smaldini.login,
        )
        .with_added_at(now),
    ];

    for article in articles {
        state.articles.save(article).await?;
    }

    tracing::info!("Seeded 1 user and 2 articles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::ports::ArticleRepository;

    #[actix_rt::test]
    async fn test_seed_inserts_newest_last() {
        let state = AppState::in_memory();
        seed(&state).await.unwrap();

        let articles = state.articles.find_all_by_order_by_added_at_desc().await.unwrap();
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["reactor-aluminium-has-landed", "reactor-bismuth-is-out"]
        );

        let author = state.users.find_by_id("smaldini").await.unwrap().unwrap();
        assert_eq!(author.firstname, "Stéphane");
    }
}

//! HTTP handlers and route configuration.

mod articles;
mod health;
mod html;
mod users;

use std::collections::HashMap;

use actix_web::web;

use blog_core::DomainError;
use blog_core::domain::{Article, User};
use blog_core::ports::BaseRepository;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/article")
                    .route("/", web::get().to(articles::find_all))
                    .route("/{slug}", web::get().to(articles::find_one)),
            )
            .service(
                web::scope("/user")
                    .route("/", web::get().to(users::find_all))
                    .route("/{login}", web::get().to(users::find_one)),
            ),
    )
    .route("/", web::get().to(html::blog))
    .route("/article/{slug}", web::get().to(html::article));
}

/// All users keyed by login, for resolving the authors of many articles.
async fn authors_by_login(state: &AppState) -> AppResult<HashMap<String, User>> {
    let users = state.users.find_all().await?;
    Ok(users
        .into_iter()
        .map(|user| (user.login.clone(), user))
        .collect())
}

fn author_of(authors: &HashMap<String, User>, article: &Article) -> AppResult<User> {
    authors
        .get(&article.author_login)
        .cloned()
        .ok_or_else(|| dangling_author(article).into())
}

/// Resolve the author of a single article.
async fn find_author(state: &AppState, article: &Article) -> AppResult<User> {
    state
        .users
        .find_by_id(&article.author_login)
        .await?
        .ok_or_else(|| dangling_author(article).into())
}

fn dangling_author(article: &Article) -> DomainError {
    DomainError::DanglingAuthor {
        slug: article.slug.clone(),
        login: article.author_login.clone(),
    }
}

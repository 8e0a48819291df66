//! Article API handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Article, User};
use blog_core::ports::{ArticleRepository, BaseRepository};
use blog_core::rendering::{Converter, convert_article};
use blog_shared::dto::{ArticleQuery, ArticleResponse};

use super::users::user_response;
use super::{author_of, authors_by_login, find_author};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/article/
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.find_all_by_order_by_added_at_desc().await?;
    let authors = authors_by_login(&state).await?;

    let response = articles
        .into_iter()
        .map(|article| {
            let author = author_of(&authors, &article)?;
            Ok(article_response(article, author))
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/article/{slug}?converter=markdown
///
/// A missing article is a `null` body, not an error.
pub async fn find_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ArticleQuery>,
) -> AppResult<HttpResponse> {
    let converter = Converter::from_param(query.converter.as_deref())?;
    let slug = path.into_inner();

    let response = match state.articles.find_by_id(&slug).await? {
        Some(article) => {
            let author = find_author(&state, &article).await?;
            let article = convert_article(article, converter, state.markdown.as_ref());
            Some(article_response(article, author))
        }
        None => {
            tracing::debug!(%slug, "Article not found");
            None
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

fn article_response(article: Article, author: User) -> ArticleResponse {
    ArticleResponse {
        slug: article.slug,
        title: article.title,
        headline: article.headline,
        content: article.content,
        author: user_response(author),
        added_at: article.added_at,
    }
}

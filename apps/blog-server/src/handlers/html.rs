//! HTML pages.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use blog_core::DomainError;
use blog_core::ports::{ArticleRepository, BaseRepository};
use blog_core::rendering::{ArticlePage, BlogPage, ErrorPage, render_article};

use super::{author_of, authors_by_login, find_author};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn blog(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.find_all_by_order_by_added_at_desc().await?;
    let authors = authors_by_login(&state).await?;

    let rendered = articles
        .into_iter()
        .map(|article| {
            let author = author_of(&authors, &article)?;
            Ok(render_article(article, author, state.markdown.as_ref()))
        })
        .collect::<AppResult<Vec<_>>>()?;

    render_page(&state, StatusCode::OK, "blog.html", &BlogPage::new(rendered))
}

/// GET /article/{slug}
pub async fn article(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let Some(article) = state.articles.find_by_id(&slug).await? else {
        tracing::debug!(%slug, "Article page not found");
        return render_page(
            &state,
            StatusCode::NOT_FOUND,
            "error.html",
            &ErrorPage::not_found(format!("No article with slug \"{slug}\"")),
        );
    };

    let author = find_author(&state, &article).await?;
    let rendered = render_article(article, author, state.markdown.as_ref());

    render_page(&state, StatusCode::OK, "article.html", &ArticlePage::new(rendered))
}

fn render_page<P: Serialize>(
    state: &AppState,
    status: StatusCode,
    template: &str,
    page: &P,
) -> AppResult<HttpResponse> {
    let context =
        serde_json::to_value(page).map_err(|e| DomainError::Internal(e.to_string()))?;
    let body = state.templates.render(template, &context)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

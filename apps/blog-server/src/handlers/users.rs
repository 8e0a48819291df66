//! User API handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::User;
use blog_core::ports::BaseRepository;
use blog_shared::dto::UserResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/user/
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    let response: Vec<UserResponse> = users.into_iter().map(user_response).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/user/{login}
///
/// A missing user is a `null` body, not an error.
pub async fn find_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let login = path.into_inner();
    let user = state.users.find_by_id(&login).await?;

    Ok(HttpResponse::Ok().json(user.map(user_response)))
}

pub(super) fn user_response(user: User) -> UserResponse {
    UserResponse {
        login: user.login,
        firstname: user.firstname,
        lastname: user.lastname,
        description: user.description,
    }
}

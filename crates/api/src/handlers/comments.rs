//! Admin comment moderation.

use axum::extract::{Path, State};
use axum::response::Redirect;
use maud::Markup;

use gazette_core::types::DbId;
use gazette_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views;

/// GET /admin/comments
pub async fn list(AuthUser(user): AuthUser, State(state): State<AppState>) -> AppResult<Markup> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(views::admin::comments_list(&comments, &user))
}

/// POST /admin/comments/{id}/approve
pub async fn approve(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    CommentRepo::approve(&state.pool, id).await?;
    Ok(Redirect::to("/admin/comments"))
}

/// POST /admin/comments/{id}/delete
pub async fn delete(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    CommentRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/admin/comments"))
}

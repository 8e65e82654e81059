//! Admin dashboard.

use axum::extract::State;
use maud::Markup;

use gazette_db::repositories::{ArticleRepo, CommentRepo, GalleryRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views;

/// GET /admin/
pub async fn dashboard(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Markup> {
    let article_count = ArticleRepo::count(&state.pool).await?;
    let gallery_count = GalleryRepo::count(&state.pool).await?;
    let pending_comments = CommentRepo::count_pending(&state.pool).await?;

    Ok(views::admin::dashboard(
        article_count,
        gallery_count,
        pending_comments,
        &user,
    ))
}

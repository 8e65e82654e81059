//! Route definitions for the visitor-facing site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /                          -> home
/// GET  /articles?page=N           -> list_articles
/// GET  /articles/{slug}           -> show_article
/// POST /articles/{slug}/comments  -> submit_comment
/// GET  /gallery                   -> list_galleries
/// GET  /gallery/{slug}            -> show_gallery
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/articles", get(public::list_articles))
        .route("/articles/{slug}", get(public::show_article))
        .route("/articles/{slug}/comments", post(public::submit_comment))
        .route("/gallery", get(public::list_galleries))
        .route("/gallery/{slug}", get(public::show_gallery))
}

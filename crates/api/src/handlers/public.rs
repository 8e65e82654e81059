//! Handlers for the visitor-facing site.

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use gazette_core::error::CoreError;
use gazette_core::pagination::Pagination;
use gazette_core::settings::{self, COMMENTS_ENABLED};
use gazette_db::models::comment::CreateComment;
use gazette_db::models::gallery::{Gallery, Image};
use gazette_db::repositories::{ArticleRepo, CommentRepo, GalleryRepo, ImageRepo, SettingsRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::public::{self, CommentNotice};

/// Number of articles shown on the home page.
const HOME_ARTICLE_LIMIT: i64 = 6;

/// Articles per page on the listing.
const ARTICLES_PER_PAGE: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
}

/// Redirect markers appended by the comment-submission flow.
#[derive(Debug, Deserialize)]
pub struct ArticleParams {
    pub comment: Option<String>,
    pub error: Option<String>,
}

/// Body of `POST /articles/{slug}/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub author_name: String,
    pub content: String,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Markup> {
    let articles = ArticleRepo::list_published(&state.pool, HOME_ARTICLE_LIMIT).await?;

    // The newest gallery doubles as the featured one.
    let featured = match GalleryRepo::list(&state.pool).await?.into_iter().next() {
        Some(gallery) => Some(with_images(&state, gallery).await?),
        None => None,
    };

    Ok(public::home(&articles, featured.as_ref()))
}

/// GET /articles?page=N
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Markup> {
    let total = ArticleRepo::count_published(&state.pool).await?;
    let pagination = Pagination::new(params.page.unwrap_or(1), ARTICLES_PER_PAGE, total);
    let articles =
        ArticleRepo::list_published_page(&state.pool, pagination.per_page, pagination.offset())
            .await?;
    Ok(public::article_list(&articles, &pagination))
}

/// GET /articles/{slug}
///
/// Unpublished articles are indistinguishable from missing ones: both 404.
pub async fn show_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ArticleParams>,
) -> AppResult<Markup> {
    let article = ArticleRepo::find_by_slug(&state.pool, &slug)
        .await?
        .filter(|article| article.published)
        .ok_or_else(|| CoreError::not_found("Article", &slug))?;

    let comments = CommentRepo::list_by_article(&state.pool, article.id, true).await?;

    let gallery = match GalleryRepo::find_by_article(&state.pool, article.id).await? {
        Some(gallery) => Some(with_images(&state, gallery).await?),
        None => None,
    };

    let comments_enabled = settings::flag_enabled(
        SettingsRepo::get(&state.pool, COMMENTS_ENABLED).await?.as_deref(),
    );

    let notice = if params.comment.as_deref() == Some("pending") {
        CommentNotice::Pending
    } else if params.error.as_deref() == Some("fields_required") {
        CommentNotice::FieldsRequired
    } else {
        CommentNotice::None
    };

    Ok(public::article_detail(
        &article,
        &comments,
        gallery.as_ref(),
        comments_enabled,
        notice,
    ))
}

/// POST /articles/{slug}/comments
///
/// New comments always start unapproved and show up publicly only after
/// moderation.
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<CommentForm>,
) -> AppResult<Redirect> {
    let article = ArticleRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Article", &slug))?;

    let enabled = settings::flag_enabled(
        SettingsRepo::get(&state.pool, COMMENTS_ENABLED).await?.as_deref(),
    );
    if !enabled {
        return Err(CoreError::Forbidden("Comments are disabled.".into()).into());
    }

    let author_name = form.author_name.trim();
    let content = form.content.trim();
    if author_name.is_empty() || content.is_empty() {
        return Ok(Redirect::to(&format!("/articles/{slug}?error=fields_required")));
    }

    CommentRepo::create(
        &state.pool,
        &CreateComment {
            article_id: article.id,
            author_name: author_name.to_string(),
            content: content.to_string(),
        },
    )
    .await?;

    Ok(Redirect::to(&format!("/articles/{slug}?comment=pending")))
}

/// GET /gallery
pub async fn list_galleries(State(state): State<AppState>) -> AppResult<Markup> {
    let galleries = GalleryRepo::list(&state.pool).await?;
    let mut with_covers = Vec::with_capacity(galleries.len());
    for gallery in galleries {
        with_covers.push(with_images(&state, gallery).await?);
    }
    Ok(public::gallery_list(&with_covers))
}

/// GET /gallery/{slug}
pub async fn show_gallery(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Markup> {
    let gallery = GalleryRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Gallery", &slug))?;
    let images = ImageRepo::list_by_gallery(&state.pool, gallery.id).await?;
    Ok(public::gallery_detail(&gallery, &images))
}

async fn with_images(state: &AppState, gallery: Gallery) -> AppResult<(Gallery, Vec<Image>)> {
    let images = ImageRepo::list_by_gallery(&state.pool, gallery.id).await?;
    Ok((gallery, images))
}

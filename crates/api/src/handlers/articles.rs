//! Admin CRUD for articles.
//!
//! Create and update are multipart submissions because the form carries an
//! optional cover image alongside the text fields. Validation failures and
//! store errors re-render the form with an inline message instead of
//! surfacing an error page.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;

use gazette_core::error::CoreError;
use gazette_core::slug::slugify;
use gazette_core::types::DbId;
use gazette_db::models::article::{Article, CreateArticle};
use gazette_db::models::user::User;
use gazette_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::upload;
use crate::views;

/// GET /admin/articles
pub async fn list(AuthUser(user): AuthUser, State(state): State<AppState>) -> AppResult<Markup> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(views::admin::articles_list(&articles, &user))
}

/// GET /admin/articles/new
pub async fn new_form(AuthUser(user): AuthUser) -> Markup {
    views::admin::article_form(&form_article(0, &CreateArticle::default()), true, None, &user)
}

/// POST /admin/articles
pub async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Response> {
    let (mut input, cover) = read_article_form(multipart).await?;

    if let Err(message) = normalize(&mut input) {
        return Ok(render_form(&input, 0, true, &message, &user));
    }

    if let Some((filename, data)) = cover {
        match upload::store_image(&state.config.storage_path, &filename, &data).await {
            Ok(stored) => input.cover_image = stored,
            Err(err) => return Ok(render_form(&input, 0, true, &upload_message(err), &user)),
        }
    }

    if let Err(err) = ArticleRepo::create(&state.pool, &input).await {
        tracing::error!(error = %err, slug = %input.slug, "failed to create article");
        let message = "Could not create the article. Make sure the slug is unique.";
        return Ok(render_form(&input, 0, true, message, &user));
    }

    Ok(Redirect::to("/admin/articles").into_response())
}

/// GET /admin/articles/{id}/edit
pub async fn edit_form(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Markup> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Article", id))?;
    Ok(views::admin::article_form(&article, false, None, &user))
}

/// POST /admin/articles/{id}
pub async fn update(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Response> {
    let existing = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Article", id))?;

    let (mut input, cover) = read_article_form(multipart).await?;
    // Keep the current cover unless a new file replaces it.
    input.cover_image = existing.cover_image;

    if let Err(message) = normalize(&mut input) {
        return Ok(render_form(&input, id, false, &message, &user));
    }

    if let Some((filename, data)) = cover {
        match upload::store_image(&state.config.storage_path, &filename, &data).await {
            Ok(stored) => input.cover_image = stored,
            Err(err) => return Ok(render_form(&input, id, false, &upload_message(err), &user)),
        }
    }

    if let Err(err) = ArticleRepo::update(&state.pool, id, &input).await {
        tracing::error!(error = %err, article_id = id, "failed to update article");
        let message = "Could not update the article. Make sure the slug is unique.";
        return Ok(render_form(&input, id, false, message, &user));
    }

    Ok(Redirect::to("/admin/articles").into_response())
}

/// POST /admin/articles/{id}/delete
///
/// Redirects regardless of whether the row existed.
pub async fn delete(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    ArticleRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/admin/articles"))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Collect the multipart article form: text fields plus the optional cover
/// image (present only when the submission includes a non-empty file).
async fn read_article_form(
    mut multipart: Multipart,
) -> AppResult<(CreateArticle, Option<(String, Vec<u8>)>)> {
    let mut input = CreateArticle::default();
    let mut cover: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => input.title = read_text(field).await?,
            "slug" => input.slug = read_text(field).await?,
            "content" => input.content = read_text(field).await?,
            "excerpt" => input.excerpt = read_text(field).await?,
            "published" => input.published = read_text(field).await? == "on",
            "cover_image" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                if !filename.is_empty() && !data.is_empty() {
                    cover = Some((filename, data.to_vec()));
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok((input, cover))
}

async fn read_text(field: Field<'_>) -> AppResult<String> {
    field.text().await.map_err(bad_multipart)
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Core(CoreError::Validation(format!("invalid form submission: {err}")))
}

/// Trim the inputs and derive the slug from the slug field, or the title
/// when the slug was left blank. Returns the inline message when the
/// submission cannot produce a usable article.
fn normalize(input: &mut CreateArticle) -> Result<(), String> {
    input.title = input.title.trim().to_string();
    input.excerpt = input.excerpt.trim().to_string();
    if input.title.is_empty() {
        return Err("Title is required.".to_string());
    }

    let source = if input.slug.trim().is_empty() {
        input.title.clone()
    } else {
        input.slug.clone()
    };
    input.slug = slugify(&source);
    if input.slug.is_empty() {
        return Err("Title must contain at least one letter or digit.".to_string());
    }

    Ok(())
}

fn upload_message(err: AppError) -> String {
    match err {
        AppError::Core(CoreError::Validation(message)) => message,
        other => {
            tracing::error!(error = %other, "cover upload failed");
            "Could not store the uploaded file.".to_string()
        }
    }
}

/// Rebuild a renderable article from submitted values, for form re-renders.
/// The timestamps are placeholders; the form never shows them.
fn form_article(id: DbId, input: &CreateArticle) -> Article {
    let now = chrono::Utc::now();
    Article {
        id,
        title: input.title.clone(),
        slug: input.slug.clone(),
        content: input.content.clone(),
        excerpt: input.excerpt.clone(),
        cover_image: input.cover_image.clone(),
        published: input.published,
        created_at: now,
        updated_at: now,
    }
}

fn render_form(input: &CreateArticle, id: DbId, is_new: bool, error: &str, user: &User) -> Response {
    views::admin::article_form(&form_article(id, input), is_new, Some(error), user).into_response()
}

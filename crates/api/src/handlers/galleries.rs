//! Admin CRUD for galleries and their images.

use axum::extract::{Multipart, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use gazette_core::error::CoreError;
use gazette_core::slug::slugify;
use gazette_core::types::DbId;
use gazette_db::models::gallery::{CreateGallery, CreateImage, Gallery};
use gazette_db::models::user::User;
use gazette_db::repositories::{ArticleRepo, GalleryRepo, ImageRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::upload;
use crate::views;

/// Body of the gallery create/update form. `article_id` arrives as the raw
/// select value: empty string for "(none)".
#[derive(Debug, Deserialize)]
pub struct GalleryForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub article_id: Option<String>,
}

/// GET /admin/galleries
pub async fn list(AuthUser(user): AuthUser, State(state): State<AppState>) -> AppResult<Markup> {
    let galleries = GalleryRepo::list(&state.pool).await?;
    let mut with_images = Vec::with_capacity(galleries.len());
    for gallery in galleries {
        let images = ImageRepo::list_by_gallery(&state.pool, gallery.id).await?;
        with_images.push((gallery, images));
    }
    Ok(views::admin::galleries_list(&with_images, &user))
}

/// GET /admin/galleries/new
pub async fn new_form(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Markup> {
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(views::admin::gallery_form(
        &form_gallery(0, &CreateGallery::default()),
        &[],
        &articles,
        true,
        None,
        &user,
    ))
}

/// POST /admin/galleries
pub async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Form(form): Form<GalleryForm>,
) -> AppResult<Response> {
    let mut input = read_gallery_form(form);

    if let Err(message) = normalize(&mut input) {
        return render_form(&state, &input, 0, true, &message, &user).await;
    }

    if let Err(err) = GalleryRepo::create(&state.pool, &input).await {
        tracing::error!(error = %err, slug = %input.slug, "failed to create gallery");
        let message = "Could not create the gallery. Make sure the slug is unique.";
        return render_form(&state, &input, 0, true, message, &user).await;
    }

    Ok(Redirect::to("/admin/galleries").into_response())
}

/// GET /admin/galleries/{id}/edit
pub async fn edit_form(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Markup> {
    let gallery = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Gallery", id))?;
    let images = ImageRepo::list_by_gallery(&state.pool, id).await?;
    let articles = ArticleRepo::list(&state.pool).await?;
    Ok(views::admin::gallery_form(
        &gallery, &images, &articles, false, None, &user,
    ))
}

/// POST /admin/galleries/{id}
pub async fn update(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<GalleryForm>,
) -> AppResult<Response> {
    GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Gallery", id))?;

    let mut input = read_gallery_form(form);

    if let Err(message) = normalize(&mut input) {
        return render_form(&state, &input, id, false, &message, &user).await;
    }

    if let Err(err) = GalleryRepo::update(&state.pool, id, &input).await {
        tracing::error!(error = %err, gallery_id = id, "failed to update gallery");
        let message = "Could not update the gallery. Make sure the slug is unique.";
        return render_form(&state, &input, id, false, message, &user).await;
    }

    Ok(Redirect::to("/admin/galleries").into_response())
}

/// POST /admin/galleries/{id}/delete
///
/// Redirects regardless of whether the row existed; image rows cascade.
pub async fn delete(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    GalleryRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/admin/galleries"))
}

/// POST /admin/galleries/{id}/images
///
/// Batch upload: every file in the submission is validated and stored
/// independently. A file that fails validation or storage is logged and
/// skipped; the rest of the batch still lands. `sort_order` is the file's
/// position in the submitted batch, so skipped files leave gaps.
pub async fn upload_images(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Gallery", id))?;

    let mut position: i32 = 0;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Core(CoreError::Validation(format!("invalid form submission: {e}")))
    })? {
        if field.name() != Some("images") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let data = match field.bytes().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, file = %filename, "skipping unreadable upload");
                position += 1;
                continue;
            }
        };
        if filename.is_empty() || data.is_empty() {
            continue;
        }

        match upload::store_image(&state.config.storage_path, &filename, &data).await {
            Ok(stored) => {
                let image = CreateImage {
                    gallery_id: id,
                    filename: stored,
                    caption: String::new(),
                    sort_order: position,
                };
                if let Err(err) = ImageRepo::create(&state.pool, &image).await {
                    tracing::warn!(error = %err, file = %filename, "skipping failed image insert");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, file = %filename, "skipping failed image upload");
            }
        }
        position += 1;
    }

    Ok(Redirect::to(&format!("/admin/galleries/{id}/edit")))
}

/// POST /admin/images/{id}/delete
pub async fn delete_image(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let image = ImageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Image", id))?;
    ImageRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to(&format!(
        "/admin/galleries/{}/edit",
        image.gallery_id
    )))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

fn read_gallery_form(form: GalleryForm) -> CreateGallery {
    let article_id = form
        .article_id
        .as_deref()
        .and_then(|raw| raw.parse::<DbId>().ok())
        .filter(|id| *id > 0);

    CreateGallery {
        title: form.title,
        slug: form.slug,
        description: form.description,
        article_id,
    }
}

/// Trim the inputs and derive the slug, mirroring the article flow.
fn normalize(input: &mut CreateGallery) -> Result<(), String> {
    input.title = input.title.trim().to_string();
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

/// Rebuild a renderable gallery from submitted values, for form re-renders.
fn form_gallery(id: DbId, input: &CreateGallery) -> Gallery {
    let now = chrono::Utc::now();
    Gallery {
        id,
        title: input.title.clone(),
        slug: input.slug.clone(),
        description: input.description.clone(),
        article_id: input.article_id,
        created_at: now,
        updated_at: now,
    }
}

async fn render_form(
    state: &AppState,
    input: &CreateGallery,
    id: DbId,
    is_new: bool,
    error: &str,
    user: &User,
) -> AppResult<Response> {
    let articles = ArticleRepo::list(&state.pool).await?;
    let images = if is_new {
        Vec::new()
    } else {
        ImageRepo::list_by_gallery(&state.pool, id).await?
    };
    Ok(views::admin::gallery_form(
        &form_gallery(id, input),
        &images,
        &articles,
        is_new,
        Some(error),
        user,
    )
    .into_response())
}

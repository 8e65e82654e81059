//! Self-service profile editing for the signed-in user.
//!
//! Unlike `/admin/users`, these routes require authentication only, not the
//! admin flag: every account may manage its own name and password.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use gazette_db::models::user::UpdateUser;
use gazette_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct ShowParams {
    pub saved: Option<String>,
}

/// Body of `POST /admin/profile`. A blank password keeps the current one.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub surname: String,
    pub password: String,
}

/// GET /admin/profile
pub async fn show(AuthUser(user): AuthUser, Query(params): Query<ShowParams>) -> Markup {
    views::admin::profile(&user, params.saved.as_deref() == Some("true"), None)
}

/// POST /admin/profile
pub async fn update(
    AuthUser(mut user): AuthUser,
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> AppResult<Response> {
    let input = UpdateUser {
        name: form.name.trim().to_string(),
        surname: form.surname.trim().to_string(),
        nickname: user.nickname.clone(),
        is_admin: user.is_admin,
    };

    if let Err(err) = UserRepo::update(&state.pool, user.id, &input).await {
        tracing::error!(error = %err, user_id = user.id, "failed to update profile");
        user.name = input.name;
        user.surname = input.surname;
        let message = "Could not update your profile.";
        return Ok(views::admin::profile(&user, false, Some(message)).into_response());
    }

    if !form.password.is_empty() {
        let password_hash = hash_password(&form.password)
            .map_err(|e| AppError::Internal(format!("password hashing: {e}")))?;
        UserRepo::update_password(&state.pool, user.id, &password_hash).await?;
    }

    Ok(Redirect::to("/admin/profile?saved=true").into_response())
}

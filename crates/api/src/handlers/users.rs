//! Admin user management. Every route here requires the admin flag.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use gazette_core::error::CoreError;
use gazette_core::types::DbId;
use gazette_db::models::user::{CreateUser, UpdateUser, User};
use gazette_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;
use crate::views;

/// Body of the user create/update form. The checkbox is absent when
/// unchecked; on update, a blank password keeps the current one.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub password: String,
    pub is_admin: Option<String>,
}

/// GET /admin/users
pub async fn list(
    RequireAdmin(current): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Markup> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(views::admin::users_list(&users, &current))
}

/// GET /admin/users/new
pub async fn new_form(RequireAdmin(current): RequireAdmin) -> Markup {
    views::admin::user_form(&blank_user(), true, None, &current)
}

/// POST /admin/users
pub async fn create(
    RequireAdmin(current): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    let nickname = form.nickname.trim().to_string();
    if nickname.is_empty() || form.password.is_empty() {
        let mut preview = blank_user();
        apply_form(&mut preview, &form);
        let message = "Nickname and password are required.";
        return Ok(
            views::admin::user_form(&preview, true, Some(message), &current).into_response(),
        );
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::Internal(format!("password hashing: {e}")))?;

    let input = CreateUser {
        name: form.name.trim().to_string(),
        surname: form.surname.trim().to_string(),
        nickname,
        password_hash,
        is_admin: form.is_admin.as_deref() == Some("on"),
    };

    if let Err(err) = UserRepo::create(&state.pool, &input).await {
        tracing::error!(error = %err, nickname = %input.nickname, "failed to create user");
        let mut preview = blank_user();
        apply_form(&mut preview, &form);
        let message = "Could not create the user. The nickname may already be taken.";
        return Ok(
            views::admin::user_form(&preview, true, Some(message), &current).into_response(),
        );
    }

    Ok(Redirect::to("/admin/users").into_response())
}

/// GET /admin/users/{id}/edit
pub async fn edit_form(
    RequireAdmin(current): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Markup> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;
    Ok(views::admin::user_form(&user, false, None, &current))
}

/// POST /admin/users/{id}
pub async fn update(
    RequireAdmin(current): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    let mut user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", id))?;

    let input = UpdateUser {
        name: form.name.trim().to_string(),
        surname: form.surname.trim().to_string(),
        nickname: form.nickname.trim().to_string(),
        is_admin: form.is_admin.as_deref() == Some("on"),
    };

    if let Err(err) = UserRepo::update(&state.pool, id, &input).await {
        tracing::error!(error = %err, user_id = id, "failed to update user");
        apply_form(&mut user, &form);
        let message = "Could not update the user. The nickname may already be taken.";
        return Ok(
            views::admin::user_form(&user, false, Some(message), &current).into_response(),
        );
    }

    if !form.password.is_empty() {
        let password_hash = hash_password(&form.password)
            .map_err(|e| AppError::Internal(format!("password hashing: {e}")))?;
        UserRepo::update_password(&state.pool, id, &password_hash).await?;
    }

    Ok(Redirect::to("/admin/users").into_response())
}

/// POST /admin/users/{id}/delete
///
/// An admin may not delete their own account.
pub async fn delete(
    RequireAdmin(current): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    if current.id == id {
        return Err(CoreError::Validation("You cannot delete your own account.".into()).into());
    }
    UserRepo::delete(&state.pool, id).await?;
    Ok(Redirect::to("/admin/users"))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Empty user used to render the blank create form.
fn blank_user() -> User {
    let now = chrono::Utc::now();
    User {
        id: 0,
        name: String::new(),
        surname: String::new(),
        nickname: String::new(),
        password_hash: String::new(),
        is_admin: false,
        created_at: now,
        updated_at: now,
    }
}

/// Copy submitted values onto a user for form re-renders. The password is
/// deliberately not echoed back.
fn apply_form(user: &mut User, form: &UserForm) {
    user.name = form.name.trim().to_string();
    user.surname = form.surname.trim().to_string();
    user.nickname = form.nickname.trim().to_string();
    user.is_admin = form.is_admin.as_deref() == Some("on");
}

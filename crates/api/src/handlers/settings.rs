//! Admin settings page.

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Form;
use maud::Markup;
use serde::Deserialize;

use gazette_core::settings::{flag_enabled, COMMENTS_ENABLED};
use gazette_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct ShowParams {
    pub saved: Option<String>,
}

/// Body of `POST /admin/settings`. The checkbox is absent when unchecked.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub comments_enabled: Option<String>,
}

/// GET /admin/settings
pub async fn show(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ShowParams>,
) -> AppResult<Markup> {
    let settings = SettingsRepo::get_all(&state.pool).await?;
    let comments_enabled = settings
        .iter()
        .find(|s| s.setting_key == COMMENTS_ENABLED)
        .map(|s| flag_enabled(Some(s.setting_value.as_str())))
        .unwrap_or(false);

    Ok(views::admin::settings_page(
        &settings,
        comments_enabled,
        params.saved.as_deref() == Some("true"),
        &user,
    ))
}

/// POST /admin/settings
pub async fn update(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> AppResult<Redirect> {
    let value = if form.comments_enabled.as_deref() == Some("on") {
        "true"
    } else {
        "false"
    };
    SettingsRepo::set(&state.pool, COMMENTS_ENABLED, value).await?;
    Ok(Redirect::to("/admin/settings?saved=true"))
}

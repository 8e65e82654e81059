//! Login and logout for the admin area.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use maud::Markup;
use serde::Deserialize;

use gazette_db::repositories::UserRepo;

use crate::auth::password::verify_password;
use crate::auth::session::SESSION_COOKIE;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Body of `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub nickname: String,
    pub password: String,
}

/// GET /admin/login
pub async fn login_form() -> Markup {
    views::admin::login(None)
}

/// POST /admin/login
///
/// On success, sets the signed session cookie and redirects into the admin
/// area. On failure, re-renders the form; the message does not reveal
/// whether the nickname exists.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = UserRepo::find_by_nickname(&state.pool, &form.nickname).await? else {
        return Ok(views::admin::login(Some("Invalid nickname or password.")).into_response());
    };

    let password_ok = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification: {e}")))?;
    if !password_ok {
        return Ok(views::admin::login(Some("Invalid nickname or password.")).into_response());
    }

    let token = state.sessions.issue(user.id);
    let cookie = session_cookie(token, time::Duration::days(state.config.session_ttl_days));

    tracing::info!(user_id = user.id, nickname = %user.nickname, "admin login");
    Ok((jar.add(cookie), Redirect::to("/admin/")).into_response())
}

/// POST /admin/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    // Max-Age zero makes the client drop the cookie immediately.
    let cookie = session_cookie(String::new(), time::Duration::ZERO);
    (jar.add(cookie), Redirect::to("/admin/login"))
}

/// Build the session cookie with its fixed scope attributes.
fn session_cookie(value: String, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(max_age)
        .build()
}

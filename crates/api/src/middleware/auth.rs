//! Session-cookie authentication extractors for admin handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use gazette_core::error::CoreError;
use gazette_db::models::user::User;
use gazette_db::repositories::UserRepo;

use crate::auth::session::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the signed session cookie.
///
/// Use this as an extractor parameter in any handler behind the admin area:
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> AppResult<Markup> {
///     tracing::info!(user_id = user.id, "handling request");
///     ...
/// }
/// ```
///
/// Rejection is a redirect to the login page (via the [`AppError`] mapping
/// for unauthorized errors), covering a missing cookie, a bad signature, an
/// expired token, and a principal whose user row no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| unauthorized("Missing session cookie"))?;

        let user_id = state
            .sessions
            .verify(&token)
            .ok_or_else(|| unauthorized("Invalid session token"))?;

        let user = UserRepo::find_by_id(&state.pool, user_id)
            .await?
            .ok_or_else(|| unauthorized("Session user no longer exists"))?;

        Ok(AuthUser(user))
    }
}

/// Requires the admin flag on top of authentication.
///
/// Unlike a failed identity check, a valid session without the admin flag is
/// answered with 403 Forbidden, not a login redirect.
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "This area requires administrator privileges.".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

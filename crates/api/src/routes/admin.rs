//! Route definitions for the admin area, mounted at `/admin`.
//!
//! Authentication is enforced per handler through the [`AuthUser`] and
//! [`RequireAdmin`] extractors rather than a router-level layer; the only
//! unguarded routes here are the login form and its submission.
//!
//! ```text
//! GET  /                        dashboard
//! GET  /login, POST /login      login (public)
//! POST /logout                  clear session
//!
//! GET  /articles                list        POST /articles              create
//! GET  /articles/new            blank form
//! GET  /articles/{id}/edit      edit form   POST /articles/{id}         update
//! POST /articles/{id}/delete    delete
//!
//! (same shape for /galleries, plus:)
//! POST /galleries/{id}/images   batch image upload
//! POST /images/{id}/delete      delete one image
//!
//! GET  /comments                list
//! POST /comments/{id}/approve   approve
//! POST /comments/{id}/delete    delete
//!
//! GET  /settings, POST /settings
//!
//! (admin flag required:)
//! GET  /users                   list        POST /users                 create
//! GET  /users/new               blank form
//! GET  /users/{id}/edit         edit form   POST /users/{id}            update
//! POST /users/{id}/delete       delete (self-deletion rejected)
//!
//! GET  /profile, POST /profile  self-service profile
//! ```
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser
//! [`RequireAdmin`]: crate::middleware::auth::RequireAdmin

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{articles, auth, comments, dashboard, galleries, profile, settings, users};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/articles", get(articles::list).post(articles::create))
        .route("/articles/new", get(articles::new_form))
        .route("/articles/{id}/edit", get(articles::edit_form))
        .route("/articles/{id}", post(articles::update))
        .route("/articles/{id}/delete", post(articles::delete))
        .route("/galleries", get(galleries::list).post(galleries::create))
        .route("/galleries/new", get(galleries::new_form))
        .route("/galleries/{id}/edit", get(galleries::edit_form))
        .route("/galleries/{id}", post(galleries::update))
        .route("/galleries/{id}/delete", post(galleries::delete))
        .route("/galleries/{id}/images", post(galleries::upload_images))
        .route("/images/{id}/delete", post(galleries::delete_image))
        .route("/comments", get(comments::list))
        .route("/comments/{id}/approve", post(comments::approve))
        .route("/comments/{id}/delete", post(comments::delete))
        .route("/settings", get(settings::show).post(settings::update))
        .route("/users", get(users::list).post(users::create))
        .route("/users/new", get(users::new_form))
        .route("/users/{id}/edit", get(users::edit_form))
        .route("/users/{id}", post(users::update))
        .route("/users/{id}/delete", post(users::delete))
        .route("/profile", get(profile::show).post(profile::update))
}

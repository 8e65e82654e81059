//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of a `#[sqlx::test]`-provided pool, and provides request helpers
//! for HTML form and multipart submissions.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gazette_api::auth::password::hash_password;
use gazette_api::auth::session::SessionSigner;
use gazette_api::config::ServerConfig;
use gazette_api::routes::build_app_router;
use gazette_api::state::AppState;
use gazette_db::models::user::{CreateUser, User};
use gazette_db::repositories::UserRepo;

/// Fixed signing secret so tests can mint their own tokens when needed.
pub const TEST_SECRET: [u8; 32] = [7u8; 32];

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "gazette-test-boundary";

pub fn test_signer() -> SessionSigner {
    SessionSigner::new(TEST_SECRET, 7)
}

/// Build a test `ServerConfig` writing uploads under the system temp dir.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        storage_path: std::env::temp_dir().join(format!("gazette-tests-{}", std::process::id())),
        admin_password: None,
        request_timeout_secs: 30,
        session_ttl_days: 7,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        sessions: test_signer(),
    };
    build_app_router(state)
}

/* --------------------------------------------------------------------------
Request helpers
-------------------------------------------------------------------------- */

pub async fn get(app: &Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

pub async fn get_auth(app: &Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

pub async fn post_form(app: &Router, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

pub async fn post_form_auth(app: &Router, path: &str, body: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

pub async fn post_multipart_auth(
    app: &Router,
    path: &str,
    parts: &[Part<'_>],
    cookie: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::COOKIE, cookie)
        .body(Body::from(multipart_body(parts)))
        .expect("request should build");
    app.clone().oneshot(request).await.expect("request should run")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response must carry a Location header")
        .to_str()
        .expect("Location must be ASCII")
}

/* --------------------------------------------------------------------------
Multipart body construction
-------------------------------------------------------------------------- */

/// One part of a multipart submission.
pub enum Part<'a> {
    /// (field name, value)
    Text(&'a str, &'a str),
    /// (field name, client filename, payload)
    File(&'a str, &'a str, &'a [u8]),
}

/// Build a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File(name, filename, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/* --------------------------------------------------------------------------
Fixtures
-------------------------------------------------------------------------- */

/// Create a user directly in the database. Returns the row; the plaintext
/// password is whatever the caller passed in.
pub async fn create_user(pool: &PgPool, nickname: &str, password: &str, is_admin: bool) -> User {
    let password_hash = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            name: "Test".to_string(),
            surname: "User".to_string(),
            nickname: nickname.to_string(),
            password_hash,
            is_admin,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Log in through the real endpoint and return the `name=value` cookie pair
/// for use in subsequent requests.
pub async fn login(app: &Router, nickname: &str, password: &str) -> String {
    let body = format!("nickname={nickname}&password={password}");
    let response = post_form(app, "/admin/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .expect("cookie must be ASCII");
    set_cookie
        .split(';')
        .next()
        .expect("cookie has a name=value pair")
        .to_string()
}

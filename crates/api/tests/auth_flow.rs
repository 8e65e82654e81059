//! HTTP-level tests for session authentication and the admin guards.

mod common;

use axum::http::{header, StatusCode};
use common::{body_string, get, get_auth, location, post_form, post_form_auth};
use gazette_api::auth::session::{SessionSigner, SESSION_COOKIE};
use sqlx::PgPool;

use gazette_db::repositories::UserRepo;

#[sqlx::test(migrations = "../db/migrations")]
async fn login_sets_scoped_cookie_and_redirects(pool: PgPool) {
    common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    let response = post_form(&app, "/admin/login", "nickname=editor&password=editor-pass").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("Path=/admin"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    assert!(set_cookie.contains("Max-Age=604800"), "7-day max-age");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bad_credentials_rerender_the_form(pool: PgPool) {
    common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    // Wrong password and unknown nickname answer identically.
    for body in [
        "nickname=editor&password=wrong",
        "nickname=ghost&password=whatever",
    ] {
        let response = post_form(&app, "/admin/login", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Invalid nickname or password."));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn guarded_routes_redirect_without_a_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    for path in ["/admin/", "/admin/articles", "/admin/settings", "/admin/profile"] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&response), "/admin/login", "{path}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tampered_cookie_is_treated_as_unauthenticated(pool: PgPool) {
    common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    let cookie = common::login(&app, "editor", "editor-pass").await;

    // Flip the final signature character to a different hex digit.
    let mut tampered = cookie.clone().into_bytes();
    let last = tampered.last_mut().unwrap();
    *last = if *last == b'0' { b'1' } else { b'0' };
    let tampered = String::from_utf8(tampered).unwrap();

    let response = get_auth(&app, "/admin/", &tampered).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    // The untampered cookie still works.
    let response = get_auth(&app, "/admin/", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// A token signed under another process's secret (simulating a restart) is
/// rejected even though its shape is valid.
#[sqlx::test(migrations = "../db/migrations")]
async fn cookie_from_another_secret_is_rejected(pool: PgPool) {
    let user = common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    let foreign = SessionSigner::new([99u8; 32], 7);
    let cookie = format!("{SESSION_COOKIE}={}", foreign.issue(user.id));

    let response = get_auth(&app, "/admin/", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

/// Deleting the user behind a live session invalidates it on the next
/// request.
#[sqlx::test(migrations = "../db/migrations")]
async fn session_of_a_deleted_user_is_rejected(pool: PgPool) {
    let user = common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool.clone());

    let cookie = common::login(&app, "editor", "editor-pass").await;
    UserRepo::delete(&pool, user.id).await.unwrap();

    let response = get_auth(&app, "/admin/", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

/// Authenticated non-admins reach the content area but get 403 (not a
/// redirect) on user management.
#[sqlx::test(migrations = "../db/migrations")]
async fn user_management_requires_the_admin_flag(pool: PgPool) {
    common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    let cookie = common::login(&app, "editor", "editor-pass").await;

    let dashboard = get_auth(&app, "/admin/", &cookie).await;
    assert_eq!(dashboard.status(), StatusCode::OK);

    for path in ["/admin/users", "/admin/users/new"] {
        let response = get_auth(&app, path, &cookie).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{path}");
    }

    let response = post_form_auth(&app, "/admin/users", "nickname=x&password=y&name=&surname=", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_clears_the_cookie(pool: PgPool) {
    common::create_user(&pool, "editor", "editor-pass", false).await;
    let app = common::build_test_app(pool);

    let cookie = common::login(&app, "editor", "editor-pass").await;
    let response = post_form_auth(&app, "/admin/logout", "", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("Max-Age=0"), "cookie must be dropped immediately");
}

//! Shared page chrome: base layouts, error pages, small render helpers.

use axum::http::StatusCode;
use gazette_core::types::Timestamp;
use gazette_db::models::user::User;
use maud::{html, Markup, DOCTYPE};

/// Base document shared by every page.
pub(crate) fn document(title: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Gazette" }
                link rel="stylesheet" href="/static/style.css";
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

/// Visitor-facing layout with the public navigation.
pub fn public_page(title: &str, content: Markup) -> Markup {
    document(
        title,
        "public",
        html! {
            header.site-header {
                a.site-title href="/" { "Gazette" }
                nav {
                    a href="/" { "Home" }
                    a href="/articles" { "Articles" }
                    a href="/gallery" { "Gallery" }
                }
            }
            main { (content) }
        },
    )
}

/// Admin layout. `user` drives the Users link and the profile label.
pub fn admin_page(title: &str, user: &User, content: Markup) -> Markup {
    document(
        title,
        "admin",
        html! {
            header.admin-header {
                a.site-title href="/admin/" { "Gazette admin" }
                nav {
                    a href="/admin/" { "Dashboard" }
                    a href="/admin/articles" { "Articles" }
                    a href="/admin/galleries" { "Galleries" }
                    a href="/admin/comments" { "Comments" }
                    a href="/admin/settings" { "Settings" }
                    @if user.is_admin {
                        a href="/admin/users" { "Users" }
                    }
                    a href="/admin/profile" { (user.nickname) }
                    form.logout method="post" action="/admin/logout" {
                        button type="submit" { "Log out" }
                    }
                }
            }
            main { (content) }
        },
    )
}

/// Standalone error page (no session-dependent chrome).
pub fn error_page(status: StatusCode, heading: &str, message: &str) -> Markup {
    document(
        heading,
        "error",
        html! {
            main.error-page {
                h1 { (status.as_u16()) " " (heading) }
                p { (message) }
                p { a href="/" { "Back to the homepage" } }
            }
        },
    )
}

/// Render user text with newlines as line breaks. Each line goes through
/// maud's escaping before the `<br>` is interleaved.
pub fn nl2br(text: &str) -> Markup {
    html! {
        @for (i, line) in text.lines().enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

/// Short display form for timestamps.
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nl2br_escapes_and_breaks() {
        let rendered = nl2br("a<b\nc").into_string();
        assert_eq!(rendered, "a&lt;b<br>c");
    }

    #[test]
    fn error_page_carries_status_code() {
        let rendered = error_page(StatusCode::NOT_FOUND, "Page not found", "gone").into_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("gone"));
    }
}

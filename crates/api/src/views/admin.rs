//! Admin-area pages: login, dashboard, CRUD lists and forms.

use gazette_db::models::article::Article;
use gazette_db::models::comment::Comment;
use gazette_db::models::gallery::{Gallery, Image};
use gazette_db::models::setting::Setting;
use gazette_db::models::user::User;
use maud::{html, Markup};

use super::layout::{admin_page, document, format_date, nl2br};

/// Standalone login page; the only admin page rendered without a session.
pub fn login(error: Option<&str>) -> Markup {
    document(
        "Log in",
        "login",
        html! {
            main.login-page {
                h1 { "Gazette admin" }
                @if let Some(message) = error {
                    p.form-error { (message) }
                }
                form method="post" action="/admin/login" {
                    label {
                        "Nickname"
                        input type="text" name="nickname";
                    }
                    label {
                        "Password"
                        input type="password" name="password";
                    }
                    button type="submit" { "Log in" }
                }
            }
        },
    )
}

pub fn dashboard(
    article_count: i64,
    gallery_count: i64,
    pending_comments: i64,
    user: &User,
) -> Markup {
    admin_page(
        "Dashboard",
        user,
        html! {
            h1 { "Dashboard" }
            div.stat-grid {
                a.stat href="/admin/articles" {
                    span.value { (article_count) }
                    span.label { "Articles" }
                }
                a.stat href="/admin/galleries" {
                    span.value { (gallery_count) }
                    span.label { "Galleries" }
                }
                a.stat href="/admin/comments" {
                    span.value { (pending_comments) }
                    span.label { "Pending comments" }
                }
            }
        },
    )
}

/* --------------------------------------------------------------------------
Articles
-------------------------------------------------------------------------- */

pub fn articles_list(articles: &[Article], user: &User) -> Markup {
    admin_page(
        "Articles",
        user,
        html! {
            div.page-head {
                h1 { "Articles" }
                a.button href="/admin/articles/new" { "New article" }
            }
            @if articles.is_empty() {
                p.empty { "No articles yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Title" } th { "Slug" } th { "Status" } th { "Updated" } th {} }
                    }
                    tbody {
                        @for article in articles {
                            tr {
                                td { a href={ "/admin/articles/" (article.id) "/edit" } { (article.title) } }
                                td { code { (article.slug) } }
                                td {
                                    @if article.published { span.badge.published { "Published" } }
                                    @else { span.badge.draft { "Draft" } }
                                }
                                td { (format_date(&article.updated_at)) }
                                td.actions {
                                    a href={ "/admin/articles/" (article.id) "/edit" } { "Edit" }
                                    (delete_form(&format!("/admin/articles/{}/delete", article.id)))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn article_form(article: &Article, is_new: bool, error: Option<&str>, user: &User) -> Markup {
    let (title, action) = if is_new {
        ("New article".to_string(), "/admin/articles".to_string())
    } else {
        (
            format!("Edit: {}", article.title),
            format!("/admin/articles/{}", article.id),
        )
    };

    admin_page(
        &title,
        user,
        html! {
            h1 { (title) }
            @if let Some(message) = error {
                p.form-error { (message) }
            }
            form.entity-form method="post" action=(action) enctype="multipart/form-data" {
                label {
                    "Title"
                    input type="text" name="title" value=(article.title);
                }
                label {
                    "Slug"
                    input type="text" name="slug" value=(article.slug)
                        placeholder="derived from the title when left blank";
                }
                label {
                    "Excerpt"
                    input type="text" name="excerpt" value=(article.excerpt);
                }
                label {
                    "Content"
                    textarea name="content" rows="16" { (article.content) }
                }
                label.inline {
                    input type="checkbox" name="published" checked[article.published];
                    "Published"
                }
                label {
                    "Cover image"
                    input type="file" name="cover_image" accept="image/*";
                }
                @if !article.cover_image.is_empty() {
                    p.current-file {
                        "Current cover: "
                        img.thumb src={ "/uploads/" (article.cover_image) } alt=(article.title);
                    }
                }
                button type="submit" { @if is_new { "Create article" } @else { "Save changes" } }
            }
        },
    )
}

/* --------------------------------------------------------------------------
Galleries and images
-------------------------------------------------------------------------- */

pub fn galleries_list(galleries: &[(Gallery, Vec<Image>)], user: &User) -> Markup {
    admin_page(
        "Galleries",
        user,
        html! {
            div.page-head {
                h1 { "Galleries" }
                a.button href="/admin/galleries/new" { "New gallery" }
            }
            @if galleries.is_empty() {
                p.empty { "No galleries yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Title" } th { "Slug" } th { "Images" } th { "Updated" } th {} }
                    }
                    tbody {
                        @for (gallery, images) in galleries {
                            tr {
                                td { a href={ "/admin/galleries/" (gallery.id) "/edit" } { (gallery.title) } }
                                td { code { (gallery.slug) } }
                                td { (images.len()) }
                                td { (format_date(&gallery.updated_at)) }
                                td.actions {
                                    a href={ "/admin/galleries/" (gallery.id) "/edit" } { "Edit" }
                                    (delete_form(&format!("/admin/galleries/{}/delete", gallery.id)))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn gallery_form(
    gallery: &Gallery,
    images: &[Image],
    articles: &[Article],
    is_new: bool,
    error: Option<&str>,
    user: &User,
) -> Markup {
    let (title, action) = if is_new {
        ("New gallery".to_string(), "/admin/galleries".to_string())
    } else {
        (
            format!("Edit: {}", gallery.title),
            format!("/admin/galleries/{}", gallery.id),
        )
    };

    admin_page(
        &title,
        user,
        html! {
            h1 { (title) }
            @if let Some(message) = error {
                p.form-error { (message) }
            }
            form.entity-form method="post" action=(action) {
                label {
                    "Title"
                    input type="text" name="title" value=(gallery.title);
                }
                label {
                    "Slug"
                    input type="text" name="slug" value=(gallery.slug)
                        placeholder="derived from the title when left blank";
                }
                label {
                    "Description"
                    textarea name="description" rows="4" { (gallery.description) }
                }
                label {
                    "Linked article"
                    select name="article_id" {
                        option value="" { "(none)" }
                        @for article in articles {
                            option value=(article.id)
                                selected[gallery.article_id == Some(article.id)] {
                                (article.title)
                            }
                        }
                    }
                }
                button type="submit" { @if is_new { "Create gallery" } @else { "Save changes" } }
            }
            @if !is_new {
                section.gallery-images {
                    h2 { "Images" }
                    @if images.is_empty() {
                        p.empty { "No images yet." }
                    }
                    div.image-grid {
                        @for image in images {
                            figure {
                                img src={ "/uploads/" (image.filename) } alt=(image.caption);
                                figcaption {
                                    @if !image.caption.is_empty() { (image.caption) " " }
                                    (delete_form(&format!("/admin/images/{}/delete", image.id)))
                                }
                            }
                        }
                    }
                    form.upload-form method="post"
                        action={ "/admin/galleries/" (gallery.id) "/images" }
                        enctype="multipart/form-data" {
                        label {
                            "Add images"
                            input type="file" name="images" accept="image/*" multiple;
                        }
                        button type="submit" { "Upload" }
                    }
                }
            }
        },
    )
}

/* --------------------------------------------------------------------------
Comments
-------------------------------------------------------------------------- */

pub fn comments_list(comments: &[Comment], user: &User) -> Markup {
    admin_page(
        "Comments",
        user,
        html! {
            h1 { "Comments" }
            @if comments.is_empty() {
                p.empty { "No comments yet." }
            } @else {
                table {
                    thead {
                        tr { th { "Author" } th { "Comment" } th { "Article" } th { "Status" } th {} }
                    }
                    tbody {
                        @for comment in comments {
                            tr {
                                td { (comment.author_name) br; span.meta { (format_date(&comment.created_at)) } }
                                td.comment-text { (nl2br(&comment.content)) }
                                td { "#" (comment.article_id) }
                                td {
                                    @if comment.approved { span.badge.published { "Approved" } }
                                    @else { span.badge.draft { "Pending" } }
                                }
                                td.actions {
                                    @if !comment.approved {
                                        form method="post" action={ "/admin/comments/" (comment.id) "/approve" } {
                                            button type="submit" { "Approve" }
                                        }
                                    }
                                    (delete_form(&format!("/admin/comments/{}/delete", comment.id)))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/* --------------------------------------------------------------------------
Settings
-------------------------------------------------------------------------- */

pub fn settings_page(
    settings: &[Setting],
    comments_enabled: bool,
    saved: bool,
    user: &User,
) -> Markup {
    admin_page(
        "Settings",
        user,
        html! {
            h1 { "Settings" }
            @if saved {
                p.notice { "Settings saved." }
            }
            form.entity-form method="post" action="/admin/settings" {
                label.inline {
                    input type="checkbox" name="comments_enabled" checked[comments_enabled];
                    "Allow visitors to submit comments"
                }
                button type="submit" { "Save settings" }
            }
            @if !settings.is_empty() {
                h2 { "Stored values" }
                table {
                    thead { tr { th { "Key" } th { "Value" } } }
                    tbody {
                        @for setting in settings {
                            tr {
                                td { code { (setting.setting_key) } }
                                td { code { (setting.setting_value) } }
                            }
                        }
                    }
                }
            }
        },
    )
}

/* --------------------------------------------------------------------------
Users and profile
-------------------------------------------------------------------------- */

pub fn users_list(users: &[User], current: &User) -> Markup {
    admin_page(
        "Users",
        current,
        html! {
            div.page-head {
                h1 { "Users" }
                a.button href="/admin/users/new" { "New user" }
            }
            table {
                thead {
                    tr { th { "Nickname" } th { "Name" } th { "Role" } th { "Created" } th {} }
                }
                tbody {
                    @for user in users {
                        tr {
                            td {
                                a href={ "/admin/users/" (user.id) "/edit" } { (user.nickname) }
                                @if user.id == current.id { " (you)" }
                            }
                            td { (user.name) " " (user.surname) }
                            td {
                                @if user.is_admin { span.badge.published { "Admin" } }
                                @else { span.badge { "Editor" } }
                            }
                            td { (format_date(&user.created_at)) }
                            td.actions {
                                a href={ "/admin/users/" (user.id) "/edit" } { "Edit" }
                                @if user.id != current.id {
                                    (delete_form(&format!("/admin/users/{}/delete", user.id)))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn user_form(user: &User, is_new: bool, error: Option<&str>, current: &User) -> Markup {
    let (title, action) = if is_new {
        ("New user".to_string(), "/admin/users".to_string())
    } else {
        (
            format!("Edit: {}", user.nickname),
            format!("/admin/users/{}", user.id),
        )
    };

    admin_page(
        &title,
        current,
        html! {
            h1 { (title) }
            @if let Some(message) = error {
                p.form-error { (message) }
            }
            form.entity-form method="post" action=(action) {
                label {
                    "Name"
                    input type="text" name="name" value=(user.name);
                }
                label {
                    "Surname"
                    input type="text" name="surname" value=(user.surname);
                }
                label {
                    "Nickname"
                    input type="text" name="nickname" value=(user.nickname);
                }
                label {
                    "Password"
                    input type="password" name="password"
                        placeholder=(if is_new { "required" } else { "leave blank to keep current" });
                }
                label.inline {
                    input type="checkbox" name="is_admin" checked[user.is_admin];
                    "Administrator"
                }
                button type="submit" { @if is_new { "Create user" } @else { "Save changes" } }
            }
        },
    )
}

pub fn profile(user: &User, saved: bool, error: Option<&str>) -> Markup {
    admin_page(
        "Profile",
        user,
        html! {
            h1 { "Your profile" }
            @if saved {
                p.notice { "Profile saved." }
            }
            @if let Some(message) = error {
                p.form-error { (message) }
            }
            form.entity-form method="post" action="/admin/profile" {
                label {
                    "Name"
                    input type="text" name="name" value=(user.name);
                }
                label {
                    "Surname"
                    input type="text" name="surname" value=(user.surname);
                }
                label {
                    "New password"
                    input type="password" name="password" placeholder="leave blank to keep current";
                }
                button type="submit" { "Save profile" }
            }
        },
    )
}

/// Inline single-button delete form used in table action cells.
fn delete_form(action: &str) -> Markup {
    html! {
        form.inline-delete method="post" action=(action) {
            button.danger type="submit" { "Delete" }
        }
    }
}

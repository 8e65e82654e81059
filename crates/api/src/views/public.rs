//! Visitor-facing pages.

use gazette_core::pagination::Pagination;
use gazette_db::models::article::Article;
use gazette_db::models::comment::Comment;
use gazette_db::models::gallery::{Gallery, Image};
use maud::{html, Markup};

use super::layout::{format_date, nl2br, public_page};

/// One-shot notice shown above the comment form, driven by the redirect
/// query parameters after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentNotice {
    None,
    Pending,
    FieldsRequired,
}

pub fn home(articles: &[Article], featured: Option<&(Gallery, Vec<Image>)>) -> Markup {
    public_page(
        "Home",
        html! {
            section.articles {
                h1 { "Latest articles" }
                @if articles.is_empty() {
                    p.empty { "Nothing published yet." }
                }
                div.article-grid {
                    @for article in articles {
                        (article_card(article))
                    }
                }
            }
            @if let Some((gallery, images)) = featured {
                section.featured-gallery {
                    h2 { "From the gallery: " (gallery.title) }
                    div.image-strip {
                        @for image in images.iter().take(6) {
                            a href={ "/gallery/" (gallery.slug) } {
                                img src={ "/uploads/" (image.filename) } alt=(image.caption) loading="lazy";
                            }
                        }
                    }
                }
            }
        },
    )
}

fn article_card(article: &Article) -> Markup {
    html! {
        article.article-card {
            @if !article.cover_image.is_empty() {
                a href={ "/articles/" (article.slug) } {
                    img src={ "/uploads/" (article.cover_image) } alt=(article.title) loading="lazy";
                }
            }
            h2 { a href={ "/articles/" (article.slug) } { (article.title) } }
            p.meta { (format_date(&article.created_at)) }
            @if !article.excerpt.is_empty() {
                p.excerpt { (article.excerpt) }
            }
        }
    }
}

pub fn article_list(articles: &[Article], pagination: &Pagination) -> Markup {
    public_page(
        "Articles",
        html! {
            h1 { "Articles" }
            @if articles.is_empty() {
                p.empty { "No articles on this page." }
            }
            div.article-list {
                @for article in articles {
                    (article_card(article))
                }
            }
            @if pagination.total_pages > 1 {
                nav.pagination {
                    @if pagination.has_prev() {
                        a.prev href={ "/articles?page=" (pagination.prev_page()) } { "Newer" }
                    }
                    span.page { "Page " (pagination.page) " of " (pagination.total_pages) }
                    @if pagination.has_next() {
                        a.next href={ "/articles?page=" (pagination.next_page()) } { "Older" }
                    }
                }
            }
        },
    )
}

pub fn article_detail(
    article: &Article,
    comments: &[Comment],
    gallery: Option<&(Gallery, Vec<Image>)>,
    comments_enabled: bool,
    notice: CommentNotice,
) -> Markup {
    public_page(
        &article.title,
        html! {
            article.article-detail {
                h1 { (article.title) }
                p.meta { (format_date(&article.created_at)) }
                @if !article.cover_image.is_empty() {
                    img.cover src={ "/uploads/" (article.cover_image) } alt=(article.title);
                }
                div.content { (nl2br(&article.content)) }
            }
            @if let Some((gallery, images)) = gallery {
                section.article-gallery {
                    h2 { (gallery.title) }
                    (image_grid(images))
                }
            }
            section.comments {
                h2 { "Comments" }
                @match notice {
                    CommentNotice::Pending => {
                        p.notice { "Thank you! Your comment is awaiting moderation." }
                    },
                    CommentNotice::FieldsRequired => {
                        p.form-error { "Both name and comment text are required." }
                    },
                    CommentNotice::None => {},
                }
                @if comments.is_empty() {
                    p.empty { "No comments yet." }
                }
                ul.comment-list {
                    @for comment in comments {
                        li {
                            p.meta {
                                strong { (comment.author_name) }
                                " on " (format_date(&comment.created_at))
                            }
                            p { (nl2br(&comment.content)) }
                        }
                    }
                }
                @if comments_enabled {
                    form.comment-form method="post" action={ "/articles/" (article.slug) "/comments" } {
                        label {
                            "Name"
                            input type="text" name="author_name";
                        }
                        label {
                            "Comment"
                            textarea name="content" rows="4" {}
                        }
                        button type="submit" { "Submit comment" }
                    }
                } @else {
                    p.empty { "Comments are disabled." }
                }
            }
        },
    )
}

pub fn gallery_list(galleries: &[(Gallery, Vec<Image>)]) -> Markup {
    public_page(
        "Gallery",
        html! {
            h1 { "Galleries" }
            @if galleries.is_empty() {
                p.empty { "No galleries yet." }
            }
            div.gallery-grid {
                @for (gallery, images) in galleries {
                    a.gallery-card href={ "/gallery/" (gallery.slug) } {
                        @if let Some(cover) = images.first() {
                            img src={ "/uploads/" (cover.filename) } alt=(gallery.title) loading="lazy";
                        }
                        h2 { (gallery.title) }
                        p.meta { (images.len()) " photos" }
                    }
                }
            }
        },
    )
}

pub fn gallery_detail(gallery: &Gallery, images: &[Image]) -> Markup {
    public_page(
        &gallery.title,
        html! {
            h1 { (gallery.title) }
            @if !gallery.description.is_empty() {
                p.description { (nl2br(&gallery.description)) }
            }
            (image_grid(images))
        },
    )
}

fn image_grid(images: &[Image]) -> Markup {
    html! {
        div.image-grid {
            @for image in images {
                figure {
                    img src={ "/uploads/" (image.filename) } alt=(image.caption) loading="lazy";
                    @if !image.caption.is_empty() {
                        figcaption { (image.caption) }
                    }
                }
            }
        }
    }
}

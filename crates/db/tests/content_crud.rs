//! Integration tests for the content repository layer.
//!
//! Exercises the repositories against a real database:
//! - Article CRUD, published filtering, and pagination counts
//! - Gallery/image ordering and cascade delete
//! - Comment moderation state
//! - Settings upsert
//! - Unique constraint violations (slug, nickname)

use assert_matches::assert_matches;
use sqlx::PgPool;

use gazette_db::models::article::CreateArticle;
use gazette_db::models::comment::CreateComment;
use gazette_db::models::gallery::{CreateGallery, CreateImage};
use gazette_db::models::user::{CreateUser, UpdateUser};
use gazette_db::repositories::{
    ArticleRepo, CommentRepo, GalleryRepo, ImageRepo, SettingsRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_article(title: &str, slug: &str, published: bool) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        slug: slug.to_string(),
        content: "Body text".to_string(),
        excerpt: String::new(),
        cover_image: String::new(),
        published,
    }
}

fn new_gallery(title: &str, slug: &str, article_id: Option<i64>) -> CreateGallery {
    CreateGallery {
        title: title.to_string(),
        slug: slug.to_string(),
        description: String::new(),
        article_id,
    }
}

fn new_image(gallery_id: i64, filename: &str, sort_order: i32) -> CreateImage {
    CreateImage {
        gallery_id,
        filename: filename.to_string(),
        caption: String::new(),
        sort_order,
    }
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn article_create_assigns_id_and_roundtrips(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &new_article("Hello", "hello", true))
        .await
        .expect("create should succeed");
    assert!(created.id > 0);

    let by_id = ArticleRepo::find_by_id(&pool, created.id)
        .await
        .expect("query should succeed")
        .expect("row should exist");
    assert_eq!(by_id.slug, "hello");

    let by_slug = ArticleRepo::find_by_slug(&pool, "hello")
        .await
        .expect("query should succeed")
        .expect("row should exist");
    assert_eq!(by_slug.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn article_duplicate_slug_is_rejected(pool: PgPool) {
    ArticleRepo::create(&pool, &new_article("First", "same-slug", true))
        .await
        .expect("first create should succeed");

    let err = ArticleRepo::create(&pool, &new_article("Second", "same-slug", true))
        .await
        .expect_err("duplicate slug must violate uq_articles_slug");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn published_filter_and_pagination_counts(pool: PgPool) {
    for i in 0..5 {
        let published = i % 2 == 0;
        ArticleRepo::create(&pool, &new_article("A", &format!("a-{i}"), published))
            .await
            .expect("create should succeed");
    }

    assert_eq!(ArticleRepo::count(&pool).await.unwrap(), 5);
    assert_eq!(ArticleRepo::count_published(&pool).await.unwrap(), 3);

    let page = ArticleRepo::list_published_page(&pool, 2, 0)
        .await
        .expect("page query should succeed");
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|a| a.published));

    // Offset past the end yields an empty page, not an error.
    let past_end = ArticleRepo::list_published_page(&pool, 2, 10).await.unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn article_update_is_full_row_replace(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &new_article("Before", "before", false))
        .await
        .unwrap();

    let mut input = new_article("After", "after", true);
    input.excerpt = "Short".to_string();
    let updated = ArticleRepo::update(&pool, created.id, &input)
        .await
        .expect("update should succeed")
        .expect("row should exist");

    assert_eq!(updated.title, "After");
    assert_eq!(updated.slug, "after");
    assert!(updated.published);
    assert!(updated.updated_at >= created.updated_at);

    let missing = ArticleRepo::update(&pool, created.id + 999, &input).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Galleries and images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn image_order_is_sort_order_then_id(pool: PgPool) {
    let gallery = GalleryRepo::create(&pool, &new_gallery("G", "g", None))
        .await
        .unwrap();

    // Insert out of order, with a sort_order tie between b and c.
    ImageRepo::create(&pool, &new_image(gallery.id, "b.jpg", 1)).await.unwrap();
    ImageRepo::create(&pool, &new_image(gallery.id, "c.jpg", 1)).await.unwrap();
    ImageRepo::create(&pool, &new_image(gallery.id, "a.jpg", 0)).await.unwrap();

    let images = ImageRepo::list_by_gallery(&pool, gallery.id).await.unwrap();
    let names: Vec<&str> = images.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.jpg", "c.jpg"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_gallery_cascades_to_images(pool: PgPool) {
    let gallery = GalleryRepo::create(&pool, &new_gallery("G", "g", None))
        .await
        .unwrap();
    let image = ImageRepo::create(&pool, &new_image(gallery.id, "x.jpg", 0))
        .await
        .unwrap();

    assert!(GalleryRepo::delete(&pool, gallery.id).await.unwrap());
    assert!(ImageRepo::find_by_id(&pool, image.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_article_detaches_gallery(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("A", "a", true))
        .await
        .unwrap();
    let gallery = GalleryRepo::create(&pool, &new_gallery("G", "g", Some(article.id)))
        .await
        .unwrap();

    assert!(ArticleRepo::delete(&pool, article.id).await.unwrap());

    let detached = GalleryRepo::find_by_id(&pool, gallery.id)
        .await
        .unwrap()
        .expect("gallery must survive article deletion");
    assert_eq!(detached.article_id, None);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn comments_start_unapproved_and_approve_flips_visibility(pool: PgPool) {
    let article = ArticleRepo::create(&pool, &new_article("A", "a", true))
        .await
        .unwrap();

    let comment = CommentRepo::create(
        &pool,
        &CreateComment {
            article_id: article.id,
            author_name: "Visitor".to_string(),
            content: "Nice!".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(!comment.approved);

    let public = CommentRepo::list_by_article(&pool, article.id, true).await.unwrap();
    assert!(public.is_empty());
    let all = CommentRepo::list_by_article(&pool, article.id, false).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(CommentRepo::count_pending(&pool).await.unwrap(), 1);

    assert!(CommentRepo::approve(&pool, comment.id).await.unwrap());

    let public = CommentRepo::list_by_article(&pool, article.id, true).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(CommentRepo::count_pending(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn settings_set_is_upsert(pool: PgPool) {
    assert_eq!(SettingsRepo::get(&pool, "comments_enabled").await.unwrap(), None);

    SettingsRepo::set(&pool, "comments_enabled", "true").await.unwrap();
    assert_eq!(
        SettingsRepo::get(&pool, "comments_enabled").await.unwrap().as_deref(),
        Some("true")
    );

    SettingsRepo::set(&pool, "comments_enabled", "false").await.unwrap();
    assert_eq!(
        SettingsRepo::get(&pool, "comments_enabled").await.unwrap().as_deref(),
        Some("false")
    );

    assert_eq!(SettingsRepo::get_all(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn user_nickname_is_unique_and_update_keeps_password(pool: PgPool) {
    let input = CreateUser {
        name: "Ada".to_string(),
        surname: "L".to_string(),
        nickname: "ada".to_string(),
        password_hash: "$argon2id$dummy".to_string(),
        is_admin: false,
    };
    let user = UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input)
        .await
        .expect_err("duplicate nickname must violate uq_users_nickname");
    assert_matches!(err, sqlx::Error::Database(_));

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            nickname: "ada".to_string(),
            is_admin: true,
        },
    )
    .await
    .unwrap()
    .expect("row should exist");
    assert_eq!(updated.password_hash, user.password_hash);
    assert!(updated.is_admin);

    assert!(UserRepo::update_password(&pool, user.id, "$argon2id$new").await.unwrap());
    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.password_hash, "$argon2id$new");
}

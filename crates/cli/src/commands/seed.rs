//! Development seeding.
//!
//! Seeds `page_content` documents from the built-in fallback tables and a
//! small set of sample programs and posts. Existing documents are left
//! alone, so the command is safe to re-run.

use serde_json::json;

use noor_core::{ContentDocument, Language, collections, static_fallback};

use super::{CommandError, connect};

/// Seed page content and sample catalog data.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or a write fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    let mut seeded = 0_u32;
    for key in collections::PAGE_KEYS {
        let Some(fallback) = static_fallback(key) else {
            continue;
        };
        let document =
            ContentDocument::from_maps(&fallback.map(Language::En), &fallback.map(Language::Ar));
        let data = serde_json::to_value(&document)
            .map_err(|e| CommandError::InvalidInput(e.to_string()))?;

        if insert_if_absent(&pool, collections::PAGE_CONTENT, key, &data).await? {
            seeded += 1;
        }
    }
    tracing::info!("Seeded {seeded} page content documents");

    let samples = [
        (
            collections::PROGRAMS,
            "sample-literacy",
            json!({
                "title": { "en": "Adult Literacy Circles", "ar": "حلقات محو الأمية للكبار" },
                "description": {
                    "en": "Weekly small-group reading and writing sessions for adults.",
                    "ar": "جلسات أسبوعية للقراءة والكتابة في مجموعات صغيرة للكبار."
                },
                "icon": "book-open",
                "gallery": []
            }),
        ),
        (
            collections::PROGRAMS,
            "sample-food-relief",
            json!({
                "title": { "en": "Neighborhood Food Relief", "ar": "الإغاثة الغذائية للأحياء" },
                "description": {
                    "en": "Monthly grocery distribution for families in need.",
                    "ar": "توزيع شهري للمواد الغذائية للأسر المحتاجة."
                },
                "icon": "heart-handshake",
                "gallery": []
            }),
        ),
        (
            collections::POSTS,
            "sample-welcome",
            json!({
                "slug": "welcome",
                "title": { "en": "Welcome to our new site", "ar": "مرحبا بكم في موقعنا الجديد" },
                "excerpt": {
                    "en": "A fresh home for foundation news and updates.",
                    "ar": "منزل جديد لأخبار المؤسسة وتحديثاتها."
                },
                "body": {
                    "en": "We are delighted to launch our new bilingual website.",
                    "ar": "يسعدنا إطلاق موقعنا الجديد ثنائي اللغة."
                },
                "image": null,
                "date": "2026-01-15"
            }),
        ),
    ];

    let mut sample_count = 0_u32;
    for (collection, id, data) in samples {
        if insert_if_absent(&pool, collection, id, &data).await? {
            sample_count += 1;
        }
    }
    tracing::info!("Seeded {sample_count} sample documents");

    tracing::info!("Seeding complete!");
    Ok(())
}

/// Insert a document unless one already exists. Returns whether a row was
/// written.
async fn insert_if_absent(
    pool: &sqlx::PgPool,
    collection: &str,
    id: &str,
    data: &serde_json::Value,
) -> Result<bool, CommandError> {
    let result = sqlx::query(
        r"
        INSERT INTO document (collection, id, data, created_at, updated_at)
        VALUES ($1, $2, $3, now(), now())
        ON CONFLICT (collection, id) DO NOTHING
        ",
    )
    .bind(collection)
    .bind(id)
    .bind(data)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::template::{Template, TemplateRow};
use crate::templates::catalog::TemplateSeed;

/// Active templates only; soft-deactivated ones are invisible to clients.
pub async fn list_active(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
    let rows: Vec<TemplateRow> =
        sqlx::query_as("SELECT * FROM templates WHERE is_active = TRUE ORDER BY created_at")
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(Template::from).collect())
}

/// Lookup by the user-facing string id, not the storage id.
pub async fn find_by_template_id(
    pool: &PgPool,
    template_id: &str,
) -> Result<Option<Template>, sqlx::Error> {
    let row: Option<TemplateRow> = sqlx::query_as("SELECT * FROM templates WHERE template_id = $1")
        .bind(template_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Template::from))
}

/// Destructive reset: delete everything, then insert the seeds.
/// Deliberately not transactional — a failure between the two steps leaves
/// the catalog empty, and callers treat the whole operation as a retryable
/// reset. New storage ids are assigned on every call.
pub async fn replace_all(
    pool: &PgPool,
    seeds: Vec<TemplateSeed>,
) -> Result<Vec<Template>, sqlx::Error> {
    sqlx::query("DELETE FROM templates").execute(pool).await?;

    let mut inserted = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let row: TemplateRow = sqlx::query_as(
            r#"
            INSERT INTO templates
                (template_id, name, description, thumbnail, category, layout, styles)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(seed.template_id)
        .bind(seed.name)
        .bind(seed.description)
        .bind(seed.thumbnail)
        .bind(seed.category.as_str())
        .bind(Json(seed.layout))
        .bind(Json(seed.styles))
        .fetch_one(pool)
        .await?;
        inserted.push(row.into());
    }

    Ok(inserted)
}

//! Persistence for the resume aggregate. One row per resume; every write is
//! a single whole-document statement, so a validation failure upstream never
//! leaves a partially-updated row. Concurrent updates to the same id are
//! last-writer-wins.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::{
    Resume, ResumeData, ResumePayload, ResumeRow, Transcription, DEFAULT_TEMPLATE_ID,
};

pub async fn insert(pool: &PgPool, payload: ResumePayload) -> Result<Resume, sqlx::Error> {
    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes
            (personal_info, experience, education, skills, projects,
             certifications, achievements, template_id, layout)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Json(payload.personal_info.unwrap_or_default()))
    .bind(Json(payload.experience.unwrap_or_default()))
    .bind(Json(payload.education.unwrap_or_default()))
    .bind(Json(payload.skills.unwrap_or_default()))
    .bind(Json(payload.projects.unwrap_or_default()))
    .bind(Json(payload.certifications.unwrap_or_default()))
    .bind(Json(payload.achievements.unwrap_or_default()))
    .bind(
        payload
            .template_id
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()),
    )
    .bind(Json(payload.layout.unwrap_or_default()))
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All resumes, most recently updated first.
pub async fn list(pool: &PgPool) -> Result<Vec<Resume>, sqlx::Error> {
    let rows: Vec<ResumeRow> = sqlx::query_as("SELECT * FROM resumes ORDER BY updated_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(Resume::from).collect())
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Resume>, sqlx::Error> {
    let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Resume::from))
}

/// Replaces exactly the fields the payload carries and refreshes
/// `updated_at`. Omitted fields keep their stored values via COALESCE.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    payload: ResumePayload,
) -> Result<Option<Resume>, sqlx::Error> {
    let row: Option<ResumeRow> = sqlx::query_as(
        r#"
        UPDATE resumes SET
            personal_info  = COALESCE($2, personal_info),
            experience     = COALESCE($3, experience),
            education      = COALESCE($4, education),
            skills         = COALESCE($5, skills),
            projects       = COALESCE($6, projects),
            certifications = COALESCE($7, certifications),
            achievements   = COALESCE($8, achievements),
            template_id    = COALESCE($9, template_id),
            layout         = COALESCE($10, layout),
            updated_at     = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(payload.personal_info.map(Json))
    .bind(payload.experience.map(Json))
    .bind(payload.education.map(Json))
    .bind(payload.skills.map(Json))
    .bind(payload.projects.map(Json))
    .bind(payload.certifications.map(Json))
    .bind(payload.achievements.map(Json))
    .bind(payload.template_id)
    .bind(payload.layout.map(Json))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Resume::from))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Pushes one `{text, now}` entry onto the transcription log.
/// The log is append-only; no other statement touches it.
pub async fn append_transcription(
    pool: &PgPool,
    id: Uuid,
    text: &str,
) -> Result<Option<Resume>, sqlx::Error> {
    let entry = vec![Transcription {
        text: text.to_string(),
        timestamp: Utc::now(),
    }];

    let row: Option<ResumeRow> = sqlx::query_as(
        r#"
        UPDATE resumes SET
            transcriptions = transcriptions || $2,
            updated_at     = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(Json(entry))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Resume::from))
}

/// Writes back AI-merged content and appends the transcript that produced it
/// in one statement, so the enhancement is all-or-nothing.
pub async fn apply_enhancement(
    pool: &PgPool,
    id: Uuid,
    data: &ResumeData,
    transcript: &str,
) -> Result<Option<Resume>, sqlx::Error> {
    let entry = vec![Transcription {
        text: transcript.to_string(),
        timestamp: Utc::now(),
    }];

    let row: Option<ResumeRow> = sqlx::query_as(
        r#"
        UPDATE resumes SET
            personal_info  = $2,
            experience     = $3,
            education      = $4,
            skills         = $5,
            projects       = $6,
            certifications = $7,
            achievements   = $8,
            transcriptions = transcriptions || $9,
            updated_at     = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(Json(&data.personal_info))
    .bind(Json(&data.experience))
    .bind(Json(&data.education))
    .bind(Json(&data.skills))
    .bind(Json(&data.projects))
    .bind(Json(&data.certifications))
    .bind(Json(&data.achievements))
    .bind(Json(entry))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Resume::from))
}

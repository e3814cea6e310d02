use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Presentation category of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Minimal,
    Professional,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Modern => "modern",
            TemplateCategory::Classic => "classic",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Professional => "professional",
        }
    }

    /// Unknown stored values fall back to `Modern` rather than failing a read.
    pub fn from_stored(s: &str) -> Self {
        match s {
            "classic" => TemplateCategory::Classic,
            "creative" => TemplateCategory::Creative,
            "minimal" => TemplateCategory::Minimal,
            "professional" => TemplateCategory::Professional,
            _ => TemplateCategory::Modern,
        }
    }
}

/// A presentation preset. `template_id` is the user-facing identifier
/// resumes reference; `id` is the storage key and changes on every re-seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub category: TemplateCategory,
    pub layout: Value,
    pub styles: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct TemplateRow {
    pub id: Uuid,
    pub template_id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub layout: Json<Value>,
    pub styles: Json<Value>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TemplateRow> for Template {
    fn from(row: TemplateRow) -> Self {
        Template {
            id: row.id,
            template_id: row.template_id,
            name: row.name,
            description: row.description,
            thumbnail: row.thumbnail,
            category: TemplateCategory::from_stored(&row.category),
            layout: row.layout.0,
            styles: row.styles.0,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateCategory::Professional).unwrap(),
            "\"professional\""
        );
    }

    #[test]
    fn test_unknown_category_rejected_on_the_wire() {
        let result: Result<TemplateCategory, _> = serde_json::from_str("\"futuristic\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_stored_category_falls_back_to_modern() {
        assert_eq!(
            TemplateCategory::from_stored("futuristic"),
            TemplateCategory::Modern
        );
        assert_eq!(
            TemplateCategory::from_stored("minimal"),
            TemplateCategory::Minimal
        );
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Open-ended layout metadata interpreted only by the client.
pub type LayoutMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linked_in: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: Option<String>,
    pub skills: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementEntry {
    pub description: Option<String>,
    pub order: i32,
}

/// One raw speech-to-text submission, retained verbatim. Append-only:
/// nothing edits or removes an entry short of deleting the parent resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// The editable content of a resume: personal info plus the six ordered
/// collections. This is the shape the AI bridge produces and the merge
/// operates on; `order` is a display hint, neither unique nor contiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub achievements: Vec<AchievementEntry>,
}

/// Full resume aggregate as served over the wire.
/// All six collections are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub template_id: String,
    pub layout: LayoutMap,
    pub transcriptions: Vec<Transcription>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resume {
    /// The subset of the resume the AI bridge sees and the merge rewrites.
    pub fn data(&self) -> ResumeData {
        ResumeData {
            personal_info: self.personal_info.clone(),
            experience: self.experience.clone(),
            education: self.education.clone(),
            skills: self.skills.clone(),
            projects: self.projects.clone(),
            certifications: self.certifications.clone(),
            achievements: self.achievements.clone(),
        }
    }
}

/// Client payload for create and update. Every field is optional; update
/// replaces exactly the fields present. Transcriptions are deliberately
/// absent — the log is append-only and only reachable through
/// `POST /api/resumes/:id/transcriptions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePayload {
    pub personal_info: Option<PersonalInfo>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<SkillGroup>>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub certifications: Option<Vec<CertificationEntry>>,
    pub achievements: Option<Vec<AchievementEntry>>,
    pub template_id: Option<String>,
    pub layout: Option<LayoutMap>,
}

pub const DEFAULT_TEMPLATE_ID: &str = "modern";

/// Storage row for a resume. Each collection lives in its own JSONB column.
#[derive(Debug, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub personal_info: Json<PersonalInfo>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub skills: Json<Vec<SkillGroup>>,
    pub projects: Json<Vec<ProjectEntry>>,
    pub certifications: Json<Vec<CertificationEntry>>,
    pub achievements: Json<Vec<AchievementEntry>>,
    pub template_id: String,
    pub layout: Json<LayoutMap>,
    pub transcriptions: Json<Vec<Transcription>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for Resume {
    fn from(row: ResumeRow) -> Self {
        Resume {
            id: row.id,
            personal_info: row.personal_info.0,
            experience: row.experience.0,
            education: row.education.0,
            skills: row.skills.0,
            projects: row.projects.0,
            certifications: row.certifications.0,
            achievements: row.achievements.0,
            template_id: row.template_id,
            layout: row.layout.0,
            transcriptions: row.transcriptions.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_data_tolerates_missing_keys() {
        // The AI provider is not trusted to return every key.
        let raw = r#"{"personalInfo":{"name":"Jane Doe","summary":"Backend engineer"}}"#;
        let data: ResumeData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.personal_info.name.as_deref(), Some("Jane Doe"));
        assert!(data.experience.is_empty());
        assert!(data.achievements.is_empty());
    }

    #[test]
    fn test_payload_uses_camel_case_and_defaults_order() {
        let raw = r#"{
            "personalInfo": {"linkedIn": "linkedin.com/in/jane"},
            "experience": [{"company": "Acme", "role": "Engineer"}],
            "templateId": "classic"
        }"#;
        let payload: ResumePayload = serde_json::from_str(raw).unwrap();
        let info = payload.personal_info.unwrap();
        assert_eq!(info.linked_in.as_deref(), Some("linkedin.com/in/jane"));
        let experience = payload.experience.unwrap();
        assert_eq!(experience[0].order, 0);
        assert_eq!(payload.template_id.as_deref(), Some("classic"));
    }

    #[test]
    fn test_wire_round_trip_preserves_fields() {
        let resume = Resume {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo {
                name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: Some("Acme".into()),
                role: Some("Engineer".into()),
                duration: Some("2020 - 2023".into()),
                description: Some("Built things".into()),
                order: 1,
            }],
            education: vec![],
            skills: vec![SkillGroup {
                category: Some("Languages".into()),
                skills: vec!["Rust".into(), "SQL".into()],
                order: 0,
            }],
            projects: vec![],
            certifications: vec![],
            achievements: vec![],
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            layout: LayoutMap::new(),
            transcriptions: vec![Transcription {
                text: "I worked at Acme".into(),
                timestamp: Utc::now(),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&resume).unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"templateId\""));
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
    }
}

//! Explicit field-by-field merge of an AI enhancement into stored resume
//! content. Precedence rules:
//!
//! - personal info: a non-empty incoming string overrides, anything else
//!   keeps the existing value;
//! - collections: a non-empty incoming collection replaces the stored one
//!   wholesale (the observable contract clients rely on); an empty or
//!   omitted collection leaves the stored one untouched, so a provider that
//!   drops a section cannot erase it.
//!
//! Template id, layout, transcriptions, and timestamps are outside the
//! merge's reach entirely.

use crate::models::resume::{PersonalInfo, ResumeData};

pub fn merge_resume_data(existing: &ResumeData, incoming: ResumeData) -> ResumeData {
    ResumeData {
        personal_info: merge_personal_info(&existing.personal_info, incoming.personal_info),
        experience: merge_collection(&existing.experience, incoming.experience),
        education: merge_collection(&existing.education, incoming.education),
        skills: merge_collection(&existing.skills, incoming.skills),
        projects: merge_collection(&existing.projects, incoming.projects),
        certifications: merge_collection(&existing.certifications, incoming.certifications),
        achievements: merge_collection(&existing.achievements, incoming.achievements),
    }
}

fn merge_personal_info(existing: &PersonalInfo, incoming: PersonalInfo) -> PersonalInfo {
    PersonalInfo {
        name: merge_field(&existing.name, incoming.name),
        email: merge_field(&existing.email, incoming.email),
        phone: merge_field(&existing.phone, incoming.phone),
        location: merge_field(&existing.location, incoming.location),
        linked_in: merge_field(&existing.linked_in, incoming.linked_in),
        github: merge_field(&existing.github, incoming.github),
        website: merge_field(&existing.website, incoming.website),
        summary: merge_field(&existing.summary, incoming.summary),
    }
}

fn merge_field(existing: &Option<String>, incoming: Option<String>) -> Option<String> {
    match incoming {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => existing.clone(),
    }
}

fn merge_collection<T: Clone>(existing: &[T], incoming: Vec<T>) -> Vec<T> {
    if incoming.is_empty() {
        existing.to_vec()
    } else {
        incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    fn existing() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: Some("Acme".into()),
                role: Some("Engineer".into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_non_empty_incoming_string_overrides() {
        let mut incoming = ResumeData::default();
        incoming.personal_info.email = Some("jane.doe@corp.com".into());
        let merged = merge_resume_data(&existing(), incoming);
        assert_eq!(merged.personal_info.email.as_deref(), Some("jane.doe@corp.com"));
        // Untouched fields survive.
        assert_eq!(merged.personal_info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_empty_incoming_string_keeps_existing() {
        let mut incoming = ResumeData::default();
        incoming.personal_info.name = Some("   ".into());
        let merged = merge_resume_data(&existing(), incoming);
        assert_eq!(merged.personal_info.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_non_empty_collection_replaces_wholesale() {
        let mut incoming = ResumeData::default();
        incoming.experience = vec![ExperienceEntry {
            company: Some("Globex".into()),
            ..Default::default()
        }];
        let merged = merge_resume_data(&existing(), incoming);
        assert_eq!(merged.experience.len(), 1);
        assert_eq!(merged.experience[0].company.as_deref(), Some("Globex"));
    }

    #[test]
    fn test_omitted_collection_survives() {
        // Provider dropped "experience" entirely; stored entries must remain.
        let merged = merge_resume_data(&existing(), ResumeData::default());
        assert_eq!(merged.experience.len(), 1);
        assert_eq!(merged.experience[0].company.as_deref(), Some("Acme"));
    }
}

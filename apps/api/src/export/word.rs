//! Resume → Word document. Walks the same sections as the HTML renderer in
//! the same order; an empty collection contributes no paragraphs at all.

use std::io::Cursor;

use bytes::Bytes;
use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use crate::errors::AppError;
use crate::models::resume::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, Resume,
    SkillGroup,
};

const HEADING_COLOR: &str = "2c3e50";

pub fn generate_word(resume: &Resume) -> Result<Bytes, AppError> {
    let mut docx = Docx::new();
    for paragraph in build_paragraphs(resume) {
        docx = docx.add_paragraph(paragraph);
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Render(format!("Failed to build Word document: {e}")))?;
    Ok(Bytes::from(cursor.into_inner()))
}

fn build_paragraphs(resume: &Resume) -> Vec<Paragraph> {
    let info = &resume.personal_info;
    let mut paragraphs = Vec::new();

    paragraphs.push(
        Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new()
                .add_text(info.name.clone().unwrap_or_default())
                .bold()
                .size(48),
        ),
    );

    let contact = join_present(&[&info.email, &info.phone, &info.location]);
    if !contact.is_empty() {
        paragraphs.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(contact)),
        );
    }

    let links = join_present(&[&info.linked_in, &info.github, &info.website]);
    if !links.is_empty() {
        paragraphs.push(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(links)),
        );
    }

    if let Some(summary) = non_empty(&info.summary) {
        paragraphs.push(heading("PROFESSIONAL SUMMARY"));
        paragraphs.push(Paragraph::new().add_run(Run::new().add_text(summary)));
    }

    paragraphs.extend(experience_paragraphs(&resume.experience));
    paragraphs.extend(education_paragraphs(&resume.education));
    paragraphs.extend(skill_paragraphs(&resume.skills));
    paragraphs.extend(project_paragraphs(&resume.projects));
    paragraphs.extend(certification_paragraphs(&resume.certifications));
    paragraphs.extend(achievement_paragraphs(&resume.achievements));

    paragraphs
}

fn experience_paragraphs(items: &[ExperienceEntry]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("EXPERIENCE")];
    for exp in items {
        out.push(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(exp.role.clone().unwrap_or_default())
                        .bold(),
                )
                .add_run(
                    Run::new().add_text(format!(" - {}", exp.company.clone().unwrap_or_default())),
                ),
        );
        if let Some(duration) = non_empty(&exp.duration) {
            out.push(Paragraph::new().add_run(Run::new().add_text(duration).italic()));
        }
        if let Some(description) = non_empty(&exp.description) {
            out.push(Paragraph::new().add_run(Run::new().add_text(description)));
        }
    }
    out
}

fn education_paragraphs(items: &[EducationEntry]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("EDUCATION")];
    for edu in items {
        out.push(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(edu.degree.clone().unwrap_or_default())
                        .bold(),
                )
                .add_run(
                    Run::new()
                        .add_text(format!(" - {}", edu.institution.clone().unwrap_or_default())),
                ),
        );
        if let Some(year) = non_empty(&edu.year) {
            out.push(Paragraph::new().add_run(Run::new().add_text(year)));
        }
    }
    out
}

fn skill_paragraphs(items: &[SkillGroup]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("SKILLS")];
    for group in items {
        out.push(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(format!(
                            "{}: ",
                            group.category.clone().unwrap_or_default()
                        ))
                        .bold(),
                )
                .add_run(Run::new().add_text(group.skills.join(", "))),
        );
    }
    out
}

fn project_paragraphs(items: &[ProjectEntry]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("PROJECTS")];
    for project in items {
        out.push(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(project.name.clone().unwrap_or_default())
                    .bold(),
            ),
        );
        if let Some(description) = non_empty(&project.description) {
            out.push(Paragraph::new().add_run(Run::new().add_text(description)));
        }
        if !project.technologies.is_empty() {
            out.push(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text(format!("Technologies: {}", project.technologies.join(", ")))
                        .italic(),
                ),
            );
        }
    }
    out
}

fn certification_paragraphs(items: &[CertificationEntry]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("CERTIFICATIONS")];
    for cert in items {
        out.push(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(cert.name.clone().unwrap_or_default())
                        .bold(),
                )
                .add_run(
                    Run::new().add_text(format!(" - {}", cert.issuer.clone().unwrap_or_default())),
                ),
        );
        if let Some(year) = non_empty(&cert.year) {
            out.push(Paragraph::new().add_run(Run::new().add_text(year)));
        }
    }
    out
}

fn achievement_paragraphs(items: &[AchievementEntry]) -> Vec<Paragraph> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = vec![heading("ACHIEVEMENTS")];
    for achievement in items {
        out.push(
            Paragraph::new().add_run(
                Run::new().add_text(achievement.description.clone().unwrap_or_default()),
            ),
        );
    }
    out
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(28)
            .color(HEADING_COLOR),
    )
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn join_present(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|f| non_empty(f))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{LayoutMap, PersonalInfo, DEFAULT_TEMPLATE_ID};
    use chrono::Utc;
    use uuid::Uuid;

    fn resume() -> Resume {
        Resume {
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
                description: Some("Built services".into()),
                order: 0,
            }],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            achievements: vec![],
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            layout: LayoutMap::new(),
            transcriptions: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_generated_bytes_are_a_zip_container() {
        let bytes = generate_word(&resume()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_sections_contribute_no_paragraphs() {
        assert!(education_paragraphs(&[]).is_empty());
        assert!(project_paragraphs(&[]).is_empty());
        assert!(achievement_paragraphs(&[]).is_empty());
    }

    #[test]
    fn test_populated_section_leads_with_heading() {
        let paragraphs = experience_paragraphs(&resume().experience);
        // Heading plus role line, duration, and description.
        assert_eq!(paragraphs.len(), 4);
    }
}

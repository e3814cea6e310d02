//! Resume → self-contained HTML document, the input to print-to-PDF.
//! Pure function of the resume: sections appear in a fixed order and an
//! empty collection contributes nothing, not even its heading.

use std::fmt::Write;

use crate::models::resume::{PersonalInfo, Resume};

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Arial', sans-serif; line-height: 1.6; color: #333; padding: 20px; }
    .header { text-align: center; margin-bottom: 30px; }
    .header h1 { font-size: 32px; margin-bottom: 10px; color: #2c3e50; }
    .header .contact { font-size: 14px; color: #7f8c8d; }
    .section { margin-bottom: 25px; }
    .section h2 { font-size: 20px; color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 5px; margin-bottom: 15px; }
    .experience-item, .education-item, .project-item { margin-bottom: 15px; }
    .experience-item h3, .education-item h3, .project-item h3 { font-size: 16px; color: #2c3e50; }
    .experience-item .duration, .education-item .year { font-style: italic; color: #7f8c8d; font-size: 14px; }
    .skills-grid { display: flex; flex-wrap: wrap; gap: 10px; }
    .skill-category { margin-bottom: 10px; }
    .skill-category strong { color: #2c3e50; }
    ul { margin-left: 20px; }
  </style>
</head>
<body>
"#;

/// Renders a resume to an inline-styled HTML document.
///
/// `template_id` is accepted for parity with the export API but does not yet
/// select a layout; every export uses the default rendering.
pub fn build_html_content(resume: &Resume, _template_id: &str) -> String {
    let info = &resume.personal_info;
    let mut html = String::with_capacity(4096);
    html.push_str(HTML_HEAD);

    write_header(&mut html, info);

    if let Some(summary) = non_empty(&info.summary) {
        let _ = write!(
            html,
            "<div class=\"section\">\n<h2>Professional Summary</h2>\n<p>{}</p>\n</div>\n",
            escape(summary)
        );
    }

    if !resume.experience.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Experience</h2>\n");
        for exp in &resume.experience {
            let _ = write!(
                html,
                "<div class=\"experience-item\">\n<h3>{} - {}</h3>\n<div class=\"duration\">{}</div>\n<p>{}</p>\n</div>\n",
                text(&exp.role),
                text(&exp.company),
                text(&exp.duration),
                text(&exp.description)
            );
        }
        html.push_str("</div>\n");
    }

    if !resume.education.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Education</h2>\n");
        for edu in &resume.education {
            let _ = write!(
                html,
                "<div class=\"education-item\">\n<h3>{} - {}</h3>\n<div class=\"year\">{}</div>\n</div>\n",
                text(&edu.degree),
                text(&edu.institution),
                text(&edu.year)
            );
        }
        html.push_str("</div>\n");
    }

    if !resume.skills.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Skills</h2>\n<div class=\"skills-grid\">\n");
        for group in &resume.skills {
            let items: Vec<String> = group.skills.iter().map(|s| escape(s)).collect();
            let _ = write!(
                html,
                "<div class=\"skill-category\">\n<strong>{}:</strong> {}\n</div>\n",
                text(&group.category),
                items.join(", ")
            );
        }
        html.push_str("</div>\n</div>\n");
    }

    if !resume.projects.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Projects</h2>\n");
        for project in &resume.projects {
            let technologies: Vec<String> =
                project.technologies.iter().map(|t| escape(t)).collect();
            let _ = write!(
                html,
                "<div class=\"project-item\">\n<h3>{}</h3>\n<p>{}</p>\n<p><em>Technologies: {}</em></p>\n</div>\n",
                text(&project.name),
                text(&project.description),
                technologies.join(", ")
            );
        }
        html.push_str("</div>\n");
    }

    if !resume.certifications.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Certifications</h2>\n");
        for cert in &resume.certifications {
            let _ = write!(
                html,
                "<div class=\"education-item\">\n<h3>{} - {}</h3>\n<div class=\"year\">{}</div>\n</div>\n",
                text(&cert.name),
                text(&cert.issuer),
                text(&cert.year)
            );
        }
        html.push_str("</div>\n");
    }

    if !resume.achievements.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Achievements</h2>\n<ul>\n");
        for achievement in &resume.achievements {
            let _ = write!(html, "<li>{}</li>\n", text(&achievement.description));
        }
        html.push_str("</ul>\n</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn write_header(html: &mut String, info: &PersonalInfo) {
    let name = non_empty(&info.name).unwrap_or("Resume");
    let contact = join_present(&[&info.email, &info.phone, &info.location]);
    let links = join_present(&[&info.linked_in, &info.github, &info.website]);
    let _ = write!(
        html,
        "<div class=\"header\">\n<h1>{}</h1>\n<div class=\"contact\">{}</div>\n<div class=\"contact\">{}</div>\n</div>\n",
        escape(name),
        contact,
        links
    );
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn text(field: &Option<String>) -> String {
    non_empty(field).map(escape).unwrap_or_default()
}

/// Joins the present fields with " | ", escaping each.
fn join_present(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|f| non_empty(f))
        .map(escape)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        ExperienceEntry, LayoutMap, ProjectEntry, DEFAULT_TEMPLATE_ID,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn resume() -> Resume {
        Resume {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo {
                name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                summary: Some("Backend engineer".into()),
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
    fn test_empty_collections_produce_no_headings() {
        let html = build_html_content(&resume(), "modern");
        assert!(html.contains("<h2>Experience</h2>"));
        assert!(!html.contains("<h2>Projects</h2>"));
        assert!(!html.contains("<h2>Education</h2>"));
        assert!(!html.contains("<h2>Skills</h2>"));
    }

    #[test]
    fn test_header_always_present() {
        let mut r = resume();
        r.personal_info = PersonalInfo::default();
        let html = build_html_content(&r, "modern");
        assert!(html.contains("<h1>Resume</h1>"));
    }

    #[test]
    fn test_summary_section_follows_from_content() {
        let html = build_html_content(&resume(), "modern");
        assert!(html.contains("<h2>Professional Summary</h2>"));

        let mut r = resume();
        r.personal_info.summary = None;
        let html = build_html_content(&r, "modern");
        assert!(!html.contains("Professional Summary"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut r = resume();
        r.projects = vec![ProjectEntry {
            name: Some("<script>alert('x')</script>".into()),
            description: Some("a & b".into()),
            technologies: vec!["Rust".into()],
            order: 0,
        }];
        let html = build_html_content(&r, "modern");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_template_id_does_not_change_structure() {
        // Known gap: the template id is accepted but not yet interpreted.
        let a = build_html_content(&resume(), "modern");
        let b = build_html_content(&resume(), "classic");
        assert_eq!(a, b);
    }
}

//! Prompt templates for the AI bridge. Placeholders are filled with
//! `str::replace`; every template demands a JSON-only response matching the
//! resume schema so `complete_json` can parse it strictly.

pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are an expert ATS (Applicant Tracking System) resume optimizer.
Extract and structure the following information from the speech text into a professional resume format.

Speech Text:
{speech_text}

Return ONLY a valid JSON object with this exact structure (no additional text):
{
  "personalInfo": {
    "name": "string",
    "email": "string",
    "phone": "string",
    "location": "string",
    "linkedIn": "string",
    "github": "string",
    "website": "string",
    "summary": "string (professional summary optimized for ATS)"
  },
  "experience": [
    {
      "company": "string",
      "role": "string",
      "duration": "string",
      "description": "string (with bullet points using \n- format)",
      "order": 0
    }
  ],
  "education": [
    {
      "institution": "string",
      "degree": "string",
      "year": "string",
      "order": 0
    }
  ],
  "skills": [
    {
      "category": "string (e.g., Programming Languages, Frameworks, Tools)",
      "skills": ["string"],
      "order": 0
    }
  ],
  "projects": [
    {
      "name": "string",
      "description": "string",
      "technologies": ["string"],
      "order": 0
    }
  ],
  "certifications": [
    {
      "name": "string",
      "issuer": "string",
      "year": "string",
      "order": 0
    }
  ],
  "achievements": [
    {
      "description": "string",
      "order": 0
    }
  ]
}

Guidelines:
- Use action verbs and quantifiable achievements
- Optimize keywords for ATS systems
- Keep descriptions professional and concise
- If information is not provided, use empty strings or empty arrays
- Ensure all fields are present in the response"#;

pub const ENHANCEMENT_PROMPT_TEMPLATE: &str = r#"You are an ATS resume optimizer. Update the following resume with new information from additional speech input.

Current Resume Data:
{existing_data}

Additional Speech Input:
{additional_speech}

Return the UPDATED resume as a valid JSON object with the same structure. Merge new information intelligently:
- Add new experiences, skills, projects, etc.
- Update existing information if the new input provides more detail
- Maintain ATS optimization
- Keep all existing data unless explicitly contradicted

Return ONLY the JSON object."#;

/// Canned prompt for the provider round-trip health check.
pub const TEST_CONNECTION_PROMPT: &str =
    r#"Hello, please respond with: {"status": "connected"}"#;

pub fn build_extraction_prompt(speech_text: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{speech_text}", speech_text)
}

pub fn build_enhancement_prompt(existing_data: &str, additional_speech: &str) -> String {
    ENHANCEMENT_PROMPT_TEMPLATE
        .replace("{existing_data}", existing_data)
        .replace("{additional_speech}", additional_speech)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_embeds_transcript() {
        let prompt = build_extraction_prompt("My name is Jane Doe, a backend engineer");
        assert!(prompt.contains("My name is Jane Doe, a backend engineer"));
        assert!(prompt.contains("Return ONLY a valid JSON object"));
        assert!(prompt.contains("\"personalInfo\""));
        assert!(!prompt.contains("{speech_text}"));
    }

    #[test]
    fn test_enhancement_prompt_embeds_both_inputs() {
        let prompt = build_enhancement_prompt(
            r#"{"personalInfo":{"name":"Jane"}}"#,
            "I also earned an AWS certification",
        );
        assert!(prompt.contains(r#"{"personalInfo":{"name":"Jane"}}"#));
        assert!(prompt.contains("I also earned an AWS certification"));
        assert!(prompt.contains("Return ONLY the JSON object."));
    }
}

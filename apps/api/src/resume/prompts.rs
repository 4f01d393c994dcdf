// LLM prompts for résumé contact extraction.

pub const CONTACT_SYSTEM_ROLE: &str = "You are a precise résumé data extractor. \
    Extract only what is written in the document; never guess or invent values.";

/// Replace `{resume_text}` before sending.
pub const CONTACT_PROMPT_TEMPLATE: &str = r#"Extract the candidate's contact details from the résumé text below.

Return a JSON object with this EXACT schema:
{"name": "Full Name", "email": "name@example.com", "phone": "+1 555-123-4567"}

Use null for any field that does not appear in the text.

RÉSUMÉ TEXT:
{resume_text}"#;

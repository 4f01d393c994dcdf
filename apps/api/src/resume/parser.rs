//! Résumé contact extraction: LLM first, regex heuristics when it fails.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::json_system;
use crate::llm_client::{call_json, CompletionRequest, LlmGateway};
use crate::models::candidate::CandidateProfile;
use crate::resume::contact::extract_contact;
use crate::resume::extract::truncate_chars;
use crate::resume::prompts::{CONTACT_PROMPT_TEMPLATE, CONTACT_SYSTEM_ROLE};

const CONTACT_MAX_TOKENS: u32 = 200;
const CONTACT_TEMPERATURE: f32 = 0.0;
/// Contact details live at the top of a résumé; only this much is sent.
const CONTACT_PROMPT_CHARS: usize = 3000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParseResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
struct RawContact {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

/// Extracts contact details and returns them with the truncated text.
pub async fn parse_resume_text(
    gateway: &dyn LlmGateway,
    text: &str,
    max_text_length: usize,
) -> ResumeParseResponse {
    let profile = extract_profile(gateway, text).await;
    ResumeParseResponse {
        name: profile.name,
        email: profile.email,
        phone: profile.phone,
        raw_text: truncate_chars(text, max_text_length).to_string(),
    }
}

async fn extract_profile(gateway: &dyn LlmGateway, text: &str) -> CandidateProfile {
    let prompt = CONTACT_PROMPT_TEMPLATE
        .replace("{resume_text}", truncate_chars(text, CONTACT_PROMPT_CHARS));
    let request = CompletionRequest::new(
        gateway.model(),
        &json_system(CONTACT_SYSTEM_ROLE),
        prompt,
        CONTACT_MAX_TOKENS,
        CONTACT_TEMPERATURE,
    );

    match call_json::<RawContact>(gateway, &request).await {
        Ok(raw) => {
            info!("Extracted résumé contact details via LLM");
            CandidateProfile {
                name: clean_field(raw.name),
                email: clean_field(raw.email),
                phone: clean_field(raw.phone),
            }
        }
        Err(e) => {
            warn!("Résumé contact extraction using regex heuristics: {e}");
            extract_contact(text)
        }
    }
}

/// Models sometimes spell "missing" as a string instead of null.
fn clean_field(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "null" | "none" | "n/a" | "unknown" => None,
        _ => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGateway;

    const RESUME: &str =
        "John Smith\nSoftware Engineer\nEmail: j.smith@example.com\nPhone: 555-123-4567";

    #[tokio::test]
    async fn test_llm_contact_is_used() {
        let gateway = StubGateway::reply(
            r#"{"name": "Johnny Smith", "email": "js@corp.io", "phone": null}"#,
        );
        let result = parse_resume_text(&gateway, RESUME, 5000).await;
        assert_eq!(result.name.as_deref(), Some("Johnny Smith"));
        assert_eq!(result.email.as_deref(), Some("js@corp.io"));
        assert_eq!(result.phone, None);
        assert_eq!(result.raw_text, RESUME);
    }

    #[tokio::test]
    async fn test_placeholder_strings_become_none() {
        let gateway =
            StubGateway::reply(r#"{"name": " N/A ", "email": "unknown", "phone": ""}"#);
        let result = parse_resume_text(&gateway, RESUME, 5000).await;
        assert_eq!(result.name, None);
        assert_eq!(result.email, None);
        assert_eq!(result.phone, None);
    }

    #[tokio::test]
    async fn test_malformed_reply_uses_heuristics() {
        let gateway = StubGateway::reply("The candidate is John Smith.");
        let result = parse_resume_text(&gateway, RESUME, 5000).await;
        assert_eq!(result.name.as_deref(), Some("John Smith"));
        assert_eq!(result.email.as_deref(), Some("j.smith@example.com"));
        assert_eq!(result.phone.as_deref(), Some("555-123-4567"));
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_uses_heuristics() {
        let gateway = StubGateway::unconfigured();
        let result = parse_resume_text(&gateway, RESUME, 5000).await;
        assert_eq!(result.name.as_deref(), Some("John Smith"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_raw_text_is_truncated() {
        let gateway = StubGateway::failing();
        let result = parse_resume_text(&gateway, RESUME, 10).await;
        assert_eq!(result.raw_text, "John Smith");
    }

    #[test]
    fn test_response_serializes_raw_text_camel_case() {
        let response = ResumeParseResponse {
            name: None,
            email: None,
            phone: None,
            raw_text: "text".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["rawText"], "text");
        assert!(value["name"].is_null());
    }
}

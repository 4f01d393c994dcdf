use serde::{Deserialize, Serialize};

/// Contact details pulled from a résumé. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CandidateProfile {
    /// Name for human-facing text, "The candidate" when unknown.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("The candidate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back() {
        assert_eq!(CandidateProfile::default().display_name(), "The candidate");
        let blank = CandidateProfile {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.display_name(), "The candidate");
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"name": "Ada Lovelace", "id": "c-1"}"#).unwrap();
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert!(profile.email.is_none());
    }
}

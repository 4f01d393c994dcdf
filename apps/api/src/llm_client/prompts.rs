// Shared prompt fragments.
// Each component that calls the LLM defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Joins a role description with the JSON-only rules.
pub fn json_system(role_description: &str) -> String {
    format!("{role_description} {JSON_ONLY_SYSTEM}")
}

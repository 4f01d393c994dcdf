use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";

/// Values that ship in `.env.example` files and must never be sent upstream.
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_groq_api_key_here",
    "your-api-key",
    "your_api_key",
    "changeme",
    "placeholder",
    "xxx",
];

/// Application configuration loaded from environment variables.
/// Nothing here is required: a missing API key puts every LLM-backed
/// component on its deterministic fallback path.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
    pub max_file_size: usize,
    pub max_text_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: std::env::var("GROQ_API_KEY").ok().and_then(usable_api_key),
            llm_api_url: env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 30)?,
            port: parse_env("PORT", 8000)?,
            rust_log: env_or("RUST_LOG", "info"),
            max_file_size: parse_env("MAX_FILE_SIZE", 10 * 1024 * 1024)?,
            max_text_length: parse_env("MAX_TEXT_LENGTH", 5000)?,
        })
    }

    pub fn llm_configured(&self) -> bool {
        self.llm_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: 30,
            port: 8000,
            rust_log: "info".to_string(),
            max_file_size: 10 * 1024 * 1024,
            max_text_length: 5000,
        }
    }
}

/// Returns the key only if it looks like a real credential.
pub fn usable_api_key(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if PLACEHOLDER_KEYS.iter().any(|p| lower == *p) || lower.starts_with("your_") {
        return None;
    }
    Some(trimmed.to_string())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

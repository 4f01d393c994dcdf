//! Answer Scorer: grades a free-text answer on a 0–10 scale.
//!
//! Two independent paths:
//! - LLM: rubric prompt, JSON `{score, feedback}`, score clamped to 0..=10.
//! - Heuristic: word-count bands, capped at `HEURISTIC_MAX_SCORE`. Used when the
//!   gateway is unconfigured, fails, or replies with something unusable.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::interview::prompts::{rubric_for, SCORE_PROMPT_TEMPLATE, SCORE_SYSTEM_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::{call_json, CompletionRequest, LlmError, LlmGateway};
use crate::models::interview::{Difficulty, ScoredAnswer};

pub const NO_ANSWER_FEEDBACK: &str = "No answer provided.";
const DEFAULT_FEEDBACK: &str = "Answer evaluated.";

const SCORE_MAX_TOKENS: u32 = 400;
const SCORE_TEMPERATURE: f32 = 0.2;

/// A heuristic never claims more than half marks.
pub const HEURISTIC_MAX_SCORE: u8 = 5;
const VERY_SHORT_WORDS: usize = 10;
const SHORT_WORDS: usize = 25;
const DETAILED_WORDS: usize = 50;

const VERY_SHORT_FEEDBACK: &str = "Your answer is quite brief. Consider elaborating on the \
    technical concepts and providing specific examples to demonstrate your understanding.";
const SHORT_FEEDBACK: &str = "You provided a moderate response. The answer shows some \
    understanding, but could benefit from more technical depth and concrete examples.";
const SUBSTANTIAL_FEEDBACK: &str = "You provided a detailed response. Consider focusing on \
    the most relevant technical aspects and ensuring clarity in your explanations.";

const EASY_NOTE: &str = "For basic concepts, try to explain the \"why\" behind your answer \
    and provide simple examples.";
const MEDIUM_NOTE: &str = "For intermediate topics, consider discussing implementation \
    approaches and potential challenges.";
const HARD_NOTE: &str =
    "For advanced concepts, elaborate on system design considerations and trade-offs.";

#[derive(Debug, Deserialize)]
struct RawScore {
    #[serde(default)]
    score: Option<Value>,
    #[serde(default)]
    feedback: Option<String>,
}

/// Scores one answer. Never fails; see module docs for the two paths.
pub async fn score_answer(
    gateway: &dyn LlmGateway,
    question: &str,
    difficulty: Difficulty,
    answer: &str,
) -> ScoredAnswer {
    let scored = |score: u8, feedback: String| ScoredAnswer {
        question: question.to_string(),
        difficulty,
        answer_text: answer.to_string(),
        score,
        feedback,
    };

    if answer.trim().is_empty() {
        return scored(0, NO_ANSWER_FEEDBACK.to_string());
    }

    let request = build_score_request(gateway.model(), question, difficulty, answer);
    let graded = call_json::<RawScore>(gateway, &request)
        .await
        .and_then(validate_score);

    match graded {
        Ok((score, feedback)) => scored(score, feedback),
        Err(e) => {
            warn!("Scoring {difficulty} answer with word-count heuristic: {e}");
            let (score, feedback) = heuristic_score(answer, difficulty);
            scored(score, feedback)
        }
    }
}

fn build_score_request(
    model: &str,
    question: &str,
    difficulty: Difficulty,
    answer: &str,
) -> CompletionRequest {
    let prompt = SCORE_PROMPT_TEMPLATE
        .replace("{difficulty}", difficulty.as_str())
        .replace("{rubric}", rubric_for(difficulty))
        .replace("{question}", question)
        .replace("{answer}", answer.trim());

    CompletionRequest::new(
        model,
        &json_system(SCORE_SYSTEM_ROLE),
        prompt,
        SCORE_MAX_TOKENS,
        SCORE_TEMPERATURE,
    )
}

fn validate_score(raw: RawScore) -> Result<(u8, String), LlmError> {
    let value = raw
        .score
        .as_ref()
        .and_then(numeric)
        .ok_or_else(|| LlmError::Malformed("missing or non-numeric score".into()))?;

    let feedback = raw
        .feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string());

    Ok((clamp_score(value), feedback))
}

/// Accepts JSON numbers and numeric strings ("7", "7.5").
fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 10.0) as u8
}

fn tier_note(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => EASY_NOTE,
        Difficulty::Medium => MEDIUM_NOTE,
        Difficulty::Hard => HARD_NOTE,
    }
}

/// Deterministic fallback. The score and feedback bucket come from the word
/// count alone; the closing sentence depends on the tier.
pub fn heuristic_score(answer: &str, difficulty: Difficulty) -> (u8, String) {
    let words = answer.split_whitespace().count();
    let score = match words {
        0 => 0,
        w if w < VERY_SHORT_WORDS => 2,
        w if w < SHORT_WORDS => 3,
        w if w < DETAILED_WORDS => 4,
        _ => HEURISTIC_MAX_SCORE,
    };
    let feedback = if words < VERY_SHORT_WORDS {
        VERY_SHORT_FEEDBACK
    } else if words < SHORT_WORDS {
        SHORT_FEEDBACK
    } else {
        SUBSTANTIAL_FEEDBACK
    };
    (score, format!("{feedback} {}", tier_note(difficulty)))
}

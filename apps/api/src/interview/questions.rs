//! Question Generator: asks the LLM for a role-specific question set and
//! falls back to the static bank on any failure.

use serde::Deserialize;
use tracing::{info, warn};

use crate::interview::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM_ROLE};
use crate::interview::question_bank::fallback_questions;
use crate::llm_client::prompts::json_system;
use crate::llm_client::{call_json, CompletionRequest, LlmError, LlmGateway};
use crate::models::interview::{Difficulty, DifficultyCounts, QuestionSpec};

const QUESTION_MAX_TOKENS: u32 = 1500;
const QUESTION_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    question: Option<String>,
}

/// Models return either a bare array or an object wrapping it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBatch {
    List(Vec<RawQuestion>),
    Wrapped { questions: Vec<RawQuestion> },
}

impl RawBatch {
    fn into_items(self) -> Vec<RawQuestion> {
        match self {
            RawBatch::List(items) => items,
            RawBatch::Wrapped { questions } => questions,
        }
    }
}

/// Generates interview questions for `role`.
///
/// Always returns a result: any gateway or parse failure switches to the
/// static bank. Per-tier output never exceeds `counts`.
pub async fn generate_questions(
    gateway: &dyn LlmGateway,
    role: &str,
    counts: &DifficultyCounts,
    seed: i64,
) -> Vec<QuestionSpec> {
    if counts.total() == 0 {
        return Vec::new();
    }

    let request = build_question_request(gateway.model(), role, counts);
    let generated = call_json::<RawBatch>(gateway, &request)
        .await
        .and_then(|batch| questions_from_batch(batch, counts));

    match generated {
        Ok(questions) => {
            info!(
                "Generated {} questions for role '{}' via LLM",
                questions.len(),
                role
            );
            questions
        }
        Err(e) => {
            warn!("Question generation for role '{role}' (seed {seed}) using static bank: {e}");
            fallback_questions(counts, seed)
        }
    }
}

fn build_question_request(model: &str, role: &str, counts: &DifficultyCounts) -> CompletionRequest {
    let breakdown = Difficulty::ALL
        .iter()
        .filter(|d| counts.get(**d) > 0)
        .map(|d| {
            format!(
                "- {} {} question(s), {} seconds each",
                counts.get(*d),
                d,
                d.time_limit_secs()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = QUESTION_PROMPT_TEMPLATE
        .replace("{total}", &counts.total().to_string())
        .replace("{role}", role)
        .replace("{breakdown}", &breakdown);

    CompletionRequest::new(
        model,
        &json_system(QUESTION_SYSTEM_ROLE),
        prompt,
        QUESTION_MAX_TOKENS,
        QUESTION_TEMPERATURE,
    )
}

/// Validates model output and numbers it. Surplus questions for a tier are dropped.
fn questions_from_batch(
    batch: RawBatch,
    counts: &DifficultyCounts,
) -> Result<Vec<QuestionSpec>, LlmError> {
    let items = batch.into_items();
    if items.is_empty() {
        return Err(LlmError::Malformed("no questions returned".into()));
    }

    let mut taken = DifficultyCounts::zero();
    let mut questions = Vec::with_capacity(counts.total() as usize);

    for raw in items {
        let difficulty: Difficulty = raw
            .difficulty
            .as_deref()
            .ok_or_else(|| LlmError::Malformed("question without difficulty".into()))?
            .parse()
            .map_err(LlmError::Malformed)?;

        let text = raw
            .question
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LlmError::Malformed("question without text".into()))?;

        if taken.get(difficulty) >= counts.get(difficulty) {
            continue;
        }
        taken.set(difficulty, taken.get(difficulty) + 1);

        let id = questions.len() as u32 + 1;
        questions.push(QuestionSpec::new(id, difficulty, text.to_string()));
    }

    if questions.is_empty() {
        return Err(LlmError::Malformed(
            "no questions matched the requested difficulties".into(),
        ));
    }
    Ok(questions)
}

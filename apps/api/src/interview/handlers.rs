//! Axum route handlers for the Interview API.
//!
//! Handlers own input validation. Everything past validation is total: the
//! LLM-backed components always produce a result.

use std::collections::{HashMap, HashSet};

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::finalize::finalize_interview;
use crate::interview::questions::generate_questions;
use crate::interview::scoring::score_answer;
use crate::models::candidate::CandidateProfile;
use crate::models::interview::{
    Difficulty, DifficultyCounts, FinalResult, QaItem, QuestionSpec,
};
use crate::state::AppState;

pub const DEFAULT_ROLE: &str = "fullstack";
pub const DEFAULT_SEED: i64 = 42;
pub const MAX_QUESTIONS_PER_TIER: i64 = 20;
const MAX_ROLE_CHARS: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub counts: Option<HashMap<String, i64>>,
    #[serde(default)]
    pub seed: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreAnswerRequest {
    pub question: String,
    pub difficulty: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreAnswerResponse {
    pub score: u8,
    pub feedback: String,
}

#[derive(Debug, Deserialize)]
pub struct QaItemPayload {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    pub difficulty: String,
    #[serde(default, alias = "aiScore")]
    pub score: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FinalizeRequest {
    pub items: Vec<QaItemPayload>,
    #[serde(default)]
    pub profile: CandidateProfile,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn parse_difficulty(raw: &str) -> Result<Difficulty, AppError> {
    raw.parse().map_err(AppError::Validation)
}

fn validate_role(role: Option<String>) -> Result<String, AppError> {
    let Some(role) = role else {
        return Ok(DEFAULT_ROLE.to_string());
    };
    let role = role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    if role.chars().count() > MAX_ROLE_CHARS {
        return Err(AppError::Validation(format!(
            "role must be at most {MAX_ROLE_CHARS} characters"
        )));
    }
    Ok(role.to_string())
}

/// Missing `counts` means the default 2/2/2; tiers absent from a given map are 0.
fn validate_counts(counts: Option<HashMap<String, i64>>) -> Result<DifficultyCounts, AppError> {
    let Some(raw) = counts else {
        return Ok(DifficultyCounts::default());
    };

    let mut counts = DifficultyCounts::zero();
    let mut seen = HashSet::new();
    for (key, value) in raw {
        let difficulty = parse_difficulty(&key)?;
        if !seen.insert(difficulty) {
            return Err(AppError::Validation(format!(
                "count for '{difficulty}' is given more than once"
            )));
        }
        if !(0..=MAX_QUESTIONS_PER_TIER).contains(&value) {
            return Err(AppError::Validation(format!(
                "count for '{difficulty}' must be between 0 and {MAX_QUESTIONS_PER_TIER}, got {value}"
            )));
        }
        counts.set(difficulty, value as u32);
    }
    Ok(counts)
}

fn validate_item(index: usize, payload: QaItemPayload) -> Result<QaItem, AppError> {
    let difficulty = payload
        .difficulty
        .parse::<Difficulty>()
        .map_err(|e| AppError::Validation(format!("items[{index}]: {e}")))?;

    let score = match payload.score {
        None => None,
        Some(s) if (0..=10).contains(&s) => Some(s as u8),
        Some(s) => {
            return Err(AppError::Validation(format!(
                "items[{index}]: score must be between 0 and 10, got {s}"
            )))
        }
    };

    Ok(QaItem {
        question: payload.question,
        answer: payload.answer.unwrap_or_default(),
        difficulty,
        score,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<Vec<QuestionSpec>>, AppError> {
    let Json(request) = payload?;
    let role = validate_role(request.role)?;
    let counts = validate_counts(request.counts)?;
    let seed = request.seed.unwrap_or(DEFAULT_SEED);

    let questions = generate_questions(state.llm.as_ref(), &role, &counts, seed).await;
    Ok(Json(questions))
}

/// POST /score-answer
pub async fn handle_score_answer(
    State(state): State<AppState>,
    payload: Result<Json<ScoreAnswerRequest>, JsonRejection>,
) -> Result<Json<ScoreAnswerResponse>, AppError> {
    let Json(request) = payload?;
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    let difficulty = parse_difficulty(&request.difficulty)?;

    let scored = score_answer(
        state.llm.as_ref(),
        &request.question,
        difficulty,
        &request.answer,
    )
    .await;

    Ok(Json(ScoreAnswerResponse {
        score: scored.score,
        feedback: scored.feedback,
    }))
}

/// POST /finalize
pub async fn handle_finalize(
    State(state): State<AppState>,
    payload: Result<Json<FinalizeRequest>, JsonRejection>,
) -> Result<Json<FinalResult>, AppError> {
    let Json(request) = payload?;
    let items = request
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| validate_item(i, item))
        .collect::<Result<Vec<_>, _>>()?;

    let result = finalize_interview(state.llm.as_ref(), &items, &request.profile).await;
    Ok(Json(result))
}

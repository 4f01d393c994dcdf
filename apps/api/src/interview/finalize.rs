//! Final Aggregator: difficulty-weighted 0–100 score plus a narrative summary.
//!
//! finalScore = round(10 × Σ(score_i × weight_i) / Σ(weight_i)), clamped to 0..=100.
//! Unscored items contribute 0 to the numerator but keep their weight.

use tracing::{info, warn};

use crate::interview::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};
use crate::llm_client::{call_text, CompletionRequest, LlmError, LlmGateway};
use crate::models::candidate::CandidateProfile;
use crate::models::interview::{FinalResult, QaItem};

const SUMMARY_MAX_TOKENS: u32 = 300;
const SUMMARY_TEMPERATURE: f32 = 0.5;
/// Answers are cut to this many characters inside the summary prompt.
const SUMMARY_ANSWER_CHARS: usize = 400;

/// Score bands for the templated summary.
const STRONG_BAND: u32 = 80;
const SOLID_BAND: u32 = 60;

/// Computes the weighted score and asks the LLM for a summary, falling back
/// to a templated sentence when the gateway cannot help.
pub async fn finalize_interview(
    gateway: &dyn LlmGateway,
    items: &[QaItem],
    profile: &CandidateProfile,
) -> FinalResult {
    let final_score = weighted_final_score(items);

    let request = build_summary_request(gateway.model(), items, profile, final_score);
    let summary = call_text(gateway, &request)
        .await
        .and_then(|text| {
            let text = text.trim().to_string();
            if text.is_empty() {
                Err(LlmError::EmptyContent)
            } else {
                Ok(text)
            }
        });

    let summary = match summary {
        Ok(text) => text,
        Err(e) => {
            warn!("Summary for {} item(s) using template: {e}", items.len());
            fallback_summary(items, final_score, profile)
        }
    };

    info!(
        "Finalized interview: {} item(s), final score {final_score}/100",
        items.len()
    );

    FinalResult {
        final_score,
        summary,
    }
}

pub fn weighted_final_score(items: &[QaItem]) -> u32 {
    let (weighted_sum, total_weight) = items.iter().fold((0.0_f64, 0.0_f64), |(sum, w), item| {
        let weight = item.difficulty.weight();
        let score = f64::from(item.score.unwrap_or(0));
        (sum + score * weight, w + weight)
    });

    if total_weight <= 0.0 {
        return 0;
    }
    (10.0 * weighted_sum / total_weight).round().clamp(0.0, 100.0) as u32
}

/// Deterministic summary: item count, strengths and improvements picked by
/// score band, a note when answers are missing, and the final score.
pub fn fallback_summary(items: &[QaItem], final_score: u32, profile: &CandidateProfile) -> String {
    let (strengths, mut improvements) = match final_score {
        s if s >= STRONG_BAND => (
            vec!["strong technical knowledge", "clear communication"],
            Vec::new(),
        ),
        s if s >= SOLID_BAND => (
            vec!["good understanding of concepts"],
            vec!["more detailed explanations"],
        ),
        _ => (
            Vec::new(),
            vec!["deeper technical knowledge", "more comprehensive answers"],
        ),
    };
    if items.iter().any(|item| item.answer.trim().is_empty()) {
        improvements.push("completing all questions");
    }

    let count = items.len();
    let noun = if count == 1 { "question" } else { "questions" };
    let mut summary = format!(
        "{} completed {count} interview {noun}.",
        profile.display_name()
    );
    if !strengths.is_empty() {
        summary.push_str(&format!(" Strengths include {}.", strengths.join(" and ")));
    }
    if !improvements.is_empty() {
        summary.push_str(&format!(
            " Areas for improvement include {}.",
            improvements.join(", ")
        ));
    }
    summary.push_str(&format!(" Overall performance: {final_score}/100."));
    summary
}

fn build_summary_request(
    model: &str,
    items: &[QaItem],
    profile: &CandidateProfile,
    final_score: u32,
) -> CompletionRequest {
    let profile_text = format!(
        "Name: {}\nEmail: {}\nPhone: {}",
        profile.display_name(),
        profile.email.as_deref().unwrap_or("not provided"),
        profile.phone.as_deref().unwrap_or("not provided"),
    );

    let items_text = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let answer = item.answer.trim();
            let answer = if answer.is_empty() {
                "(no answer)".to_string()
            } else {
                answer.chars().take(SUMMARY_ANSWER_CHARS).collect()
            };
            let score = item
                .score
                .map(|s| format!("{s}/10"))
                .unwrap_or_else(|| "unscored".to_string());
            format!(
                "{}. [{}] Q: {}\n   A: {}\n   Score: {}",
                i + 1,
                item.difficulty,
                item.question.trim(),
                answer,
                score
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = SUMMARY_PROMPT_TEMPLATE
        .replace("{profile}", &profile_text)
        .replace("{final_score}", &final_score.to_string())
        .replace("{items}", &items_text);

    CompletionRequest::new(
        model,
        SUMMARY_SYSTEM,
        prompt,
        SUMMARY_MAX_TOKENS,
        SUMMARY_TEMPERATURE,
    )
}

//! Static question bank used when generation through the LLM is unavailable.

use crate::models::interview::{Difficulty, DifficultyCounts, QuestionSpec};

const EASY: &[&str] = &[
    "What is the difference between React state and props?",
    "Explain the Node.js event loop in simple terms.",
    "What is the difference between let, const and var in JavaScript?",
];

const MEDIUM: &[&str] = &[
    "How would you implement debounced search in React?",
    "Explain JWT authentication flow in Node.js/Express.",
    "How would you design pagination for a REST API that returns large result sets?",
];

const HARD: &[&str] = &[
    "Design a scalable file upload system with chunked uploads.",
    "Optimize a React app for large tables (10k+ rows).",
];

pub fn bank(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
    }
}

/// Takes up to `counts[tier]` questions per tier in bank order, easy first.
/// A tier with fewer entries than requested is under-filled. Ids restart at 1.
///
/// `_seed` is accepted so callers can pass the request seed through; the bank
/// order is fixed, so it does not change the selection.
pub fn fallback_questions(counts: &DifficultyCounts, _seed: i64) -> Vec<QuestionSpec> {
    let mut questions = Vec::with_capacity(counts.total() as usize);
    for difficulty in Difficulty::ALL {
        for text in bank(difficulty).iter().take(counts.get(difficulty) as usize) {
            let id = questions.len() as u32 + 1;
            questions.push(QuestionSpec::new(id, difficulty, (*text).to_string()));
        }
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_respects_counts_and_order() {
        let counts = DifficultyCounts {
            easy: 1,
            medium: 2,
            hard: 1,
        };
        let questions = fallback_questions(&counts, 42);
        let tiers: Vec<_> = questions.iter().map(|q| q.difficulty).collect();
        assert_eq!(
            tiers,
            vec![
                Difficulty::Easy,
                Difficulty::Medium,
                Difficulty::Medium,
                Difficulty::Hard
            ]
        );
        let ids: Vec<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(questions[0].question, EASY[0]);
    }

    #[test]
    fn test_fallback_under_fills_small_tier() {
        let counts = DifficultyCounts {
            easy: 0,
            medium: 0,
            hard: 5,
        };
        let questions = fallback_questions(&counts, 42);
        assert_eq!(questions.len(), HARD.len());
        assert!(questions.iter().all(|q| q.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_fallback_time_limits_follow_tier() {
        let questions = fallback_questions(&DifficultyCounts::default(), 42);
        for q in &questions {
            assert_eq!(q.time_limit, q.difficulty.time_limit_secs());
        }
    }

    #[test]
    fn test_seed_does_not_change_selection() {
        let counts = DifficultyCounts::default();
        assert_eq!(fallback_questions(&counts, 1), fallback_questions(&counts, 9999));
    }

    #[test]
    fn test_zero_counts_yield_nothing() {
        assert!(fallback_questions(&DifficultyCounts::zero(), 42).is_empty());
    }
}

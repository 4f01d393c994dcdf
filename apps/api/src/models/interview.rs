use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Question difficulty. Governs the answer time limit and the aggregation weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Canonical tier order, used for prompts and the fallback bank.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 60,
            Difficulty::Hard => 120,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.75,
            Difficulty::Hard => 2.25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}

/// How many questions to produce per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn set(&mut self, difficulty: Difficulty, count: u32) {
        match difficulty {
            Difficulty::Easy => self.easy = count,
            Difficulty::Medium => self.medium = count,
            Difficulty::Hard => self.hard = count,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }

    pub fn zero() -> Self {
        Self {
            easy: 0,
            medium: 0,
            hard: 0,
        }
    }
}

impl Default for DifficultyCounts {
    fn default() -> Self {
        Self {
            easy: 2,
            medium: 2,
            hard: 2,
        }
    }
}

/// A generated interview question. `time_limit` always comes from the tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSpec {
    pub id: u32,
    pub difficulty: Difficulty,
    pub question: String,
    pub time_limit: u32,
}

impl QuestionSpec {
    pub fn new(id: u32, difficulty: Difficulty, question: String) -> Self {
        Self {
            id,
            difficulty,
            question,
            time_limit: difficulty.time_limit_secs(),
        }
    }
}

/// Outcome of scoring one answer. `score` is always within 0..=10.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAnswer {
    pub question: String,
    pub difficulty: Difficulty,
    pub answer_text: String,
    pub score: u8,
    pub feedback: String,
}

/// One question/answer pair accumulated by the client over a session.
#[derive(Debug, Clone, PartialEq)]
pub struct QaItem {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub final_score: u32,
    pub summary: String,
}

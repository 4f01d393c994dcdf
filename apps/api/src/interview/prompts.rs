// All LLM prompt constants for the Interview module.
// Reuses the JSON-only rules from llm_client::prompts.

use crate::models::interview::Difficulty;

pub const QUESTION_SYSTEM_ROLE: &str = "You are a senior technical interviewer. \
    You write concise, unambiguous interview questions that can be answered verbally \
    within the stated time limit.";

/// Question generation prompt. Replace `{role}`, `{total}`, `{breakdown}`.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate exactly {total} technical interview questions for a {role} developer role.

Difficulty breakdown:
{breakdown}

Return a JSON ARRAY with one object per question, in the order easy, medium, hard:
[
  {"difficulty": "easy", "question": "What is the difference between state and props in React?"}
]

RULES:
1. `difficulty` must be exactly one of "easy", "medium", "hard"
2. Produce exactly the number of questions requested for each difficulty
3. Each question must be answerable within its time limit
4. No numbering, no commentary, no fields other than `difficulty` and `question`"#;

pub const SCORE_SYSTEM_ROLE: &str = "You are a fair but strict technical interviewer \
    grading a candidate's spoken or typed answer.";

/// Answer scoring prompt. Replace `{question}`, `{difficulty}`, `{rubric}`, `{answer}`.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"Grade the candidate's answer to an interview question.

QUESTION ({difficulty}):
{question}

RUBRIC:
{rubric}

CANDIDATE ANSWER:
{answer}

Return a JSON object with this EXACT schema:
{"score": 7, "feedback": "Two or three sentences of specific, constructive feedback."}

`score` is an integer from 0 (no understanding) to 10 (complete, precise answer)."#;

pub const SUMMARY_SYSTEM: &str = "You are a hiring panel member writing a short \
    assessment of a candidate after a technical interview. \
    Respond with plain prose only: no headings, no bullet points, no JSON.";

/// Final summary prompt. Replace `{profile}`, `{final_score}`, `{items}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a 2 to 5 sentence summary of this candidate's interview performance.
Mention concrete strengths and weaknesses based on the answers. Do not repeat the questions verbatim.

CANDIDATE:
{profile}

FINAL SCORE: {final_score}/100

QUESTIONS AND ANSWERS:
{items}"#;

/// Tier-specific grading guidance embedded in the scoring prompt.
pub fn rubric_for(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => {
            "Basic concept check. Reward a correct, clear definition and a simple example. \
             Do not expect depth; penalize factual errors."
        }
        Difficulty::Medium => {
            "Applied knowledge. Reward a workable implementation approach, awareness of \
             common pitfalls, and correct use of terminology. A definition alone is worth at most 5."
        }
        Difficulty::Hard => {
            "System design and trade-offs. Reward structure, scalability and failure-mode \
             reasoning, and explicit trade-offs. Vague or buzzword-only answers score 3 or below."
        }
    }
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_file_size + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/parse-resume", post(resume::handle_parse_resume))
        .route(
            "/generate-questions",
            post(interview::handle_generate_questions),
        )
        .route("/score-answer", post(interview::handle_score_answer))
        .route("/finalize", post(interview::handle_finalize))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

//! Axum route handlers for the Interview API. All routes require a bearer token.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::interview::flow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct StartResponse {
    pub interview_id: i64,
    pub generated_question: String,
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct QaRequest {
    pub interview_id: i64,
    pub question: String,
    pub user_answer: String,
}

#[derive(Debug, Serialize)]
pub struct QaResponse {
    pub feedback: String,
    pub generated_question: String,
}

#[derive(Debug, Deserialize)]
pub struct FinishRequest {
    pub interview_id: i64,
}

#[derive(Debug, Serialize)]
pub struct QaFeedback {
    pub question: String,
    pub user_answer: String,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct FinishResponse {
    pub interview_summary: String,
    pub qa_feedback: Vec<QaFeedback>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interviews/start
pub async fn handle_start(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, AppError> {
    let started = flow::start(
        state.interviews.as_ref(),
        &state.generator,
        &user,
        &req.job_title,
    )
    .await?;

    Ok(Json(StartResponse {
        interview_id: started.interview.id,
        generated_question: started.first_question.into_text(),
        job_title: started.interview.job_title,
    }))
}

/// POST /api/interviews/qa
pub async fn handle_qa(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<QaRequest>,
) -> Result<Json<QaResponse>, AppError> {
    let outcome = flow::submit_turn(
        state.interviews.as_ref(),
        &state.generator,
        &user,
        req.interview_id,
        &req.question,
        &req.user_answer,
    )
    .await?;

    Ok(Json(QaResponse {
        feedback: outcome.feedback.into_text(),
        generated_question: outcome.next_question.into_text(),
    }))
}

/// POST /api/interviews/finish
pub async fn handle_finish(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<FinishRequest>,
) -> Result<Json<FinishResponse>, AppError> {
    let finished = flow::finish(
        state.interviews.as_ref(),
        &state.generator,
        &user,
        req.interview_id,
    )
    .await?;

    let qa_feedback = finished
        .turns
        .into_iter()
        .map(|turn| QaFeedback {
            question: turn.question,
            user_answer: turn.user_answer,
            feedback: turn.feedback,
        })
        .collect();

    Ok(Json(FinishResponse {
        interview_summary: finished.summary.into_text(),
        qa_feedback,
    }))
}

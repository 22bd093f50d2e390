use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InterviewRow {
    pub id: i64,
    pub job_title: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// One question/answer/feedback turn. Append-only; `id` order is turn order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QnaRow {
    pub id: i64,
    pub interview_id: i64,
    pub question: String,
    pub user_answer: String,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

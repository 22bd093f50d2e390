//! Persistence traits for users, interviews and turns.
//!
//! Handlers and the interview flow only see these traits; `PgStore` is the
//! production backend. `AppState` carries them as `Arc<dyn ...>`.

use async_trait::async_trait;

use crate::models::interview::{InterviewRow, QnaRow};
use crate::models::user::UserRow;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user. Returns `None` when the email is already taken.
    async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRow>, sqlx::Error>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, sqlx::Error>;
}

#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn create_interview(
        &self,
        owner_id: i64,
        job_title: &str,
    ) -> Result<InterviewRow, sqlx::Error>;

    /// Looks up an interview by id, scoped to its owner. A missing interview and
    /// one owned by somebody else both return `None`.
    async fn find_owned_interview(
        &self,
        interview_id: i64,
        owner_id: i64,
    ) -> Result<Option<InterviewRow>, sqlx::Error>;

    async fn insert_qna(
        &self,
        interview_id: i64,
        question: &str,
        user_answer: &str,
        feedback: &str,
    ) -> Result<QnaRow, sqlx::Error>;

    /// All turns of an interview in insertion order.
    async fn list_qnas(&self, interview_id: i64) -> Result<Vec<QnaRow>, sqlx::Error>;
}

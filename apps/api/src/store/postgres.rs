use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::interview::{InterviewRow, QnaRow};
use crate::models::user::UserRow;
use crate::store::{InterviewStore, UserStore};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        // ON CONFLICT keeps concurrent duplicate registrations from surfacing as 500s.
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl InterviewStore for PgStore {
    async fn create_interview(
        &self,
        owner_id: i64,
        job_title: &str,
    ) -> Result<InterviewRow, sqlx::Error> {
        sqlx::query_as::<_, InterviewRow>(
            "INSERT INTO interviews (job_title, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(job_title)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_owned_interview(
        &self,
        interview_id: i64,
        owner_id: i64,
    ) -> Result<Option<InterviewRow>, sqlx::Error> {
        sqlx::query_as::<_, InterviewRow>(
            "SELECT * FROM interviews WHERE id = $1 AND owner_id = $2",
        )
        .bind(interview_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert_qna(
        &self,
        interview_id: i64,
        question: &str,
        user_answer: &str,
        feedback: &str,
    ) -> Result<QnaRow, sqlx::Error> {
        sqlx::query_as::<_, QnaRow>(
            r#"
            INSERT INTO qnas (interview_id, question, user_answer, feedback)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(interview_id)
        .bind(question)
        .bind(user_answer)
        .bind(feedback)
        .fetch_one(&self.pool)
        .await
    }

    async fn list_qnas(&self, interview_id: i64) -> Result<Vec<QnaRow>, sqlx::Error> {
        sqlx::query_as::<_, QnaRow>(
            "SELECT * FROM qnas WHERE interview_id = $1 ORDER BY id ASC",
        )
        .bind(interview_id)
        .fetch_all(&self.pool)
        .await
    }
}

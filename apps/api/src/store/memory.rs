//! In-memory store used by unit and router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::interview::{InterviewRow, QnaRow};
use crate::models::user::UserRow;
use crate::store::{InterviewStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<UserRow>>,
    interviews: Mutex<Vec<InterviewRow>>,
    qnas: Mutex<Vec<QnaRow>>,
}

impl MemoryStore {
    pub fn interview_count(&self) -> usize {
        self.interviews.lock().unwrap().len()
    }

    pub fn qna_count(&self) -> usize {
        self.qnas.lock().unwrap().len()
    }

    pub fn user(&self, email: &str) -> Option<UserRow> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Ok(None);
        }
        let row = UserRow {
            id: users.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.push(row.clone());
        Ok(Some(row))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
        Ok(self.user(email))
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn create_interview(
        &self,
        owner_id: i64,
        job_title: &str,
    ) -> Result<InterviewRow, sqlx::Error> {
        let mut interviews = self.interviews.lock().unwrap();
        let row = InterviewRow {
            id: interviews.len() as i64 + 1,
            job_title: job_title.to_string(),
            owner_id,
            created_at: Utc::now(),
        };
        interviews.push(row.clone());
        Ok(row)
    }

    async fn find_owned_interview(
        &self,
        interview_id: i64,
        owner_id: i64,
    ) -> Result<Option<InterviewRow>, sqlx::Error> {
        Ok(self
            .interviews
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == interview_id && i.owner_id == owner_id)
            .cloned())
    }

    async fn insert_qna(
        &self,
        interview_id: i64,
        question: &str,
        user_answer: &str,
        feedback: &str,
    ) -> Result<QnaRow, sqlx::Error> {
        let mut qnas = self.qnas.lock().unwrap();
        let row = QnaRow {
            id: qnas.len() as i64 + 1,
            interview_id,
            question: question.to_string(),
            user_answer: user_answer.to_string(),
            feedback: feedback.to_string(),
            created_at: Utc::now(),
        };
        qnas.push(row.clone());
        Ok(row)
    }

    async fn list_qnas(&self, interview_id: i64) -> Result<Vec<QnaRow>, sqlx::Error> {
        Ok(self
            .qnas
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.interview_id == interview_id)
            .cloned()
            .collect())
    }
}

//! Shared fixtures for unit and router tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::token::TokenKeys;
use crate::interview::generator::InterviewGenerator;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::interview::QnaRow;
use crate::state::AppState;
use crate::store::memory::MemoryStore;

pub enum Step {
    Text(String),
    Fail,
}

/// Replays scripted responses in order, then answers every further prompt
/// with a numbered placeholder. Records every prompt it sees.
pub struct ScriptedGenerator {
    steps: Mutex<VecDeque<Step>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };
        match self.steps.lock().unwrap().pop_front() {
            Some(Step::Text(text)) => Ok(text),
            Some(Step::Fail) => Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
            None => Ok(format!("generated text #{call}")),
        }
    }
}

pub fn qna(id: i64, question: &str, user_answer: &str, feedback: &str) -> QnaRow {
    QnaRow {
        id,
        interview_id: 1,
        question: question.to_string(),
        user_answer: user_answer.to_string(),
        feedback: feedback.to_string(),
        created_at: Utc::now(),
    }
}

/// App state over a fresh in-memory store and the given scripted generator.
pub fn test_state(steps: Vec<Step>) -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        users: store.clone(),
        interviews: store.clone(),
        generator: InterviewGenerator::new(Arc::new(ScriptedGenerator::new(steps))),
        tokens: TokenKeys::new(b"router-test-secret", Duration::minutes(30)),
    };
    (state, store)
}

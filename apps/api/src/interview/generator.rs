//! Question / feedback / summary generation.
//!
//! Each operation builds one prompt, makes one call through `TextGenerator`
//! and trims the result. Failures never propagate: the caller gets
//! `Generated::Degraded` carrying the fixed fallback text and the cause.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::warn;

use crate::interview::prompts::{
    fill, FEEDBACK_FALLBACK, FEEDBACK_PROMPT, QUESTION_FALLBACK, QUESTION_PROMPT,
    SUMMARY_FALLBACK, SUMMARY_PROMPT,
};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::interview::QnaRow;

/// Outcome of a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Ok(String),
    Degraded {
        fallback: &'static str,
        cause: String,
    },
}

impl Generated {
    /// The text to hand to the user: generated text or the fallback string.
    pub fn text(&self) -> &str {
        match self {
            Generated::Ok(text) => text,
            Generated::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Generated::Ok(text) => text,
            Generated::Degraded { fallback, .. } => fallback.to_string(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Generated::Degraded { .. })
    }
}

#[derive(Clone)]
pub struct InterviewGenerator {
    backend: Arc<dyn TextGenerator>,
}

impl InterviewGenerator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    /// Asks for one interview question, seeded only by the job title.
    pub async fn question(&self, job_title: &str) -> Generated {
        let prompt = fill(QUESTION_PROMPT, &[("job_title", job_title)]);
        self.run("question", &prompt, QUESTION_FALLBACK).await
    }

    pub async fn feedback(&self, question: &str, user_answer: &str) -> Generated {
        let prompt = fill(
            FEEDBACK_PROMPT,
            &[("question", question), ("user_answer", user_answer)],
        );
        self.run("feedback", &prompt, FEEDBACK_FALLBACK).await
    }

    pub async fn summary(&self, job_title: &str, turns: &[QnaRow]) -> Generated {
        let transcript = render_transcript(turns);
        let prompt = fill(
            SUMMARY_PROMPT,
            &[("job_title", job_title), ("transcript", transcript.as_str())],
        );
        self.run("summary", &prompt, SUMMARY_FALLBACK).await
    }

    async fn run(&self, kind: &'static str, prompt: &str, fallback: &'static str) -> Generated {
        let result = self.backend.generate(prompt).await.and_then(|text| {
            let text = text.trim();
            if text.is_empty() {
                Err(LlmError::EmptyContent)
            } else {
                Ok(text.to_string())
            }
        });

        match result {
            Ok(text) => Generated::Ok(text),
            Err(e) => {
                warn!(kind, error = %e, "Generation failed, using fallback text");
                Generated::Degraded {
                    fallback,
                    cause: e.to_string(),
                }
            }
        }
    }
}

/// Numbered Question / Answer / Feedback blocks in turn order.
fn render_transcript(turns: &[QnaRow]) -> String {
    if turns.is_empty() {
        return "(no questions were answered)".to_string();
    }
    let mut out = String::new();
    for (i, turn) in turns.iter().enumerate() {
        let n = i + 1;
        let _ = writeln!(out, "Question {n}: {}", turn.question);
        let _ = writeln!(out, "Answer {n}: {}", turn.user_answer);
        let _ = writeln!(out, "Feedback {n}: {}", turn.feedback);
        out.push('\n');
    }
    out
}

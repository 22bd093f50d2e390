//! Interview flow: start → repeated question/answer turns → finish.
//!
//! Progress is not tracked server-side. `submit_turn` and `finish` only check
//! that the interview exists and belongs to the caller, so a finished
//! interview still accepts turns and `finish` works with zero turns.

use tracing::info;

use crate::errors::AppError;
use crate::interview::generator::{Generated, InterviewGenerator};
use crate::models::interview::{InterviewRow, QnaRow};
use crate::models::user::UserRow;
use crate::store::InterviewStore;

#[derive(Debug)]
pub struct StartedInterview {
    pub interview: InterviewRow,
    /// Not persisted; stored only once it comes back inside a turn.
    pub first_question: Generated,
}

#[derive(Debug)]
pub struct TurnOutcome {
    pub feedback: Generated,
    pub next_question: Generated,
}

#[derive(Debug)]
pub struct FinishedInterview {
    pub summary: Generated,
    pub turns: Vec<QnaRow>,
}

/// Creates the interview row, then asks for the opening question.
/// The row exists even when generation degrades.
pub async fn start(
    store: &dyn InterviewStore,
    generator: &InterviewGenerator,
    user: &UserRow,
    job_title: &str,
) -> Result<StartedInterview, AppError> {
    let job_title = job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let interview = store.create_interview(user.id, job_title).await?;
    info!(
        interview_id = interview.id,
        user_id = user.id,
        job_title,
        "Started interview"
    );

    let first_question = generator.question(job_title).await;

    Ok(StartedInterview {
        interview,
        first_question,
    })
}

/// Records one answered question. The question text is taken from the caller
/// as-is; it is not checked against the last question issued.
pub async fn submit_turn(
    store: &dyn InterviewStore,
    generator: &InterviewGenerator,
    user: &UserRow,
    interview_id: i64,
    question: &str,
    user_answer: &str,
) -> Result<TurnOutcome, AppError> {
    let interview = owned_interview(store, user, interview_id).await?;

    let feedback = generator.feedback(question, user_answer).await;
    let next_question = generator.question(&interview.job_title).await;

    let turn = store
        .insert_qna(interview.id, question, user_answer, feedback.text())
        .await?;
    info!(
        interview_id = interview.id,
        qna_id = turn.id,
        degraded = feedback.is_degraded(),
        "Recorded interview turn"
    );

    Ok(TurnOutcome {
        feedback,
        next_question,
    })
}

/// Summarizes all stored turns. Stored feedback is echoed, never regenerated.
pub async fn finish(
    store: &dyn InterviewStore,
    generator: &InterviewGenerator,
    user: &UserRow,
    interview_id: i64,
) -> Result<FinishedInterview, AppError> {
    let interview = owned_interview(store, user, interview_id).await?;
    let turns = store.list_qnas(interview.id).await?;

    let summary = generator.summary(&interview.job_title, &turns).await;
    info!(
        interview_id = interview.id,
        turns = turns.len(),
        "Finished interview"
    );

    Ok(FinishedInterview {
        summary,
        turns,
    })
}

async fn owned_interview(
    store: &dyn InterviewStore,
    user: &UserRow,
    interview_id: i64,
) -> Result<InterviewRow, AppError> {
    store
        .find_owned_interview(interview_id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))
}

use std::sync::Arc;

use crate::auth::token::TokenKeys;
use crate::interview::generator::InterviewGenerator;
use crate::store::{InterviewStore, UserStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub interviews: Arc<dyn InterviewStore>,
    pub generator: InterviewGenerator,
    /// Signing keys for bearer tokens; the secret never leaves this value.
    pub tokens: TokenKeys,
}

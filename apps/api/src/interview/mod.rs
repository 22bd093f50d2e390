// Mock interview engine: session flow, prompt construction, and the
// fallback-on-failure wrapper around the generative-text client.

pub mod flow;
pub mod generator;
pub mod handlers;
pub mod prompts;

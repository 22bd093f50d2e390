// Authentication: Argon2id password hashes, HS256 bearer tokens, and the
// `AuthUser` extractor guarding the interview routes.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod service;
pub mod token;

//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (algorithm, params, salt and digest in one
//! value), so verification needs nothing but the stored string.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Well-formed hash with the default Argon2id parameters that matches no
/// password. Verifying against it costs the same as verifying a real user.
pub const ABSENT_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$uNYgCyEGqUkUZKDpVXQy5Q$nK6/DFfwapzB1OdvQrOMyMIxG3sSqSjsDuD4olthaDQ";

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string in constant time.
/// An unparsable hash never verifies.
pub fn verify_password(password: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

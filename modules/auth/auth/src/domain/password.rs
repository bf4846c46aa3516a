//! Salted one-way hashing of principal secrets (Argon2id, PHC strings).

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use super::error::DomainError;

/// Well-formed Argon2id hash at the default cost whose digest no secret produces.
///
/// Verifying against it costs as much as checking a real principal's secret.
pub const UNMATCHABLE_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Hash `plain` with a fresh random salt.
///
/// CPU bound; async callers run it on the blocking pool.
pub fn hash_secret(plain: &str) -> Result<String, DomainError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| DomainError::internal(format!("salt generation failed: {e}")))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| DomainError::internal(format!("salt encoding failed: {e}")))?;
    let phc = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| DomainError::internal(format!("hashing failed: {e}")))?;
    Ok(phc.to_string())
}

/// Compare `plain` against a stored PHC hash. An unparseable hash never matches.
#[must_use]
pub fn verify_secret(hash: &str, plain: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    })
}

//! Argon2 password hashing for registered users.
//!
//! Argon2 is CPU-bound, so the async entry points run it on tokio's
//! blocking pool and keep the executor free.

use crate::{StoreError, StoreResult};

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

/// Hash a password on the blocking pool.
pub async fn hash_password(password: &str) -> StoreResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(StoreError::blocking_task)?
}

/// Verify a password against a stored hash on the blocking pool.
pub async fn verify_password(password: &str, stored: &str) -> StoreResult<bool> {
    let password = password.to_owned();
    let stored = stored.to_owned();
    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &stored))
        .await
        .map_err(StoreError::blocking_task)?
}

/// Hash a password using default Argon2 settings.
fn hash_password_blocking(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(StoreError::password_hash)
}

/// Verify a password against a stored PHC hash string.
fn verify_password_blocking(password: &str, stored: &str) -> StoreResult<bool> {
    let hash = PasswordHash::new(stored).map_err(StoreError::password_hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok())
}

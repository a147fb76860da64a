use bcrypt::{hash, verify};

use super::error::AppError;

/// Work factor used for every stored password hash
pub const HASH_COST: u32 = 10;

/// Gera hash bcrypt (salt aleatório embutido no resultado)
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    hash(plaintext, HASH_COST).map_err(|e| AppError::HashingError(e.to_string()))
}

/// Compara a senha com o hash armazenado.
///
/// Returns `Ok(false)` on mismatch; an `Err` only when the stored value is
/// not a valid bcrypt hash.
pub fn verify_password(plaintext: &str, hashed: &str) -> Result<bool, AppError> {
    verify(plaintext, hashed).map_err(|e| AppError::HashingError(e.to_string()))
}

/// Runs the hash on the blocking pool so request dispatch is not stalled.
pub async fn hash_password_blocking(plaintext: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&plaintext))
        .await
        .map_err(|e| AppError::HashingError(format!("Hash task failed: {}", e)))?
}

pub async fn verify_password_blocking(plaintext: String, hashed: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&plaintext, &hashed))
        .await
        .map_err(|e| AppError::HashingError(format!("Verify task failed: {}", e)))?
}

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hash a plaintext password with a fresh random salt.
///
/// The returned PHC string carries the algorithm, cost parameters, salt and
/// digest, so verification needs nothing beyond the stored value itself.
/// Cost is fixed at the crate defaults.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Check a plaintext password against a stored PHC string.
///
/// Recomputes the digest with the embedded salt and parameters; the final
/// comparison inside the argon2 crate is constant-time. A stored hash that
/// fails to parse is an error, not a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "stored password hash is malformed");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_the_original_password() {
        let hash = hash_password("secret123").expect("hash");
        assert!(verify_password("secret123", &hash).expect("verify"));
    }

    #[test]
    fn verify_rejects_any_other_password() {
        let hash = hash_password("secret123").expect("hash");
        assert!(!verify_password("secret124", &hash).expect("verify"));
        assert!(!verify_password("", &hash).expect("verify"));
    }

    #[test]
    fn two_hashes_of_one_password_differ() {
        // Fresh salt per call, so equal inputs must not collide on output.
        let a = hash_password("secret123").expect("hash");
        let b = hash_password("secret123").expect("hash");
        assert_ne!(a, b);
        assert!(verify_password("secret123", &a).unwrap());
        assert!(verify_password("secret123", &b).unwrap());
    }

    #[test]
    fn hash_is_self_describing() {
        let hash = hash_password("secret123").expect("hash");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify_password("secret123", "plainly-not-a-hash").is_err());
    }
}

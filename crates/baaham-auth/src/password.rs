//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC-format strings (`$argon2id$v=19$m=...`) carrying their
//! own salt and cost parameters, so verification does not depend on the
//! hasher's current configuration. A per-call random salt means hashing
//! the same password twice yields different strings.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use tracing::warn;

use crate::error::AuthError;

/// One-way credential hashing.
///
/// Both operations are CPU-bound by design; async callers should run
/// them on a blocking thread.
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way hash of `password`.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check `password` against a stored hash.
    ///
    /// A malformed hash reads as a mismatch. The cause is only logged.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2id hasher with an optional server-side pepper.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
    pepper: Option<String>,
}

impl Argon2Hasher {
    pub fn new(params: Params, pepper: Option<String>) -> Self {
        Self { params, pepper }
    }

    /// Build from raw cost parameters (memory in KiB).
    pub fn with_costs(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
        pepper: Option<String>,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::Crypto(format!("argon2 params error: {e}")))?;
        Ok(Self::new(params, pepper))
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn peppered(&self, password: &str) -> Vec<u8> {
        match &self.pepper {
            Some(p) => format!("{p}{password}").into_bytes(),
            None => password.as_bytes().to_vec(),
        }
    }
}

impl Default for Argon2Hasher {
    /// OWASP-recommended parameters: m=19456 (19 MiB), t=2, p=1.
    fn default() -> Self {
        Self::new(Params::default(), None)
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        use argon2::PasswordHasher as _;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(&self.peppered(password), &salt)
            .map_err(|e| AuthError::Crypto(format!("password hash error: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match argon2::PasswordHash::new(hash) {
            Ok(h) => h,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        match self
            .argon2()
            .verify_password(&self.peppered(password), &parsed_hash)
        {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap parameters so the suite stays fast.
    fn test_hasher(pepper: Option<&str>) -> Argon2Hasher {
        Argon2Hasher::with_costs(1024, 1, 1, pepper.map(String::from)).unwrap()
    }

    #[test]
    fn correct_password_matches() {
        let hasher = test_hasher(None);
        let hash = hasher.hash("hunter2").unwrap();
        assert!(hasher.verify("hunter2", &hash));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let hasher = test_hasher(None);
        let hash = hasher.hash("hunter2").unwrap();
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = test_hasher(None);
        let h1 = hasher.hash("hunter2").unwrap();
        let h2 = hasher.hash("hunter2").unwrap();

        assert_ne!(h1, h2);
        assert!(hasher.verify("hunter2", &h1));
        assert!(hasher.verify("hunter2", &h2));
    }

    #[test]
    fn hash_is_argon2id_phc() {
        let hash = test_hasher(None).hash("hunter2").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2"));
    }

    #[test]
    fn pepper_is_applied() {
        let peppered = test_hasher(Some("pepper!"));
        let hash = peppered.hash("hunter2").unwrap();
        assert!(peppered.verify("hunter2", &hash));
        // Without pepper should fail.
        assert!(!test_hasher(None).verify("hunter2", &hash));
    }

    #[test]
    fn verifies_hashes_made_with_other_costs() {
        let hash = test_hasher(None).hash("hunter2").unwrap();
        let stronger = Argon2Hasher::with_costs(2048, 2, 1, None).unwrap();
        assert!(stronger.verify("hunter2", &hash));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        let hasher = test_hasher(None);
        assert!(!hasher.verify("pw", "not-a-hash"));
        assert!(!hasher.verify("pw", ""));
    }

    #[test]
    fn invalid_costs_are_rejected() {
        let result = Argon2Hasher::with_costs(1, 0, 0, None);
        assert!(matches!(result, Err(AuthError::Crypto(_))));
    }
}

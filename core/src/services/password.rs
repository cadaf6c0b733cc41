//! Password hashing and verification built on bcrypt.

use bcrypt::DEFAULT_COST;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// One-way password digest service.
///
/// Hashing uses an adaptive cost factor so each digest is expensive to
/// brute-force offline. Verification is total: malformed digests and empty
/// inputs degrade to `false` rather than an error, so attacker-supplied
/// digest strings can never surface an exception path.
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Creates a service with the default bcrypt cost.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Creates a service with an explicit cost. Lower costs are only
    /// appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password into a salted digest.
    ///
    /// # Returns
    /// * `Ok(digest)` - bcrypt digest safe to persist
    /// * `Err(DomainError)` - empty plaintext, or an internal bcrypt failure
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        if plaintext.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {e}"),
        })
    }

    /// Returns `true` iff `plaintext` rehashes to `digest` using the salt
    /// embedded in the digest. Never fails: any mismatch, malformed digest
    /// or empty input is an ordinary `false`.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        if plaintext.is_empty() || digest.is_empty() {
            return false;
        }
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast
    fn service() -> PasswordService {
        PasswordService::with_cost(4)
    }

    #[test]
    fn test_hash_verify_round_trip() {
        let service = service();
        let digest = service.hash("Secr3t!pass").unwrap();

        assert!(service.verify("Secr3t!pass", &digest));
        assert!(!service.verify("wrong-password", &digest));
    }

    #[test]
    fn test_digest_is_salted_and_never_plaintext() {
        let service = service();
        let first = service.hash("Secr3t!pass").unwrap();
        let second = service.hash("Secr3t!pass").unwrap();

        assert_ne!(first, "Secr3t!pass");
        assert_ne!(first, second);
        assert!(service.verify("Secr3t!pass", &first));
        assert!(service.verify("Secr3t!pass", &second));
    }

    #[test]
    fn test_hash_rejects_empty_plaintext() {
        let err = service().hash("").unwrap_err();
        assert!(matches!(
            err,
            DomainError::ValidationErr(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_verify_is_total_on_malformed_digests() {
        let service = service();

        assert!(!service.verify("anything", "not-a-bcrypt-digest"));
        assert!(!service.verify("anything", "$2b$totally$bogus"));
        assert!(!service.verify("anything", ""));
        assert!(!service.verify("", "$2b$12$abcdefghijklmnopqrstuv"));
    }
}

//! One-way, salted password hashing.

use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHasher as _,
    password_hash::{SaltString, rand_core::OsRng},
};

/// One-way transform from a plaintext password to a storage-safe digest.
///
/// Each call draws a fresh random salt, so hashing the same plaintext twice
/// yields different digests. The only failure is an unrecoverable error of the
/// hashing primitive itself, surfaced unchanged.
pub trait CredentialHasher: Send + Sync {
    /// # Errors
    /// Returns an error if the hashing primitive fails.
    fn hash(&self, plaintext: &str) -> Result<String>;
}

/// Argon2id with the crate defaults, producing a PHC-format digest string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|err| anyhow!("failed to hash password: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordHash;

    #[test]
    fn same_password_hashes_to_different_digests() {
        let hasher = Argon2Hasher;
        let first = hasher.hash("secret").expect("hash");
        let second = hasher.hash("secret").expect("hash");

        assert_ne!(first, second);
        assert_ne!(first, "secret");
        assert_ne!(second, "secret");
    }

    #[test]
    fn digest_is_a_parseable_argon2id_phc_string() {
        let digest = Argon2Hasher.hash("secret").expect("hash");
        let parsed = PasswordHash::new(&digest).expect("PHC format");
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
    }

    #[test]
    fn empty_password_still_hashes() {
        let digest = Argon2Hasher.hash("").expect("hash");
        assert!(digest.starts_with("$argon2"));
    }
}

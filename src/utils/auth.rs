//! Credential hashing utilities

use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_LENGTH: usize = 16;

/// Generate a random 16-byte salt from the OS CSPRNG, base64-encoded for storage
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_LENGTH];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    general_purpose::STANDARD.encode(bytes)
}

/// Hash a password with a stored salt
///
/// The stored value is `base64(SHA-256(salt_bytes ++ utf8(password)))` with the
/// salt bytes fed to the digest before the password bytes. This exact byte
/// order must be kept for interop with previously stored credentials.
pub fn hash_password(salt: &str, password: &str) -> Result<String> {
    let salt_bytes = general_purpose::STANDARD.decode(salt)?;

    let mut hasher = Sha256::new();
    hasher.update(&salt_bytes);
    hasher.update(password.as_bytes());

    Ok(general_purpose::STANDARD.encode(hasher.finalize()))
}

/// Verify a password against a stored salt/hash pair using constant-time comparison
pub fn verify_password(salt: &str, password: &str, stored_hash: &str) -> Result<bool> {
    let computed = hash_password(salt, password)?;

    Ok(computed.as_bytes().ct_eq(stored_hash.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_generation() {
        let s1 = generate_salt();
        let s2 = generate_salt();

        // 16 bytes base64-encode to 24 chars
        assert_eq!(s1.len(), 24);
        assert_ne!(s1, s2); // Should be different (with very high probability)
    }

    #[test]
    fn test_hash_determinism() {
        let salt = generate_salt();

        let h1 = hash_password(&salt, "hunter2").unwrap();
        let h2 = hash_password(&salt, "hunter2").unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_different_salts_differ() {
        let h1 = hash_password(&generate_salt(), "hunter2").unwrap();
        let h2 = hash_password(&generate_salt(), "hunter2").unwrap();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_verify() {
        let salt = generate_salt();
        let hash = hash_password(&salt, "hunter2").unwrap();

        assert!(verify_password(&salt, "hunter2", &hash).unwrap());
        assert!(!verify_password(&salt, "hunter3", &hash).unwrap());
    }

    #[test]
    fn test_known_vector() {
        // empty salt: hash is just sha256 of the password bytes
        let salt = general_purpose::STANDARD.encode([]);
        let hash = hash_password(&salt, "abc").unwrap();

        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        assert_eq!(hash, "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }
}

use sha2::{Digest, Sha256};

/// Length of a password digest in hex characters
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a password with SHA-256 and render it as lowercase hex
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check that a stored value has the shape of a digest produced by `hash_password`
pub fn is_valid_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_known_vector() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_password_deterministic() {
        assert_eq!(hash_password("secret123"), hash_password("secret123"));
    }

    #[test]
    fn test_hash_password_distinct_inputs() {
        assert_ne!(hash_password("secret123"), hash_password("secret124"));
        assert_ne!(hash_password("Secret123"), hash_password("secret123"));
    }

    #[test]
    fn test_hash_password_shape() {
        let digest = hash_password("pässwörd");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(is_valid_digest(&digest));
    }

    #[test]
    fn test_is_valid_digest_rejects_bad_values() {
        assert!(!is_valid_digest("abc"));
        assert!(!is_valid_digest(&"A".repeat(64)));
        assert!(!is_valid_digest(&"g".repeat(64)));
        assert!(!is_valid_digest("secret123"));
    }
}

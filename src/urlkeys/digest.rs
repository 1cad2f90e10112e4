//! Candidate-key hashing for transport equality with the remote service.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest as _, Sha256};

/// Hashes a candidate key into its transport-encoded form.
///
/// The full 32-byte SHA-256 digest of the key's UTF-8 bytes is encoded
/// with standard padded base64 - the representation both the local store
/// and the remote `fullHashes:find` endpoint key on. Deterministic and
/// total over any string input.
#[must_use]
pub fn digest(key: &str) -> String {
    BASE64.encode(Sha256::digest(key.as_bytes()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let a = digest("example.com/");
        let b = digest("example.com/");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_distinguishes_keys() {
        assert_ne!(digest("example.com/"), digest("example.com/a"));
    }

    #[test]
    fn test_digest_empty_string_constant() {
        // SHA-256 of the empty input, base64 encoded.
        assert_eq!(digest(""), "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
    }

    #[test]
    fn test_digest_known_vector() {
        // SHA-256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
        assert_eq!(digest("abc"), "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
    }

    #[test]
    fn test_digest_is_base64_of_32_bytes() {
        let encoded = digest("a.b.com/1/2.html?param=1");
        let decoded = BASE64.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 32);
    }
}

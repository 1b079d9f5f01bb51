//! Prompt fingerprints, so logs show which prompt version served a request.

use sha2::{Digest, Sha256};

/// Length of the short fingerprint used in log lines.
const SHORT_FINGERPRINT_LEN: usize = 12;

/// Compute a stable SHA-256 fingerprint for a prompt string (64 hex chars).
pub fn hash_prompt(prompt: &str) -> String {
    Sha256::digest(prompt.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// The leading characters of [`hash_prompt`], enough to tell prompt versions apart.
pub fn short_fingerprint(prompt: &str) -> String {
    let mut hash = hash_prompt(prompt);
    hash.truncate(SHORT_FINGERPRINT_LEN);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_prompt_stable() {
        let first = hash_prompt("classify this");
        assert_eq!(first, hash_prompt("classify this"));
        assert_ne!(first, hash_prompt("extract this"));
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_short_fingerprint_is_prefix() {
        let full = hash_prompt("policy");
        let short = short_fingerprint("policy");
        assert_eq!(short.len(), SHORT_FINGERPRINT_LEN);
        assert!(full.starts_with(&short));
    }
}

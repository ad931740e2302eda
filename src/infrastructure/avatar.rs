//! Gravatar-style avatar URL resolution.

use sha2::{Digest, Sha256};

/// Deterministic avatar URL for an email address.
///
/// Emails are trimmed and lowercased before hashing, so display-case
/// variants of one address resolve to the same image.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());

    format!(
        "https://s.gravatar.com/avatar/{}?size=50&default=retro",
        hex::encode(digest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(avatar_url("a@x.com"), avatar_url("a@x.com"));
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(avatar_url("  A@X.com "), avatar_url("a@x.com"));
    }

    #[test]
    fn test_distinct_emails_distinct_urls() {
        assert_ne!(avatar_url("a@x.com"), avatar_url("b@x.com"));
    }
}

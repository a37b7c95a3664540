use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Compare two strings in constant time
///
/// Used for password digests so that a failed login does not reveal how many
/// leading characters matched.
pub fn constant_time_eq(provided: &str, expected: &str) -> bool {
    provided.len() == expected.len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

/// Extract the session token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_eq_valid() {
        assert!(constant_time_eq("deadbeef", "deadbeef"));
    }

    #[test]
    fn test_constant_time_eq_invalid() {
        assert!(!constant_time_eq("deadbeee", "deadbeef"));
    }

    #[test]
    fn test_constant_time_eq_different_length() {
        assert!(!constant_time_eq("dead", "deadbeef"));
    }

    #[test]
    fn test_constant_time_eq_case_sensitive() {
        assert!(!constant_time_eq("DEADBEEF", "deadbeef"));
    }

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}

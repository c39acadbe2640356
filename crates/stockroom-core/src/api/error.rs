use thiserror::Error;

/// Failures surfaced to callers of `ApiClient`.
///
/// Every failure is local to the request that produced it; the client does
/// not retry. Callers match on the variant to decide between showing a
/// message and redirecting to the login flow.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - please log in again")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request rejected: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid carrying excessive data in messages
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            400..=499 => ApiError::Validation(truncated),
            500..=599 => ApiError::Server(truncated),
            _ => ApiError::Decode(format!("Unexpected status {}: {}", status, truncated)),
        }
    }

    /// True when the caller should treat the failure as a dead session and
    /// redirect to the login flow.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, "nope"),
            ApiError::AccessDenied(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, "gone"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::CONFLICT, "duplicate email"),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "bad payload"),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::SEE_OTHER, ""),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_long_bodies_are_truncated() {
        let body = "x".repeat(2000);
        match ApiError::from_status(reqwest::StatusCode::BAD_REQUEST, &body) {
            ApiError::Validation(msg) => {
                assert!(msg.len() < body.len());
                assert!(msg.contains("truncated"));
                assert!(msg.contains("2000 total bytes"));
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_only_unauthorized_is_an_auth_failure() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(!ApiError::NotFound("x".to_string()).is_auth_failure());
        assert!(!ApiError::Server("x".to_string()).is_auth_failure());
    }
}

// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error classifier for the AI complaint-generation path.
//!
//! Pure functions from failure shape to [`ClassifiedError`]: a closed set
//! of user-facing categories with display-ready messages, so callers never
//! surface raw transport errors. Classification happens exactly once — an
//! error that is already a `ClassifiedError` is surfaced as-is and never
//! re-classified.

use hosteldesk_core::{ClassifiedError, ErrorCode};

const NETWORK_FALLBACK: &str =
    "Failed to generate complaint. Please check your connection and try again.";

/// Transport-level failure shapes, before any HTTP status exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    /// DNS failure or connection refused; the backend never answered.
    ConnectionRefused,
    /// The request timed out waiting for a response.
    TimedOut,
    /// Any other failure without a response.
    Other,
}

/// Validates a free-text description before any network call is made.
///
/// Empty (or whitespace-only) and oversized descriptions are rejected
/// locally as `VALIDATION_ERROR`.
pub fn validate_description(description: &str) -> Result<(), ClassifiedError> {
    if description.trim().is_empty() {
        return Err(ClassifiedError::new(
            ErrorCode::ValidationError,
            "Please describe your complaint before submitting.",
        ));
    }
    // The limit counts characters, not bytes: multibyte scripts must not
    // hit it early.
    if description.chars().count() > 10_000 {
        return Err(ClassifiedError::new(
            ErrorCode::ValidationError,
            "Complaint description must be under 10,000 characters.",
        ));
    }
    Ok(())
}

/// Classifies a failure that produced no HTTP response.
pub fn classify_transport(failure: TransportFailure) -> ClassifiedError {
    match failure {
        TransportFailure::ConnectionRefused => ClassifiedError::new(
            ErrorCode::ConnectionError,
            "Server is unavailable. Please check if the backend is running and try again.",
        ),
        TransportFailure::TimedOut => ClassifiedError::new(
            ErrorCode::TimeoutError,
            "Request timed out. Please check your connection and try again.",
        ),
        TransportFailure::Other => ClassifiedError::new(ErrorCode::NetworkError, NETWORK_FALLBACK),
    }
}

/// Classifies a non-success HTTP response by status and backend message.
///
/// 500 responses are sub-classified by message content: a missing API key
/// is a backend configuration problem, a model/endpoint complaint is a
/// model problem, anything else surfaces the backend's own message.
pub fn classify_status(status: u16, backend_message: Option<&str>) -> ClassifiedError {
    match status {
        400 => ClassifiedError::new(
            ErrorCode::ValidationError,
            backend_message.unwrap_or("Invalid request. Please check your input and try again."),
        ),
        401 | 403 => ClassifiedError::new(
            ErrorCode::AuthError,
            "Your session has expired. Please log in again.",
        ),
        404 => ClassifiedError::new(
            ErrorCode::NotFound,
            "Server endpoint not found. Backend may need restart.",
        ),
        500 => {
            let message =
                backend_message.unwrap_or("Server error occurred. Please try again later.");
            if message.contains("API key") {
                ClassifiedError::new(
                    ErrorCode::ConfigError,
                    "AI service is not properly configured. Please contact support.",
                )
            } else if message.contains("Model") || message.contains("endpoint") {
                ClassifiedError::new(
                    ErrorCode::ModelError,
                    "AI model endpoint error. Please contact support.",
                )
            } else {
                ClassifiedError::new(ErrorCode::ServerError, message)
            }
        }
        s if s > 500 => ClassifiedError::new(
            ErrorCode::ServerError,
            "Server error. Please try again later.",
        ),
        _ => ClassifiedError::new(ErrorCode::ApiError, NETWORK_FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_descriptions_are_rejected() {
        assert_eq!(
            validate_description("").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            validate_description("   \n\t").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn oversized_description_is_rejected_at_the_boundary() {
        let at_limit = "x".repeat(10_000);
        assert!(validate_description(&at_limit).is_ok());

        let over = "x".repeat(10_001);
        let err = validate_description(&over).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.user_message.contains("10,000"));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 4,000 Devanagari characters are 12,000 bytes but well inside
        // the character limit.
        let multibyte = "च".repeat(4_000);
        assert!(validate_description(&multibyte).is_ok());

        let over = "च".repeat(10_001);
        assert_eq!(
            validate_description(&over).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn transport_failures_map_to_distinct_codes() {
        assert_eq!(
            classify_transport(TransportFailure::ConnectionRefused).code,
            ErrorCode::ConnectionError
        );
        assert_eq!(
            classify_transport(TransportFailure::TimedOut).code,
            ErrorCode::TimeoutError
        );
        assert_eq!(
            classify_transport(TransportFailure::Other).code,
            ErrorCode::NetworkError
        );
    }

    #[test]
    fn bad_request_prefers_the_backend_message() {
        let err = classify_status(400, Some("Description too vague"));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.user_message, "Description too vague");

        let fallback = classify_status(400, None);
        assert!(fallback.user_message.contains("check your input"));
    }

    #[test]
    fn unauthorized_and_forbidden_both_classify_as_auth() {
        for status in [401, 403] {
            let err = classify_status(status, None);
            assert_eq!(err.code, ErrorCode::AuthError);
            assert!(err.user_message.contains("log in again"));
        }
    }

    #[test]
    fn server_errors_subclassify_by_message() {
        let config = classify_status(500, Some("OpenAI API key not configured"));
        assert_eq!(config.code, ErrorCode::ConfigError);

        let model = classify_status(500, Some("Model endpoint returned 404"));
        assert_eq!(model.code, ErrorCode::ModelError);

        let plain = classify_status(500, Some("Database unavailable"));
        assert_eq!(plain.code, ErrorCode::ServerError);
        assert_eq!(plain.user_message, "Database unavailable");

        let no_body = classify_status(500, None);
        assert_eq!(no_body.code, ErrorCode::ServerError);
        assert!(no_body.user_message.contains("try again later"));
    }

    #[test]
    fn gateway_errors_are_server_errors() {
        assert_eq!(classify_status(502, None).code, ErrorCode::ServerError);
        assert_eq!(classify_status(503, None).code, ErrorCode::ServerError);
    }

    #[test]
    fn unrecognized_statuses_fall_back_to_api_error() {
        let err = classify_status(418, None);
        assert_eq!(err.code, ErrorCode::ApiError);
    }
}

// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Hosteldesk client workspace.
//!
//! This crate provides the domain types shared between the API client,
//! the session store, and the CLI: complaint and user wire shapes, the
//! `HosteldeskError` type, and the classified error taxonomy used by the
//! AI complaint-generation path.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ClassifiedError, ErrorCode, HosteldeskError};
pub use types::{
    AiAnalytics, AiDailyCount, Category, Complaint, DashboardStats, GeneratedComplaint,
    NewComplaint, QaAnswer, QaHistoryEntry, Role, Session, SignupRequest, Status, UserAccount,
    UserProfile,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_wire_round_trip() {
        for status in [Status::Open, Status::InProgress, Status::Resolved] {
            let json = serde_json::to_string(&status).expect("should serialize");
            let parsed: Status = serde_json::from_str(&json).expect("should deserialize");
            assert_eq!(status, parsed);
        }
        // Wire names are SCREAMING_SNAKE_CASE, matching the backend enum.
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }

    #[test]
    fn category_parses_from_cli_form() {
        let parsed = Category::from_str("PLUMBING").expect("should parse");
        assert_eq!(parsed, Category::Plumbing);
        assert_eq!(Category::Ragging.to_string(), "RAGGING");
    }

    #[test]
    fn error_code_serializes_to_stable_codes() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ValidationError).unwrap(),
            "\"VALIDATION_ERROR\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::NotFound).unwrap(),
            "\"NOT_FOUND\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::ApiError).unwrap(),
            "\"API_ERROR\""
        );
    }

    #[test]
    fn classified_error_displays_user_message() {
        let err = ClassifiedError::new(ErrorCode::ConfigError, "AI service is not configured");
        assert_eq!(err.to_string(), "AI service is not configured");
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}

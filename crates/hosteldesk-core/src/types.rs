// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the hostel-management backend.
//!
//! Field names follow the backend's camelCase JSON; enum values are
//! SCREAMING_SNAKE_CASE as the backend serializes its Java enums. The
//! client holds read-only snapshots of these shapes per view and never
//! merges partial updates: a status-update call replaces the whole
//! [`Complaint`] with the object the backend returns.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role assigned to an account by the backend.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    Client,
}

/// Lifecycle state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
}

/// Complaint category handled by the hostel maintenance teams.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Plumbing,
    Electrical,
    Carpentry,
    Ragging,
}

/// Profile snapshot the backend returns from login and signup.
///
/// Immutable once captured; not refreshed until the next login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub role: Role,
    /// Informational message from the auth endpoint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Client-held record of the authenticated identity.
///
/// `encoded_credential` is the Base64 encoding of `username:password`,
/// computed once at login and never re-derived. Its presence is the sole
/// authentication predicate; there is no expiry check on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub encoded_credential: String,
    pub profile: Option<UserProfile>,
}

impl Session {
    /// Returns the backend user id from the cached profile, if known.
    pub fn user_id(&self) -> Option<i64> {
        self.profile.as_ref().and_then(|p| p.user_id)
    }
}

/// An account as returned by the users endpoints and embedded in
/// `Complaint::raised_by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

/// A complaint as the backend serializes it. Owned by the backend; the
/// client never mutates individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i64,
    #[serde(default)]
    pub message_type: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub specific_category: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub room_no: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub building_code: Option<String>,
    #[serde(default)]
    pub priority_level: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_team: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub raised_by: Option<UserAccount>,
    /// Relative path against the backend's static-file root.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Fields the client supplies when creating a complaint.
///
/// `None` fields are omitted from the request body, both in JSON form and
/// when flattened into a multipart upload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub message_type: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    pub description: String,
}

impl NewComplaint {
    /// Flattens the request into multipart key/value text fields, omitting
    /// `None` values. Keys match the JSON names the backend binds.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("messageType", self.message_type.clone()),
            ("category", self.category.to_string()),
        ];
        if let Some(ref v) = self.sub_category {
            fields.push(("subCategory", v.clone()));
        }
        if let Some(ref v) = self.block {
            fields.push(("block", v.clone()));
        }
        if let Some(ref v) = self.room_no {
            fields.push(("roomNo", v.clone()));
        }
        if let Some(ref v) = self.contact_no {
            fields.push(("contactNo", v.clone()));
        }
        fields.push(("description", self.description.clone()));
        fields
    }
}

/// Signup request body, mirroring the backend's `SignupRequest`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

/// One question/answer exchange from the QA history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaHistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub admin: bool,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub asked_at: Option<NaiveDateTime>,
}

/// Answer returned by the QA ask endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaAnswer {
    pub answer: String,
}

/// Aggregate QA usage analytics for one user or the whole system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalytics {
    #[serde(default)]
    pub total_questions: u64,
    #[serde(default)]
    pub total_admin_questions: u64,
    #[serde(default)]
    pub total_user_questions: u64,
    #[serde(default)]
    pub success_count: u64,
    #[serde(default)]
    pub error_count: u64,
    #[serde(default)]
    pub first_question_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_question_date: Option<NaiveDate>,
}

/// Per-day QA question counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDailyCount {
    pub date: NaiveDate,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub admin: u64,
    #[serde(default)]
    pub user: u64,
}

/// Admin dashboard complaint counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub open: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub category_counts: HashMap<String, u64>,
}

/// Structured ticket the backend builds from a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComplaint {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub room_no: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub priority_level: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": 7,
            "messageType": "COMPLAINT",
            "category": "PLUMBING",
            "subCategory": "Leakage",
            "block": "B",
            "roomNo": "214",
            "contactNo": "5550001",
            "description": "Tap leaking near the basin",
            "status": "OPEN",
            "createdAt": "2026-02-11T09:30:00",
            "raisedBy": {"id": 3, "username": "asha", "role": "CLIENT"},
            "imageUrl": "/uploads/7.jpg"
        });
        let complaint: Complaint = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(complaint.id, 7);
        assert_eq!(complaint.category, Some(Category::Plumbing));
        assert_eq!(complaint.status, Status::Open);
        assert_eq!(complaint.raised_by.as_ref().unwrap().username, "asha");
        assert_eq!(complaint.image_url.as_deref(), Some("/uploads/7.jpg"));
    }

    #[test]
    fn complaint_tolerates_missing_optional_fields() {
        let json = serde_json::json!({"id": 1, "status": "RESOLVED"});
        let complaint: Complaint = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(complaint.status, Status::Resolved);
        assert!(complaint.category.is_none());
        assert!(complaint.raised_by.is_none());
    }

    #[test]
    fn new_complaint_form_fields_omit_none() {
        let new = NewComplaint {
            message_type: "COMPLAINT".into(),
            category: Category::Electrical,
            sub_category: None,
            block: Some("A".into()),
            room_no: None,
            contact_no: None,
            description: "Fan not working".into(),
        };
        let fields = new.form_fields();
        assert!(fields.iter().any(|(k, v)| *k == "block" && v == "A"));
        assert!(!fields.iter().any(|(k, _)| *k == "subCategory"));
        assert!(!fields.iter().any(|(k, _)| *k == "roomNo"));
        assert_eq!(
            fields.last().unwrap(),
            &("description", "Fan not working".to_string())
        );
    }

    #[test]
    fn new_complaint_json_omits_none() {
        let new = NewComplaint {
            message_type: "COMPLAINT".into(),
            category: Category::Carpentry,
            description: "Broken chair".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&new).unwrap();
        assert_eq!(json["category"], "CARPENTRY");
        assert!(json.get("block").is_none());
    }

    #[test]
    fn session_user_id_comes_from_profile() {
        let session = Session {
            username: "asha".into(),
            encoded_credential: "YXNoYTpwdw==".into(),
            profile: Some(UserProfile {
                user_id: Some(42),
                username: "asha".into(),
                role: Role::Client,
                message: None,
            }),
        };
        assert_eq!(session.user_id(), Some(42));

        let bare = Session {
            username: "asha".into(),
            encoded_credential: "YXNoYTpwdw==".into(),
            profile: None,
        };
        assert_eq!(bare.user_id(), None);
    }

    #[test]
    fn dashboard_stats_deserializes_category_map() {
        let json = serde_json::json!({
            "total": 10, "open": 4, "inProgress": 3, "resolved": 3,
            "categoryCounts": {"PLUMBING": 5, "ELECTRICAL": 5}
        });
        let stats: DashboardStats = serde_json::from_value(json).unwrap();
        assert_eq!(stats.in_progress, 3);
        assert_eq!(stats.category_counts["PLUMBING"], 5);
    }
}

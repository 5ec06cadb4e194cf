// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! QA/AI assistant domain client.
//!
//! Ask calls go to role-specific endpoints; history and analytics are
//! display-only reads. The user-scoped reads soft-fail: when the session
//! carries no user id they resolve to an empty result instead of erroring,
//! so a profile-less session still renders a usable page. That is a
//! documented property of these calls, not a dispatcher-wide default —
//! critical paths keep their errors.

use hosteldesk_core::{AiAnalytics, AiDailyCount, HosteldeskError, QaAnswer, QaHistoryEntry, Session};
use serde::Serialize;
use tracing::debug;

use crate::http::ApiClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AskRequest<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
}

impl ApiClient {
    /// Asks the assistant a question scoped to the given client user.
    pub async fn ask_as_client(
        &self,
        question: &str,
        user_id: i64,
    ) -> Result<QaAnswer, HosteldeskError> {
        self.post_json(
            "/clients/qa",
            &AskRequest {
                question,
                user_id: Some(user_id),
            },
        )
        .await
    }

    /// Asks the assistant a question with admin scope.
    pub async fn ask_as_admin(
        &self,
        question: &str,
        session: &Session,
    ) -> Result<QaAnswer, HosteldeskError> {
        self.post_json(
            "/admin/qa",
            &AskRequest {
                question,
                user_id: session.user_id(),
            },
        )
        .await
    }

    /// Fetches the QA history for the session's user.
    ///
    /// Soft-fails to an empty list when the session has no user id.
    pub async fn qa_history(
        &self,
        session: &Session,
    ) -> Result<Vec<QaHistoryEntry>, HosteldeskError> {
        let Some(user_id) = session.user_id() else {
            debug!("qa history requested without a user id, returning empty");
            return Ok(Vec::new());
        };
        self.get_json(&format!("/qa/history/{user_id}")).await
    }

    /// Fetches QA analytics for the session's user.
    ///
    /// Soft-fails to `None` when the session has no user id.
    pub async fn user_analytics(
        &self,
        session: &Session,
    ) -> Result<Option<AiAnalytics>, HosteldeskError> {
        let Some(user_id) = session.user_id() else {
            debug!("user analytics requested without a user id, returning none");
            return Ok(None);
        };
        self.get_json(&format!("/qa/history/analytics/user/{user_id}"))
            .await
            .map(Some)
    }

    /// Fetches system-wide QA analytics.
    pub async fn global_analytics(&self) -> Result<AiAnalytics, HosteldeskError> {
        self.get_json("/qa/history/analytics/global").await
    }

    /// Fetches per-day question counts for the session's user over the
    /// last `days` days.
    ///
    /// Soft-fails to an empty list when the session has no user id.
    pub async fn user_daily_counts(
        &self,
        session: &Session,
        days: u32,
    ) -> Result<Vec<AiDailyCount>, HosteldeskError> {
        let Some(user_id) = session.user_id() else {
            debug!("daily counts requested without a user id, returning empty");
            return Ok(Vec::new());
        };
        self.get_json_query(
            &format!("/qa/history/analytics/user/{user_id}/daily"),
            &[("days", days.to_string())],
        )
        .await
    }

    /// Fetches system-wide per-day question counts over the last `days` days.
    pub async fn global_daily_counts(
        &self,
        days: u32,
    ) -> Result<Vec<AiDailyCount>, HosteldeskError> {
        self.get_json_query(
            "/qa/history/analytics/global/daily",
            &[("days", days.to_string())],
        )
        .await
    }
}

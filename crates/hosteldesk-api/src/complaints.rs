// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaints domain client.
//!
//! Pure request/response mappers over the `/complaints` endpoints. Create
//! switches to multipart encoding when an image rides along; search sends
//! only the filter fields that are set, combined with AND semantics by the
//! backend; export returns the raw bytes unparsed.

use bytes::Bytes;
use chrono::NaiveDate;
use hosteldesk_core::{Category, Complaint, HosteldeskError, NewComplaint, Status};
use serde::Serialize;

use crate::http::ApiClient;

/// An image to attach to a new complaint.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Optional filters for complaint search; `None` fields are omitted from
/// the query string.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Free-text query.
    pub q: Option<String>,
    pub category: Option<Category>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    /// Assigned agent name.
    pub agent: Option<String>,
}

impl SearchFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(ref q) = self.q {
            query.push(("q", q.clone()));
        }
        if let Some(category) = self.category {
            query.push(("category", category.to_string()));
        }
        if let Some(from) = self.from_date {
            query.push(("fromDate", from.to_string()));
        }
        if let Some(to) = self.to_date {
            query.push(("toDate", to.to_string()));
        }
        if let Some(ref agent) = self.agent {
            query.push(("agent", agent.clone()));
        }
        query
    }
}

#[derive(Debug, Serialize)]
struct UpdateStatusRequest {
    status: Status,
}

impl ApiClient {
    /// Lists the complaints visible to the current user (the backend
    /// scopes the result by role).
    pub async fn list_complaints(&self) -> Result<Vec<Complaint>, HosteldeskError> {
        self.get_json("/complaints").await
    }

    /// Fetches one complaint by id.
    pub async fn get_complaint(&self, id: i64) -> Result<Complaint, HosteldeskError> {
        self.get_json(&format!("/complaints/{id}")).await
    }

    /// Creates a complaint, optionally with an image attachment.
    ///
    /// Without an image the body is JSON. With one, the body switches to
    /// multipart: the complaint fields are flattened to text parts (unset
    /// fields omitted) plus an `image` file part.
    pub async fn create_complaint(
        &self,
        new: &NewComplaint,
        image: Option<ImageAttachment>,
    ) -> Result<Complaint, HosteldeskError> {
        match image {
            None => self.post_json("/complaints", new).await,
            Some(image) => {
                let mut form = reqwest::multipart::Form::new();
                for (key, value) in new.form_fields() {
                    form = form.text(key, value);
                }
                let part = reqwest::multipart::Part::bytes(image.bytes)
                    .file_name(image.file_name)
                    .mime_str(&image.mime_type)
                    .map_err(|e| {
                        HosteldeskError::Internal(format!("invalid image MIME type: {e}"))
                    })?;
                form = form.part("image", part);
                self.post_multipart("/complaints", form).await
            }
        }
    }

    /// Updates a complaint's status. The backend returns the full updated
    /// complaint, which replaces the caller's snapshot wholesale.
    pub async fn update_complaint_status(
        &self,
        id: i64,
        status: Status,
    ) -> Result<Complaint, HosteldeskError> {
        self.put_json(
            &format!("/complaints/{id}/status"),
            &UpdateStatusRequest { status },
        )
        .await
    }

    /// Searches complaints with the given filters (implicit AND).
    pub async fn search_complaints(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Complaint>, HosteldeskError> {
        self.get_json_query("/complaints/search", &filter.to_query())
            .await
    }

    /// Downloads the complaint export as an opaque blob.
    pub async fn export_complaints(&self) -> Result<Bytes, HosteldeskError> {
        self.get_bytes("/complaints/export-all").await
    }
}

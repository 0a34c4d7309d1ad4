//
//  incidentio-client
//  api/resources/severities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Severity types.
//!
//! Severities rank how bad an incident is; a lower `rank` is less severe.
//!
//! # Notes
//!
//! - Unlike the other kinds, the API confirms a severity delete with
//!   `202 Accepted` rather than `204 No Content`.
//! - `name` is limited to 50 bytes and `description` to 1000 bytes of UTF-8;
//!   both are checked locally before any request is sent.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::check_length;
use crate::api::error::ApiError;
use crate::api::resource::{Resource, ResourceKind, Validate};
use crate::api::Envelope;

/// Longest accepted severity name, in UTF-8 bytes.
pub const MAX_NAME_LENGTH: usize = 50;

/// Longest accepted severity description, in UTF-8 bytes.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Mutable fields of a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Severity {
    pub name: String,
    pub description: String,
    pub rank: i64,
}

impl Severity {
    pub fn new(name: impl Into<String>, description: impl Into<String>, rank: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rank,
        }
    }
}

impl Validate for Severity {
    fn validate(&self) -> Result<(), ApiError> {
        check_length("name", &self.name, MAX_NAME_LENGTH)?;
        check_length("description", &self.description, MAX_DESCRIPTION_LENGTH)
    }
}

/// A severity as stored by incident.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: Severity,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Wire envelope: `{"severity": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityResponse {
    pub severity: SeverityRecord,
}

impl Envelope for SeverityResponse {
    type Record = SeverityRecord;

    fn into_record(self) -> SeverityRecord {
        self.severity
    }
}

/// Marker for the `/v1/severities` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Severities;

impl Resource for Severities {
    const KIND: ResourceKind = ResourceKind {
        segment: "severities",
        delete_success: &[StatusCode::ACCEPTED],
    };

    type Fields = Severity;
    type Response = SeverityResponse;
}

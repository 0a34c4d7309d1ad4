//
//  incidentio-client
//  api/resources/incident_roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Incident role types.
//!
//! Roles such as "Incident Lead" or "Communications" are assigned to
//! responders during an incident. The `shortform` is used in Slack
//! commands and must be unique; the API answers `422` with an
//! `invalid_value` error pointing at `shortform` otherwise.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::resource::{Resource, ResourceKind, Validate};
use crate::api::Envelope;

/// Mutable fields of an incident role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRole {
    pub name: String,
    pub description: String,

    /// Whether the role must be assigned on every incident.
    pub required: bool,

    /// Shown to the responder when they take the role.
    pub instructions: String,

    #[serde(rename = "shortform")]
    pub short_form: String,
}

impl Validate for IncidentRole {}

/// An incident role as stored by incident.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentRoleRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: IncidentRole,

    /// Server-assigned tag, e.g. `lead` for the built-in lead role or
    /// `custom` for user-defined ones.
    #[serde(default)]
    pub role_type: String,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Wire envelope: `{"incident_role": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRoleResponse {
    pub incident_role: IncidentRoleRecord,
}

impl Envelope for IncidentRoleResponse {
    type Record = IncidentRoleRecord;

    fn into_record(self) -> IncidentRoleRecord {
        self.incident_role
    }
}

/// Marker for the `/v1/incident_roles` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct IncidentRoles;

impl Resource for IncidentRoles {
    const KIND: ResourceKind = ResourceKind {
        segment: "incident_roles",
        delete_success: &[StatusCode::NO_CONTENT],
    };

    type Fields = IncidentRole;
    type Response = IncidentRoleResponse;
}

//
//  incidentio-client
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed request and response shapes for each managed resource kind.
//!
//! # Module Organization
//!
//! - [`incident_roles`] - Incident roles (`/v1/incident_roles`)
//! - [`severities`] - Severities (`/v1/severities`)
//! - [`custom_fields`] - Custom fields (`/v1/custom_fields`)
//! - [`custom_field_options`] - Custom field options (`/v1/custom_field_options`)
//!
//! Every kind follows the same pattern: a plain struct of mutable fields
//! (what create and update submit), a `*Record` that adds the
//! server-assigned id and timestamps, a `*Response` envelope matching the
//! wire format, and a marker type implementing
//! [`Resource`](super::resource::Resource).
//!
//! # Notes
//!
//! - Ids are assigned by the server and never appear in the field structs.
//! - Timestamps are kept as opaque strings.

pub mod custom_field_options;
pub mod custom_fields;
pub mod incident_roles;
pub mod severities;

pub use custom_field_options::*;
pub use custom_fields::*;
pub use incident_roles::*;
pub use severities::*;

use super::error::ApiError;

/// Rejects `value` when its UTF-8 encoding is longer than `max` bytes.
pub(crate) fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ApiError> {
    let length = value.len();
    if length > max {
        return Err(ApiError::InvalidValue {
            field,
            value: value.to_string(),
            expected: format!("at most {} bytes, got {}", max, length),
        });
    }
    Ok(())
}

//
//  incidentio-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the incident.io REST API
//! (`/v1`) and the typed shapes of the resources it manages.
//!
//! ## Architecture
//!
//! - [`client`]: Transport plus the generic get/create/update/delete verbs
//! - [`error`]: Error taxonomy and decoding of structured API errors
//! - [`resource`]: Per-kind configuration and the generic accessor
//! - [`resources`]: Incident roles, severities, custom fields and options
//!
//! ## Usage
//!
//! ```rust,no_run
//! use incidentio_client::api::IncidentIoClient;
//! use incidentio_client::api::resources::CustomFieldOption;
//!
//! # async fn example() -> Result<(), incidentio_client::api::ApiError> {
//! let client = IncidentIoClient::new("api-key")?;
//!
//! let option = CustomFieldOption {
//!     custom_field_id: "01G44T2BWJY0ZMV945X32RAJ5C".to_string(),
//!     sort_key: 10,
//!     value: "Platform".to_string(),
//! };
//! let created = client.custom_field_options().create(&option).await?;
//! println!("created option {}", created.custom_field_option.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Success statuses
//!
//! | Verb | Method | Path | Success |
//! |------|--------|------|---------|
//! | get | `GET` | `/v1/{kind}/{id}` | 200 |
//! | create | `POST` | `/v1/{kind}` | 201 |
//! | update | `PUT` | `/v1/{kind}/{id}` | 200 |
//! | delete | `DELETE` | `/v1/{kind}/{id}` | 204, or 202 for severities |

pub mod client;
pub mod error;
pub mod resource;
pub mod resources;

pub use client::IncidentIoClient;
pub use error::{is_error_status, ApiError, ErrorResponse};
pub use resource::{Endpoint, Resource, ResourceKind, Validate};

/// Response envelope wrapping a single record under the kind's key.
pub trait Envelope {
    /// The record carried by the envelope.
    type Record;

    /// Unwraps the record.
    fn into_record(self) -> Self::Record;
}

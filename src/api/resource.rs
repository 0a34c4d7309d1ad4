//
//  incidentio-client
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Per-kind configuration and the generic resource accessor.
//!
//! Each managed resource kind is described by a [`ResourceKind`] record and
//! a [`Resource`] implementation tying that record to the kind's request
//! and response shapes. [`Endpoint`] then exposes the four CRUD verbs for
//! any such kind, delegating the actual work to
//! [`IncidentIoClient`](super::IncidentIoClient).
//!
//! ```rust,no_run
//! use incidentio_client::api::IncidentIoClient;
//! use incidentio_client::api::resources::Severity;
//!
//! # async fn example() -> Result<(), incidentio_client::api::ApiError> {
//! let client = IncidentIoClient::new("api-key")?;
//! let created = client
//!     .severities()
//!     .create(&Severity::new("Minor", "Nothing urgent", 1))
//!     .await?;
//! client.severities().delete(&created.severity.id).await?;
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::client::IncidentIoClient;
use super::error::ApiError;

/// Static description of one remote resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// URL segment below `/v1`, e.g. `incident_roles`.
    pub segment: &'static str,

    /// Statuses that confirm a successful delete.
    ///
    /// Most kinds answer `204 No Content`; severities answer
    /// `202 Accepted`.
    pub delete_success: &'static [StatusCode],
}

impl ResourceKind {
    /// Path of the collection, e.g. `/v1/severities`.
    pub fn collection_path(&self) -> String {
        format!("/v1/{}", self.segment)
    }

    /// Path of a single record, e.g. `/v1/severities/01G...`.
    ///
    /// The id is percent-encoded as one path segment, so `/`, `?` or `#`
    /// in an id can never address another kind or add a query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidValue`] for `.` and `..`, which URL
    /// parsing would collapse into the parent path even when encoded.
    pub fn item_path(&self, id: &str) -> Result<String, ApiError> {
        if id == "." || id == ".." {
            return Err(ApiError::InvalidValue {
                field: "id",
                value: id.to_string(),
                expected: "a single path segment".to_string(),
            });
        }

        Ok(format!("/v1/{}/{}", self.segment, encode_segment(id)))
    }

    /// Checks whether `status` confirms a delete for this kind.
    pub fn accepts_delete(&self, status: StatusCode) -> bool {
        self.delete_success.contains(&status)
    }
}

/// Percent-encodes everything except ASCII alphanumerics and `*-._`.
fn encode_segment(id: &str) -> String {
    // form encoding writes a space as `+`; a literal `+` is already `%2B`
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

/// Local checks run on submitted fields before any request is sent.
///
/// The default implementation accepts everything.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// A resource kind managed through the generic CRUD operations.
pub trait Resource {
    /// Endpoint and status configuration for this kind.
    const KIND: ResourceKind;

    /// Mutable fields submitted on create and update.
    type Fields: Serialize + Validate + Sync;

    /// Response envelope returned by get, create and update.
    type Response: DeserializeOwned;
}

/// Lightweight accessor binding a [`Resource`] kind to a client.
///
/// Obtained through the client's per-kind methods such as
/// [`IncidentIoClient::severities`].
pub struct Endpoint<'a, R: Resource> {
    client: &'a IncidentIoClient,
    _kind: PhantomData<R>,
}

impl<'a, R: Resource> Endpoint<'a, R> {
    pub(crate) fn new(client: &'a IncidentIoClient) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }

    /// The kind configuration this accessor is bound to.
    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    /// Fetches the record with the given id.
    pub async fn get(&self, id: &str) -> Result<R::Response, ApiError> {
        self.client.get::<R>(id).await
    }

    /// Creates a record; the returned envelope carries the new id.
    pub async fn create(&self, fields: &R::Fields) -> Result<R::Response, ApiError> {
        self.client.create::<R>(fields).await
    }

    /// Replaces the mutable fields of the record with the given id.
    pub async fn update(&self, id: &str, fields: &R::Fields) -> Result<R::Response, ApiError> {
        self.client.update::<R>(id, fields).await
    }

    /// Deletes the record with the given id.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete::<R>(id).await
    }
}

impl<R: Resource> Clone for Endpoint<'_, R> {
    fn clone(&self) -> Self {
        Self::new(self.client)
    }
}

impl<R: Resource> Copy for Endpoint<'_, R> {}

//
//  incidentio-client
//  manager.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Host-facing resource management contract.
//!
//! The raw client reports a 404 like any other API error. A host managing
//! resources declaratively wants two different answers:
//!
//! - reading a record that no longer exists means "drop it from state",
//! - deleting a record that no longer exists means "nothing left to do".
//!
//! [`ManagedResource`] encodes exactly that and nothing more. Its method
//! names differ from the raw [`Endpoint`] verbs so both can be in scope. Plan diffing,
//! drift detection and state persistence stay with the host.
//!
//! ```rust,no_run
//! use incidentio_client::api::IncidentIoClient;
//! use incidentio_client::manager::ManagedResource;
//!
//! # async fn example() -> Result<(), incidentio_client::api::ApiError> {
//! let client = IncidentIoClient::new("api-key")?;
//! match client.severities().read("01FCNDV6P870EA6S7TK1DSYDG0").await? {
//!     Some(severity) => println!("still there: {}", severity.fields.name),
//!     None => println!("gone, removing from state"),
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::resource::{Endpoint, Resource};
use crate::api::Envelope;

/// Lifecycle operations a host drives for one resource kind.
#[async_trait]
pub trait ManagedResource {
    /// Mutable fields submitted on create and update.
    type Fields: Send + Sync;

    /// Stored record, including the server-assigned id.
    type Record: Send;

    /// Creates the resource and returns the stored record.
    async fn create_record(&self, fields: &Self::Fields) -> Result<Self::Record, ApiError>;

    /// Reads the resource; `None` when the API reports it as not found.
    async fn read(&self, id: &str) -> Result<Option<Self::Record>, ApiError>;

    /// Updates the resource and returns the stored record.
    async fn update_record(&self, id: &str, fields: &Self::Fields) -> Result<Self::Record, ApiError>;

    /// Deletes the resource; succeeds when it is already absent.
    async fn remove(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl<'a, R> ManagedResource for Endpoint<'a, R>
where
    R: Resource + Send + Sync,
    R::Fields: Send,
    R::Response: Envelope + Send,
    <R::Response as Envelope>::Record: Send,
{
    type Fields = R::Fields;
    type Record = <R::Response as Envelope>::Record;

    async fn create_record(&self, fields: &Self::Fields) -> Result<Self::Record, ApiError> {
        Ok(self.create(fields).await?.into_record())
    }

    async fn read(&self, id: &str) -> Result<Option<Self::Record>, ApiError> {
        match self.get(id).await {
            Ok(response) => Ok(Some(response.into_record())),
            Err(err) if err.is_not_found() => {
                debug!(kind = R::KIND.segment, id, "resource not found, treating as absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn update_record(&self, id: &str, fields: &Self::Fields) -> Result<Self::Record, ApiError> {
        Ok(self.update(id, fields).await?.into_record())
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        match self.delete(id).await {
            Err(err) if err.is_not_found() => {
                debug!(kind = R::KIND.segment, id, "resource already deleted");
                Ok(())
            }
            other => other,
        }
    }
}

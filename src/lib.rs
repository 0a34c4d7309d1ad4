//
//  incidentio-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # incident.io Client Library
//!
//! A typed REST client that lets an infrastructure-as-code host manage
//! incident.io configuration: incident roles, severities, custom fields
//! and custom field options.
//!
//! ## Overview
//!
//! The client maps each lifecycle verb onto a single HTTP round trip. It
//! never retries, paginates or caches; those decisions belong to the host.
//! Non-success responses are decoded into a structured error that keeps
//! the HTTP status, so the host can tell "already gone" from real failures.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, CRUD verbs, error decoding and resource shapes
//! - [`config`]: Resolution of API key, host URL, debug flag and timeout
//! - [`manager`]: Host-facing contract that treats 404 as "absent"
//! - [`logging`]: Optional `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use incidentio_client::api::IncidentIoClient;
//! use incidentio_client::api::resources::IncidentRole;
//! use incidentio_client::config::ProviderConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProviderConfig::default().resolve()?;
//! let client = IncidentIoClient::from_config(&config)?;
//!
//! let role = IncidentRole {
//!     name: "Communications Lead".to_string(),
//!     description: "Keeps stakeholders informed".to_string(),
//!     required: false,
//!     instructions: "Post an update every 30 minutes".to_string(),
//!     short_form: "comms".to_string(),
//! };
//!
//! let created = client.incident_roles().create(&role).await?;
//! println!("Created role {}", created.incident_role.id);
//! # Ok(())
//! # }
//! ```

/// HTTP client, resource shapes and error types for the incident.io API.
pub mod api;

/// Provider configuration and environment fallbacks.
pub mod config;

/// Logging setup.
pub mod logging;

/// Lifecycle contract for resource-management hosts.
pub mod manager;

pub use api::{ApiError, ErrorResponse, IncidentIoClient};
pub use config::{ClientConfig, ProviderConfig, API_KEY_ENV};
pub use manager::ManagedResource;

/// Production API origin.
pub const DEFAULT_HOST_URL: &str = "https://api.incident.io";

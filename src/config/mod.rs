//
//  incidentio-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Resolves the settings the client needs from what the host provides,
//! falling back to environment variables.
//!
//! ## Sources
//!
//! | Setting | Explicit | Environment | Default |
//! |---------|----------|-------------|---------|
//! | API key | `api_key` | `INCIDENT_IO_API_KEY` | none, required |
//! | Host URL | `host_url` | `INCIDENT_IO_HOST_URL` | `https://api.incident.io` |
//! | Debug dumps | `debug_http` | `INCIDENT_IO_DEBUG` | `false` |
//! | Timeout | `timeout_secs` | | 10 seconds |
//!
//! ## Example Configuration File
//!
//! ```toml
//! api_key = "inc_live_..."
//! host_url = "http://localhost:8080"
//! debug_http = true
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use incidentio_client::api::IncidentIoClient;
//! use incidentio_client::config::ProviderConfig;
//!
//! let config = ProviderConfig::default().resolve()?;
//! let client = IncidentIoClient::from_config(&config)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::client::DEFAULT_TIMEOUT;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "INCIDENT_IO_API_KEY";

/// Environment variable overriding the API origin.
pub const HOST_URL_ENV: &str = "INCIDENT_IO_HOST_URL";

/// Environment variable enabling wire dumps.
pub const DEBUG_ENV: &str = "INCIDENT_IO_DEBUG";

/// Settings as supplied by the host. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub host_url: Option<String>,
    pub debug_http: Option<bool>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved, immutable client settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub host_url: String,
    pub debug_http: bool,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("host_url", &self.host_url)
            .field("debug_http", &self.debug_http)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Parses settings from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse provider configuration")
    }

    /// Resolves settings against the process environment.
    pub fn resolve(&self) -> Result<ClientConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves settings, reading fallbacks through `lookup`.
    ///
    /// # Errors
    ///
    /// Fails when no non-blank API key is available, when the host URL is
    /// not an absolute `http`/`https` URL, or when the timeout is zero.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => lookup(API_KEY_ENV).unwrap_or_default(),
        };
        if api_key.trim().is_empty() {
            bail!(
                "No API key configured. Set `api_key` or the {} environment variable",
                API_KEY_ENV
            );
        }

        let host_url = self
            .host_url
            .clone()
            .or_else(|| lookup(HOST_URL_ENV).filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| crate::DEFAULT_HOST_URL.to_string());
        validate_host_url(&host_url)?;

        let debug_http = match self.debug_http {
            Some(debug) => debug,
            None => lookup(DEBUG_ENV).map(|v| is_truthy(&v)).unwrap_or(false),
        };

        let timeout = match self.timeout_secs {
            Some(0) => bail!("timeout_secs must be greater than zero"),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(ClientConfig {
            api_key,
            host_url,
            debug_http,
            timeout,
        })
    }
}

fn validate_host_url(host_url: &str) -> Result<()> {
    let url = Url::parse(host_url).with_context(|| format!("Invalid host URL '{}'", host_url))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("Unsupported scheme '{}' in host URL '{}'", other, host_url),
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

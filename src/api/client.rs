//
//  incidentio-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the incident.io API
//!
//! This module provides the transport and the generic CRUD verbs every
//! resource accessor delegates to.
//!
//! ## Features
//!
//! - Bearer authentication header injection
//! - Base URL and path joining with exactly one separating slash
//! - Bounded per-request timeout, no automatic retries
//! - JSON serialization/deserialization
//! - Per-verb success statuses, with per-kind statuses for delete
//! - Optional wire dumps of full requests and responses

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::{decode_error, ApiError};
use super::resource::{Endpoint, Resource, Validate};
use super::resources::{CustomFieldOptions, CustomFields, IncidentRoles, Severities};
use crate::config::ClientConfig;

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Joins a base URL and a request path with exactly one `/` between them.
///
/// # Example
///
/// ```rust
/// use incidentio_client::api::client::join_url;
///
/// assert_eq!(join_url("https://api.example.com/", "/v1/x"), "https://api.example.com/v1/x");
/// assert_eq!(join_url("https://api.example.com", "v1/x"), "https://api.example.com/v1/x");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Fails with the decoded API error unless the status is in `accepted`.
    pub fn ensure_status(&self, accepted: &[StatusCode]) -> Result<(), ApiError> {
        if accepted.contains(&self.status) {
            return Ok(());
        }

        Err(self.error())
    }

    /// Decodes the body as an API error for this status.
    ///
    /// A body that is neither empty nor an error envelope yields
    /// [`ApiError::Decode`].
    pub fn error(&self) -> ApiError {
        match decode_error(self.status, &self.body) {
            Ok(error) => ApiError::Api(error),
            Err(err) => err,
        }
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Decode)
    }
}

/// The main client for the incident.io REST API.
///
/// The configuration is fixed once the client is built. The underlying
/// `reqwest::Client` pools connections and is safe to share, so one
/// `IncidentIoClient` can serve many concurrent operations.
///
/// # Example
///
/// ```rust,no_run
/// use incidentio_client::api::IncidentIoClient;
///
/// # async fn example() -> Result<(), incidentio_client::api::ApiError> {
/// let client = IncidentIoClient::new("my-api-key")?
///     .with_host_url("http://localhost:8080")
///     .with_debug(true);
///
/// let role = client.incident_roles().get("01G0J1EXE7AXZ2C93K61WBPYEH").await?;
/// println!("{}", role.incident_role.fields.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct IncidentIoClient {
    http: Client,
    host_url: String,
    api_key: String,
    debug_http: bool,
    timeout: Duration,
}

impl IncidentIoClient {
    /// Creates a client for the production API using the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder().build()?,
            host_url: crate::DEFAULT_HOST_URL.to_string(),
            api_key: api_key.into(),
            debug_http: false,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(config.api_key.clone())?
            .with_host_url(config.host_url.clone())
            .with_debug(config.debug_http)
            .with_timeout(config.timeout))
    }

    /// Points the client at another API origin, e.g. a mock server.
    pub fn with_host_url(mut self, host_url: impl Into<String>) -> Self {
        self.host_url = host_url.into();
        self
    }

    /// Enables or disables wire dumps of every request and response.
    pub fn with_debug(mut self, debug_http: bool) -> Self {
        self.debug_http = debug_http;
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    pub fn debug_http(&self) -> bool {
        self.debug_http
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Accessor for `/v1/incident_roles`.
    pub fn incident_roles(&self) -> Endpoint<'_, IncidentRoles> {
        Endpoint::new(self)
    }

    /// Accessor for `/v1/severities`.
    pub fn severities(&self) -> Endpoint<'_, Severities> {
        Endpoint::new(self)
    }

    /// Accessor for `/v1/custom_fields`.
    pub fn custom_fields(&self) -> Endpoint<'_, CustomFields> {
        Endpoint::new(self)
    }

    /// Accessor for `/v1/custom_field_options`.
    pub fn custom_field_options(&self) -> Endpoint<'_, CustomFieldOptions> {
        Endpoint::new(self)
    }

    /// Sends one authenticated request and returns the raw response.
    ///
    /// `path` is joined to the host URL with [`join_url`]. The only headers
    /// added are `Authorization` and, when a body is given,
    /// `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] on connection failure, timeout or
    /// when the response body cannot be read. The status code is not
    /// inspected here.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, ApiError> {
        let url = join_url(&self.host_url, path);
        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout);

        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let request = builder.build()?;
        if self.debug_http {
            dump_request(&request);
        }

        let method = request.method().clone();
        let response = self.http.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        if self.debug_http {
            dump_response(status, &headers, &body);
        }
        debug!(%method, path, status = status.as_u16(), "incident.io request completed");

        Ok(RawResponse { status, body })
    }

    /// `GET /v1/{kind}/{id}`, expecting `200 OK`.
    pub async fn get<R: Resource>(&self, id: &str) -> Result<R::Response, ApiError> {
        require_id(id, "get")?;

        let response = self
            .execute(Method::GET, &R::KIND.item_path(id)?, None)
            .await?;
        response.ensure_status(&[StatusCode::OK])?;
        response.json()
    }

    /// `POST /v1/{kind}`, expecting `201 Created`.
    pub async fn create<R: Resource>(&self, fields: &R::Fields) -> Result<R::Response, ApiError> {
        fields.validate()?;
        let body = serde_json::to_vec(fields).map_err(ApiError::Encode)?;

        let response = self
            .execute(Method::POST, &R::KIND.collection_path(), Some(body))
            .await?;
        response.ensure_status(&[StatusCode::CREATED])?;
        debug!(kind = R::KIND.segment, "created resource");
        response.json()
    }

    /// `PUT /v1/{kind}/{id}`, expecting `200 OK`.
    pub async fn update<R: Resource>(
        &self,
        id: &str,
        fields: &R::Fields,
    ) -> Result<R::Response, ApiError> {
        require_id(id, "update")?;
        fields.validate()?;
        let body = serde_json::to_vec(fields).map_err(ApiError::Encode)?;

        let response = self
            .execute(Method::PUT, &R::KIND.item_path(id)?, Some(body))
            .await?;
        response.ensure_status(&[StatusCode::OK])?;
        debug!(kind = R::KIND.segment, id, "updated resource");
        response.json()
    }

    /// `DELETE /v1/{kind}/{id}`, expecting the kind's delete statuses.
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        require_id(id, "delete")?;

        let response = self
            .execute(Method::DELETE, &R::KIND.item_path(id)?, None)
            .await?;
        if !R::KIND.accepts_delete(response.status) {
            return Err(response.error());
        }
        debug!(kind = R::KIND.segment, id, "deleted resource");
        Ok(())
    }
}

impl fmt::Debug for IncidentIoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncidentIoClient")
            .field("host_url", &self.host_url)
            .field("api_key", &"<redacted>")
            .field("debug_http", &self.debug_http)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn require_id(id: &str, operation: &'static str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::MissingId { operation });
    }
    Ok(())
}

fn render_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                "Bearer <redacted>"
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            format!("{}: {}\n", name, value)
        })
        .collect()
}

fn dump_request(request: &Request) {
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(String::from_utf8_lossy)
        .unwrap_or_default();

    info!(
        target: "incidentio_client::wire",
        "### REQUEST:\n{} {}\n{}\n{}\n### /REQUEST",
        request.method(),
        request.url(),
        render_headers(request.headers()),
        body
    );
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    info!(
        target: "incidentio_client::wire",
        "### RESPONSE:\n{}\n{}\n{}\n### /RESPONSE",
        status,
        render_headers(headers),
        String::from_utf8_lossy(body)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_slash_combinations() {
        let expected = "https://api.example.com/v1/x";
        assert_eq!(join_url("https://api.example.com/", "/v1/x"), expected);
        assert_eq!(join_url("https://api.example.com", "v1/x"), expected);
        assert_eq!(join_url("https://api.example.com/", "v1/x"), expected);
        assert_eq!(join_url("https://api.example.com", "/v1/x"), expected);
        assert_eq!(join_url("https://api.example.com//", "//v1/x"), expected);
    }

    #[test]
    fn test_join_url_keeps_base_path() {
        assert_eq!(
            join_url("http://127.0.0.1:1234/mock/", "/v1/severities"),
            "http://127.0.0.1:1234/mock/v1/severities"
        );
    }

    #[test]
    fn test_new_uses_production_defaults() {
        let client = IncidentIoClient::new("key").unwrap();
        assert_eq!(client.host_url(), "https://api.incident.io");
        assert!(!client.debug_http());
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_builders_override_defaults() {
        let client = IncidentIoClient::new("key")
            .unwrap()
            .with_host_url("http://localhost:9999")
            .with_debug(true)
            .with_timeout(Duration::from_secs(3));

        assert_eq!(client.host_url(), "http://localhost:9999");
        assert!(client.debug_http());
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            api_key: "key".to_string(),
            host_url: "http://127.0.0.1:4010".to_string(),
            debug_http: true,
            timeout: Duration::from_secs(30),
        };

        let client = IncidentIoClient::from_config(&config).unwrap();
        assert_eq!(client.host_url(), "http://127.0.0.1:4010");
        assert!(client.debug_http());
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let client = IncidentIoClient::new("super-secret").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_render_headers_redacts_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc".parse().unwrap());
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let rendered = render_headers(&headers);
        assert!(!rendered.contains("abc"));
        assert!(rendered.contains("content-type: application/json"));
    }

    #[test]
    fn test_ensure_status() {
        let ok = RawResponse {
            status: StatusCode::OK,
            body: Vec::new(),
        };
        assert!(ok.ensure_status(&[StatusCode::OK]).is_ok());

        let not_found = RawResponse {
            status: StatusCode::NOT_FOUND,
            body: Vec::new(),
        };
        let err = not_found.ensure_status(&[StatusCode::NO_CONTENT]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_with_html_body_is_decode_error() {
        let response = RawResponse {
            status: StatusCode::BAD_GATEWAY,
            body: b"<html>Bad Gateway</html>".to_vec(),
        };
        assert!(matches!(response.error(), ApiError::Decode(_)));
    }
}

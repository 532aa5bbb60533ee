// yadisk: Rust client for the Yandex.Disk REST API
// Copyright 2025 Yadisk Rust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Yandex.Disk REST client
//!
//! [`DiskClient`] holds the immutable client configuration and the HTTP
//! transport. Every API call goes through [`DiskClient::execute`], which adds
//! the standard headers and turns non-2xx answers into typed errors.

use crate::disk::creds::{StaticToken, TokenProvider};
use crate::disk::error::{DiskServerError, Error, NetworkError, ValidationErr};
use crate::disk::error_response::DiskErrorResponse;
use crate::disk::header_constants::*;
use crate::disk::http::{BaseUrl, build_href_url};
use crate::disk::multimap_ext::Multimap;
use crate::disk::types::RequestTarget;
use crate::disk::utils::default_user_agent;
use http::Method;
use reqwest::Client as ReqwestClient;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable holding the OAuth token, read by [`DiskClientBuilder::from_env`]
pub const ENV_TOKEN: &str = "YADISK_TOKEN";
/// Environment variable overriding the base URL, read by [`DiskClientBuilder::from_env`]
pub const ENV_BASE_URL: &str = "YADISK_BASE_URL";

/// Immutable configuration shared by all clones of a [`DiskClient`]
#[derive(Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    user_agent: String,
    token: Box<dyn TokenProvider>,
}

impl ClientConfig {
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Value sent in the `User-Agent` header
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Client for the Yandex.Disk REST API
///
/// Cloning is cheap: clones share the configuration and the connection pool.
///
/// # Example
///
/// ```no_run
/// use yadisk::disk::DiskClient;
/// use yadisk::disk::types::DiskApi;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DiskClient::builder()
///     .token("my-oauth-token")
///     .app_info("backup-tool", "1.2.0")
///     .build()?;
///
/// let stats = client.stats().build().send().await?;
/// println!("{:?}", stats.stats());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DiskClient {
    http_client: ReqwestClient,
    shared: Arc<ClientConfig>,
}

impl DiskClient {
    /// Creates a client for the default API address using a static OAuth token
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::builder().token(token).build()
    }

    /// Create a new builder for DiskClient
    pub fn builder() -> DiskClientBuilder {
        DiskClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.shared
    }

    /// Execute a Disk API request
    ///
    /// This is the low-level method used by all API operations, including the
    /// transfer requests that follow upload and download links.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `target` - Endpoint relative to the base URL, or an absolute link href
    /// * `headers` - Additional request headers
    /// * `query_params` - Query parameters
    /// * `body` - Optional request body
    pub(crate) async fn execute(
        &self,
        method: Method,
        target: &RequestTarget,
        headers: &Multimap,
        query_params: &Multimap,
        body: Option<reqwest::Body>,
    ) -> Result<reqwest::Response, Error> {
        let url = match target {
            RequestTarget::Endpoint(path) => self.shared.base_url.build_url(path, query_params)?,
            RequestTarget::Href(href) => build_href_url(href, query_params)?,
        };
        log::debug!("{method} {url}");

        let mut req = self
            .http_client
            .request(method.clone(), url.as_str())
            .header(USER_AGENT, self.shared.user_agent.as_str())
            .header(AUTHORIZATION, format!("OAuth {}", self.shared.token.fetch()))
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(NetworkError::ReqwestError)?;
        let status = response.status();
        log::debug!("{method} {url} -> {status}");

        if status.is_success() {
            return Ok(response);
        }
        Err(error_from_response(response).await)
    }
}

/// Decodes the error object of a failed call, falling back to the raw body
/// when the server did not answer with JSON.
async fn error_from_response(mut response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let headers = std::mem::take(response.headers_mut());
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return NetworkError::ReqwestError(e).into(),
    };

    match DiskErrorResponse::new_from_body(status, &body, headers) {
        Ok(err) => err.into(),
        Err(_) => {
            let text = String::from_utf8_lossy(&body).into_owned();
            log::warn!("server answered {status} with a non-JSON body");
            DiskServerError::HttpError(status, text).into()
        }
    }
}

/// Builder for [`DiskClient`]
#[derive(Debug, Default)]
pub struct DiskClientBuilder {
    base_url: Option<String>,
    token: Option<Box<dyn TokenProvider>>,
    user_agent: Option<String>,
    app_info: Option<(String, String)>,
    timeout: Option<Duration>,
    http_client: Option<ReqwestClient>,
}

impl DiskClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder configured from the environment
    ///
    /// Reads the OAuth token from `YADISK_TOKEN` and, when set, the base URL
    /// from `YADISK_BASE_URL`. A missing token is reported by [`build`](Self::build).
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            builder = builder.token(token);
        }
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(url);
        }
        builder
    }

    /// Set the API base URL
    ///
    /// Defaults to `https://cloud-api.yandex.net/v1/disk/`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a static OAuth token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Box::new(StaticToken::new(token)));
        self
    }

    /// Set the OAuth token provider
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token = Some(Box::new(provider));
        self
    }

    /// Replace the `User-Agent` header value entirely
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Append application name and version to the `User-Agent` header
    pub fn app_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app_info = Some((name.into(), version.into()));
        self
    }

    /// Set a timeout for every request, ignored when a custom HTTP client is set
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client
    ///
    /// Use this to configure custom timeouts, TLS settings, or proxies.
    pub fn http_client(mut self, client: ReqwestClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the DiskClient
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no token (or token provider) is set
    /// - the base URL is not a valid http(s) URL
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<DiskClient, Error> {
        let token = self.token.ok_or(ValidationErr::MissingToken)?;

        let base_url = match self.base_url {
            Some(url) => url.parse::<BaseUrl>()?,
            None => BaseUrl::default(),
        };

        let mut user_agent = self
            .user_agent
            .unwrap_or_else(|| default_user_agent().to_string());
        if let Some((name, version)) = self.app_info {
            user_agent.push_str(&format!(" {name}/{version}"));
        }
        if http::HeaderValue::from_str(&user_agent).is_err() {
            return Err(ValidationErr::InvalidHeaderValue { name: USER_AGENT }.into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = ReqwestClient::builder()
                    // Keep connections alive for reuse
                    .tcp_keepalive(Duration::from_secs(60))
                    .tcp_nodelay(true)
                    .pool_idle_timeout(Duration::from_secs(90));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(NetworkError::ReqwestError)?
            }
        };

        Ok(DiskClient {
            http_client,
            shared: Arc::new(ClientConfig {
                base_url,
                user_agent,
                token,
            }),
        })
    }
}


// Account
mod stats;

// Listing
mod list;
mod list_all;

pub use list_all::LIST_ALL_PAGE_SIZE;

// Transfer
mod download;
mod upload;
mod upload_from_url;

// Resource management
mod copy;
mod delete;
mod mkdir;
mod move_resource;

// Trash
mod trash;

// Operations
mod operations;

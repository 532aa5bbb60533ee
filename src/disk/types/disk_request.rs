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

//! Request types and traits for Yandex.Disk operations

use crate::disk::client::DiskClient;
use crate::disk::error::{Error, ValidationErr};
use crate::disk::multimap_ext::Multimap;
use typed_builder::TypedBuilder;

/// Where a request is sent to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestTarget {
    /// Path relative to the client's base URL, e.g. `resources/copy`
    Endpoint(String),
    /// Absolute URL received from the server in a link
    Href(String),
}

impl RequestTarget {
    pub fn endpoint(path: impl Into<String>) -> Self {
        RequestTarget::Endpoint(path.into())
    }

    pub fn href(href: impl Into<String>) -> Self {
        RequestTarget::Href(href.into())
    }
}

/// Request structure for Disk API operations
#[derive(Clone, Debug, TypedBuilder)]
pub struct DiskRequest {
    /// Client reference
    #[builder(!default)]
    pub client: DiskClient,
    /// HTTP method
    #[builder(!default)]
    pub method: http::Method,
    /// Endpoint or link the request goes to
    #[builder(!default)]
    pub target: RequestTarget,
    /// Query parameters
    #[builder(default)]
    pub query_params: Multimap,
    /// Additional request headers
    #[builder(default)]
    pub headers: Multimap,
}

impl DiskRequest {
    /// Execute the Disk API request
    ///
    /// # Errors
    ///
    /// Returns `Error` if the HTTP request fails or the server returns an error.
    pub(crate) async fn execute(&self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                &self.target,
                &self.headers,
                &self.query_params,
                None,
            )
            .await
    }
}

/// Convert builder to DiskRequest
pub trait ToDiskRequest {
    /// Convert this builder into a DiskRequest
    ///
    /// # Errors
    ///
    /// Returns `ValidationErr` if the request parameters are invalid.
    fn to_disk_request(self) -> Result<DiskRequest, ValidationErr>;
}

/// Execute Disk API operation
pub trait DiskApi: ToDiskRequest {
    /// Response type for this operation
    type DiskResponse: FromDiskResponse;

    /// Send the request and await the response
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails or the response cannot be parsed.
    fn send(self) -> impl std::future::Future<Output = Result<Self::DiskResponse, Error>> + Send
    where
        Self: Sized + Send,
    {
        async {
            let request: DiskRequest = self.to_disk_request()?;
            let response: Result<reqwest::Response, Error> = request.execute().await;
            Self::DiskResponse::from_disk_response(request, response).await
        }
    }
}

/// Parse response from Disk API
#[async_trait::async_trait]
pub trait FromDiskResponse: Sized {
    /// Parse the response from a DiskRequest
    ///
    /// # Errors
    ///
    /// Returns `Error` if the response cannot be parsed or contains an error.
    async fn from_disk_response(
        request: DiskRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

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

//! Trait composition for Disk API responses
//!
//! Every response keeps the request that produced it together with the raw
//! headers and body returned by the server. Typed data (links, statistics,
//! listings) is decoded once, while the response is constructed, so that a
//! successful `send()` always carries a usable value.

use crate::disk::error::{Error, NetworkError, ValidationErr};
use crate::disk::error_response::DiskErrorResponse;
use crate::disk::types::{DiskRequest, Link};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

#[macro_export]
/// Implements the `FromDiskResponse` trait for responses carrying a [`Link`].
///
/// The response struct must have `request`, `headers`, `body` and `link` fields.
macro_rules! impl_from_disk_link_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::disk::types::FromDiskResponse for $ty {
                async fn from_disk_response(
                    request: $crate::disk::types::DiskRequest,
                    response: Result<reqwest::Response, $crate::disk::error::Error>,
                ) -> Result<Self, $crate::disk::error::Error> {
                    let mut resp = response?;
                    let headers = std::mem::take(resp.headers_mut());
                    let body = resp
                        .bytes()
                        .await
                        .map_err($crate::disk::error::NetworkError::ReqwestError)?;
                    let link = $crate::disk::types::Link::from_body(&body)?;
                    Ok(Self {
                        request,
                        headers,
                        body,
                        link,
                    })
                }
            }

            impl $crate::disk::response_traits::HasLink for $ty {
                fn link(&self) -> &$crate::disk::types::Link {
                    &self.link
                }

                fn into_link(self) -> $crate::disk::types::Link {
                    self.link
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromDiskResponse` trait for endpoints that either finish
/// synchronously (`204 No Content`) or start an operation (`202 Accepted`).
///
/// The response struct must have `request`, `headers`, `body` and `link: Option<Link>` fields.
macro_rules! impl_from_disk_optional_link_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::disk::types::FromDiskResponse for $ty {
                async fn from_disk_response(
                    request: $crate::disk::types::DiskRequest,
                    response: Result<reqwest::Response, $crate::disk::error::Error>,
                ) -> Result<Self, $crate::disk::error::Error> {
                    let (headers, body, link) =
                        $crate::disk::response_traits::read_optional_link(response?).await?;
                    Ok(Self {
                        request,
                        headers,
                        body,
                        link,
                    })
                }
            }

            impl $crate::disk::response_traits::HasOptionalLink for $ty {
                fn link(&self) -> Option<&$crate::disk::types::Link> {
                    self.link.as_ref()
                }

                fn into_link(self) -> Option<$crate::disk::types::Link> {
                    self.link
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasDiskFields` trait for the specified types.
macro_rules! impl_has_disk_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::disk::response_traits::HasDiskFields for $ty {
                /// The request that was sent to the Disk API.
                #[inline]
                fn request(&self) -> &$crate::disk::types::DiskRequest {
                    &self.request
                }

                /// HTTP headers returned by the server, containing metadata such as `Content-Type`, etc.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The response body returned by the server, as raw bytes.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Base trait providing access to common response fields
///
/// All Disk response types implement this trait.
pub trait HasDiskFields {
    /// The request that was sent to the Disk API.
    fn request(&self) -> &DiskRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server, as raw bytes.
    fn body(&self) -> &Bytes;
}

/// Responses that always carry a link
pub trait HasLink {
    /// Link to the resulting resource or to the started operation
    fn link(&self) -> &Link;
    fn into_link(self) -> Link;
}

/// Responses that carry a link only when the server started an asynchronous operation
pub trait HasOptionalLink {
    /// Operation link, `None` when the request completed synchronously
    fn link(&self) -> Option<&Link>;
    fn into_link(self) -> Option<Link>;
}

/// Reads a response of an endpoint that answers `204` or `202` + link.
///
/// Any other success status is reported as the error the body describes, or
/// as [`ValidationErr::UnexpectedStatus`] when the body is not an error object.
#[doc(hidden)]
pub async fn read_optional_link(
    mut resp: reqwest::Response,
) -> Result<(HeaderMap, Bytes, Option<Link>), Error> {
    let status = resp.status();
    let headers = std::mem::take(resp.headers_mut());
    let body = resp.bytes().await.map_err(NetworkError::ReqwestError)?;

    match status {
        StatusCode::NO_CONTENT => Ok((headers, body, None)),
        StatusCode::ACCEPTED => {
            let link = Link::from_body(&body)?;
            Ok((headers, body, Some(link)))
        }
        other => {
            log::warn!("unexpected status {other} where 202 or 204 was expected");
            match DiskErrorResponse::new_from_body(other.as_u16(), &body, headers) {
                Ok(err) if !err.error().is_empty() => Err(err.into()),
                _ => Err(ValidationErr::UnexpectedStatus {
                    expected: "202 Accepted or 204 No Content",
                    got: other.as_u16(),
                }
                .into()),
            }
        }
    }
}

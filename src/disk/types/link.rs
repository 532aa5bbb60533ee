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

//! Links returned by mutating and transfer calls

use crate::disk::error::ValidationErr;
use http::Method;
use serde::Deserialize;
use url::Url;

/// Path segment that marks a link as an asynchronous operation
const OPERATIONS_SEGMENT: &str = "operations";

/// Link object exactly as sent by the server
#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    pub href: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub templated: bool,
}

/// What a [`Link`] points to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// An existing resource, or a transfer URL for upload/download
    Resource,
    /// A pending asynchronous operation with the given id
    Operation(String),
}

/// A decoded, non-templated link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    method: Method,
    target: LinkTarget,
}

impl Link {
    /// Decodes a link from a JSON response body.
    pub fn from_body(body: &[u8]) -> Result<Link, ValidationErr> {
        let raw: RawLink = serde_json::from_slice(body)?;
        Link::try_from(raw)
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// HTTP method to use when following the link
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &LinkTarget {
        &self.target
    }

    pub fn is_operation(&self) -> bool {
        matches!(self.target, LinkTarget::Operation(_))
    }

    /// Operation id, `None` if the link does not point to an operation
    pub fn operation(&self) -> Option<&str> {
        match &self.target {
            LinkTarget::Operation(id) => Some(id.as_str()),
            LinkTarget::Resource => None,
        }
    }
}

impl TryFrom<RawLink> for Link {
    type Error = ValidationErr;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        if raw.templated {
            return Err(ValidationErr::TemplatedLink { href: raw.href });
        }
        let url = Url::parse(&raw.href).map_err(|source| ValidationErr::InvalidLink {
            href: raw.href.clone(),
            source,
        })?;
        let method = if raw.method.is_empty() {
            Method::GET
        } else {
            Method::from_bytes(raw.method.to_ascii_uppercase().as_bytes())
                .map_err(|_| ValidationErr::InvalidMethod(raw.method.clone()))?
        };

        Ok(Link {
            target: classify(&url),
            href: raw.href,
            method,
        })
    }
}

/// A link is an operation when its path has an `operations` segment followed
/// by at least one more segment; the last segment is the operation id.
fn classify(url: &Url) -> LinkTarget {
    let Some(segments) = url.path_segments() else {
        return LinkTarget::Resource;
    };
    let segments: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
    let Some(pos) = segments.iter().position(|s| *s == OPERATIONS_SEGMENT) else {
        return LinkTarget::Resource;
    };
    match segments.last() {
        Some(id) if pos + 1 < segments.len() => LinkTarget::Operation((*id).to_string()),
        _ => LinkTarget::Resource,
    }
}

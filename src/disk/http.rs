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

//! HTTP URL definitions

use crate::disk::error::ValidationErr;
use crate::disk::multimap_ext::{Multimap, MultimapExt};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Default Yandex.Disk REST API address
pub const DEFAULT_BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk/";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents the base URL all endpoint paths are resolved against
pub struct BaseUrl {
    url: Url,
}

impl Default for BaseUrl {
    fn default() -> Self {
        DEFAULT_BASE_URL
            .parse()
            .expect("default base URL is valid")
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// A trailing slash is appended when missing, so that endpoint paths are
    /// appended to the base path instead of replacing its last segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use yadisk::disk::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://cloud-api.yandex.net/v1/disk".parse().unwrap();
    /// assert_eq!(base_url.as_str(), "https://cloud-api.yandex.net/v1/disk/");
    /// // Local mock servers are fine too
    /// let base_url: BaseUrl = "http://127.0.0.1:8080/v1/disk/".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let mut url = Url::parse(s).map_err(|e| ValidationErr::InvalidBaseUrl(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(ValidationErr::InvalidBaseUrl(
                "valid host must be provided".into(),
            ));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "base URL must not carry a query or fragment".into(),
            ));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(BaseUrl { url })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Builds the full URL of an API endpoint relative to this base URL.
    ///
    /// An empty endpoint addresses the base URL itself (account statistics).
    pub fn build_url(&self, endpoint: &str, query: &Multimap) -> Result<Url, ValidationErr> {
        let mut url = self
            .url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ValidationErr::InvalidBaseUrl(e.to_string()))?;
        set_query(&mut url, query);
        Ok(url)
    }
}

/// Builds the URL for a server-provided link, keeping any query it already has.
pub fn build_href_url(href: &str, query: &Multimap) -> Result<Url, ValidationErr> {
    let mut url = Url::parse(href).map_err(|source| ValidationErr::InvalidLink {
        href: href.to_string(),
        source,
    })?;
    set_query(&mut url, query);
    Ok(url)
}

fn set_query(url: &mut Url, query: &Multimap) {
    if query.is_empty() {
        return;
    }
    let extra = query.to_query_string();
    let merged = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{extra}"),
        _ => extra,
    };
    url.set_query(Some(&merged));
}

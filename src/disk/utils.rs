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

//! Various utility and helper functions

use crate::disk::error::ValidationErr;
use once_cell::sync::Lazy;
use std::borrow::Cow;

static DEFAULT_USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "yadisk-rs/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

/// Percent-encodes a query key or value
pub fn url_encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

/// Rejects an empty resource path.
///
/// An empty `path` on the trash endpoint empties the whole trash.
pub fn check_path(path: &str) -> Result<(), ValidationErr> {
    if path.is_empty() {
        return Err(ValidationErr::EmptyPath);
    }
    Ok(())
}

/// Default `User-Agent` header value
pub fn default_user_agent() -> &'static str {
    &DEFAULT_USER_AGENT
}

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

//! OAuth token providers

use std::fmt::Debug;

/// Provider trait to fetch the OAuth token used in the `Authorization` header
///
/// Implementations must be `Send + Sync` so that a single client can be shared
/// across tasks.
pub trait TokenProvider: Send + Sync + Debug {
    fn fetch(&self) -> String;
}

#[derive(Clone)]
/// Static token provider
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Returns a static provider for the given OAuth token
    ///
    /// # Examples
    ///
    /// ```
    /// use yadisk::disk::creds::{StaticToken, TokenProvider};
    /// let provider = StaticToken::new("AQAAAAA-example");
    /// assert_eq!(provider.fetch(), "AQAAAAA-example");
    /// ```
    pub fn new(token: impl Into<String>) -> StaticToken {
        StaticToken {
            token: token.into(),
        }
    }
}

impl Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl TokenProvider for StaticToken {
    fn fetch(&self) -> String {
        self.token.clone()
    }
}

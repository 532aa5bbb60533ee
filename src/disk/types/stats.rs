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

use serde::Deserialize;
use std::collections::HashMap;

/// Disk account statistics
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stats {
    /// Total disk space in bytes
    #[serde(default)]
    pub total_space: u64,
    /// Used space in bytes
    #[serde(default)]
    pub used_space: u64,
    /// Space occupied by the trash in bytes
    #[serde(default)]
    pub trash_size: u64,
    /// System folders, e.g. `"downloads" => "disk:/Downloads/"`
    #[serde(default)]
    pub system_folders: HashMap<String, String>,
}

impl Stats {
    /// Free space in bytes
    pub fn free_space(&self) -> u64 {
        self.total_space.saturating_sub(self.used_space)
    }
}

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

//! Resource model: files, directories and directory pages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Kind of a resource stored on the Disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Dir,
    File,
    /// Any type string this client does not know about
    Unknown,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Dir => "dir",
            ResourceType::File => "file",
            ResourceType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    /// `"dir"` and `"file"` map to their variants, every other string to
    /// [`ResourceType::Unknown`]. Non-string values are rejected.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "dir" => ResourceType::Dir,
            "file" => ResourceType::File,
            _ => ResourceType::Unknown,
        })
    }
}

/// A file or directory on the Disk
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    /// Type of the resource
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Name of the file or directory
    #[serde(default)]
    pub name: String,
    /// Full path, e.g. `disk:/Documents/report.pdf`
    #[serde(default)]
    pub path: String,
    /// Creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Last modification time
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default)]
    md5: Option<String>,
    #[serde(default)]
    size: u64,
    #[serde(default, rename = "_embedded")]
    embedded: Option<ResourceList>,
}

impl Resource {
    pub fn is_dir(&self) -> bool {
        self.resource_type == ResourceType::Dir
    }

    pub fn is_file(&self) -> bool {
        self.resource_type == ResourceType::File
    }

    /// MD5 hash of the content; `None` for anything but files
    pub fn hash(&self) -> Option<&str> {
        if self.is_file() {
            self.md5.as_deref()
        } else {
            None
        }
    }

    /// Size in bytes; always 0 for anything but files
    pub fn size(&self) -> u64 {
        if self.is_file() { self.size } else { 0 }
    }

    /// Directory listing embedded in the resource, present for directories
    /// when their children were requested
    pub fn children(&self) -> Option<&ResourceList> {
        if self.is_dir() {
            self.embedded.as_ref()
        } else {
            None
        }
    }

    /// Takes the embedded directory listing out of the resource
    pub fn take_children(&mut self) -> Option<ResourceList> {
        if self.is_dir() {
            self.embedded.take()
        } else {
            None
        }
    }
}

/// One page of directory contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceList {
    /// Resources of the page, in the requested sort order
    #[serde(default)]
    pub items: Vec<Resource>,
    /// Maximum number of items requested for the page
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first item of the page
    #[serde(default)]
    pub offset: u64,
    /// Total number of children of the directory, when reported
    #[serde(default)]
    pub total: Option<u64>,
    /// Path of the listed directory, when reported
    #[serde(default)]
    pub path: Option<String>,
    /// Sort key the page was produced with, when reported
    #[serde(default)]
    pub sort: Option<String>,
}

impl ResourceList {
    /// Creates an accumulated list holding all given items
    pub(crate) fn accumulated(items: Vec<Resource>) -> Self {
        ResourceList {
            limit: items.len() as u64,
            offset: 0,
            total: Some(items.len() as u64),
            items,
            path: None,
            sort: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

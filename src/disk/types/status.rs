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

use crate::disk::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

/// Status of an asynchronous operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationStatus {
    Failure,
    InProgress,
    Success,
}

impl OperationStatus {
    /// Returns `true` once the operation will not change its status anymore
    pub fn is_finished(&self) -> bool {
        !matches!(self, OperationStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Failure => "failure",
            OperationStatus::InProgress => "in-progress",
            OperationStatus::Success => "success",
        }
    }
}

impl FromStr for OperationStatus {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(OperationStatus::Success),
            "failure" => Ok(OperationStatus::Failure),
            "in-progress" => Ok(OperationStatus::InProgress),
            _ => Err(ValidationErr::UnknownOperationStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

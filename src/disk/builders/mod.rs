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

//! Argument builders for Disk API operations

// Account
mod get_stats;

pub use get_stats::{GetStats, GetStatsBldr};

// Listing
mod list_resources;

pub use list_resources::{
    DEFAULT_LIST_LIMIT, DEFAULT_LIST_SORT, ListResources, ListResourcesBldr,
};

// Transfer
mod get_download_link;
mod get_upload_link;
mod upload_from_url;

pub use get_download_link::{GetDownloadLink, GetDownloadLinkBldr};
pub use get_upload_link::{GetUploadLink, GetUploadLinkBldr};
pub use upload_from_url::{UploadFromUrl, UploadFromUrlBldr};

// Resource management
mod copy_resource;
mod create_dir;
mod delete_resource;
mod move_resource;

pub use copy_resource::{CopyResource, CopyResourceBldr};
pub use create_dir::{CreateDir, CreateDirBldr};
pub use delete_resource::{DeleteResource, DeleteResourceBldr};
pub use move_resource::{MoveResource, MoveResourceBldr};

// Trash
mod clear_trash;
mod delete_from_trash;
mod restore_from_trash;

pub use clear_trash::{ClearTrash, ClearTrashBldr};
pub use delete_from_trash::{DeleteFromTrash, DeleteFromTrashBldr};
pub use restore_from_trash::{RestoreFromTrash, RestoreFromTrashBldr};

// Operations
mod get_operation_status;

pub use get_operation_status::{GetOperationStatus, GetOperationStatusBldr};

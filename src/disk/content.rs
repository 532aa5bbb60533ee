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

use bytes::Bytes;
use futures_util::stream::Stream;
use std::path::{Path, PathBuf};
use std::pin::Pin;

#[cfg(test)]
use quickcheck::Arbitrary;

type IoResult<T> = core::result::Result<T, std::io::Error>;

type ByteStream = Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send + Sync>>;

// region: Size

#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum Size {
    Known(u64),
    #[default]
    Unknown,
}

impl Size {
    /// Returns `true` if the size is known and `false` otherwise.
    pub fn is_known(&self) -> bool {
        matches!(self, Size::Known(_))
    }

    /// Returns the size if known, otherwise returns `None`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Size::Known(v) => Some(*v),
            Size::Unknown => None,
        }
    }
}

impl From<Option<u64>> for Size {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(v) => Size::Known(v),
            None => Size::Unknown,
        }
    }
}

impl From<u64> for Size {
    fn from(value: u64) -> Self {
        Size::Known(value)
    }
}

#[cfg(test)]
impl Arbitrary for Size {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            Size::Known(u64::arbitrary(g))
        } else {
            Size::Unknown
        }
    }
}
// endregion: Size

/// Content to upload to the Disk.
///
/// Can be constructed from a stream of `Bytes`, a local file path, or
/// in-memory data.
pub struct UploadContent(UploadContentInner);

enum UploadContentInner {
    Stream(ByteStream, Size),
    FilePath(PathBuf),
    Bytes(Bytes),
}

impl From<Bytes> for UploadContent {
    fn from(value: Bytes) -> Self {
        UploadContent(UploadContentInner::Bytes(value))
    }
}

impl From<String> for UploadContent {
    fn from(value: String) -> Self {
        UploadContent(UploadContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<Vec<u8>> for UploadContent {
    fn from(value: Vec<u8>) -> Self {
        UploadContent(UploadContentInner::Bytes(Bytes::from(value)))
    }
}

impl From<&'static [u8]> for UploadContent {
    fn from(value: &'static [u8]) -> Self {
        UploadContent(UploadContentInner::Bytes(Bytes::from_static(value)))
    }
}

impl From<&'static str> for UploadContent {
    fn from(value: &'static str) -> Self {
        UploadContent(UploadContentInner::Bytes(Bytes::from_static(
            value.as_bytes(),
        )))
    }
}

impl From<&Path> for UploadContent {
    fn from(value: &Path) -> Self {
        UploadContent(UploadContentInner::FilePath(value.to_path_buf()))
    }
}

impl From<PathBuf> for UploadContent {
    fn from(value: PathBuf) -> Self {
        UploadContent(UploadContentInner::FilePath(value))
    }
}

impl Default for UploadContent {
    fn default() -> Self {
        UploadContent(UploadContentInner::Bytes(Bytes::new()))
    }
}

impl std::fmt::Debug for UploadContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            UploadContentInner::Stream(_, size) => {
                f.debug_tuple("UploadContent::Stream").field(size).finish()
            }
            UploadContentInner::FilePath(p) => {
                f.debug_tuple("UploadContent::FilePath").field(p).finish()
            }
            UploadContentInner::Bytes(b) => f
                .debug_tuple("UploadContent::Bytes")
                .field(&b.len())
                .finish(),
        }
    }
}

impl UploadContent {
    /// Create a new `UploadContent` from a stream of `Bytes`.
    pub fn new_from_stream(
        r: impl Stream<Item = IoResult<Bytes>> + Send + Sync + 'static,
        size: impl Into<Size>,
    ) -> Self {
        UploadContent(UploadContentInner::Stream(Box::pin(r), size.into()))
    }

    /// Converts the content into a request body.
    ///
    /// Files are opened here, so a missing local file fails before any
    /// request is made. Nothing is buffered in memory besides the in-memory
    /// variants themselves.
    pub async fn into_body(self) -> IoResult<(reqwest::Body, Size)> {
        match self.0 {
            UploadContentInner::Stream(r, size) => Ok((reqwest::Body::wrap_stream(r), size)),

            UploadContentInner::FilePath(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let size = file.metadata().await?.len();
                Ok((reqwest::Body::from(file), Size::Known(size)))
            }

            UploadContentInner::Bytes(b) => {
                let size = b.len() as u64;
                Ok((reqwest::Body::from(b), Size::Known(size)))
            }
        }
    }
}

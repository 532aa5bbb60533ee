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

//! Client methods for downloading files

use crate::disk::builders::{GetDownloadLink, GetDownloadLinkBldr};
use crate::disk::client::DiskClient;
use crate::disk::error::{Error, NetworkError};
use crate::disk::multimap_ext::Multimap;
use crate::disk::response_traits::HasLink;
use crate::disk::types::{DiskApi, RequestTarget};
use futures_util::StreamExt;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

impl DiskClient {
    /// Requests a link to download the file at `path`
    pub fn get_download_link<S: Into<String>>(&self, path: S) -> GetDownloadLinkBldr {
        GetDownloadLink::builder().client(self.clone()).path(path)
    }

    /// Downloads the file at `path` into `writer`
    ///
    /// Requests a download link, then follows it and streams the body into
    /// the writer chunk by chunk. Returns the number of bytes written.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: yadisk::disk::DiskClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let mut buf: Vec<u8> = Vec::new();
    /// let n = client.download("/Documents/report.pdf", &mut buf).await?;
    /// assert_eq!(n as usize, buf.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download<S, W>(&self, path: S, writer: &mut W) -> Result<u64, Error>
    where
        S: Into<String>,
        W: AsyncWrite + Unpin + ?Sized,
    {
        let link = self.get_download_link(path).build().send().await?.into_link();

        let resp = self
            .execute(
                link.method().clone(),
                &RequestTarget::href(link.href()),
                &Multimap::new(),
                &Multimap::new(),
                None,
            )
            .await?;

        let mut stream = resp.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(NetworkError::ReqwestError)?;
            writer
                .write_all(&chunk)
                .await
                .map_err(NetworkError::IoError)?;
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(NetworkError::IoError)?;

        log::debug!("downloaded {written} bytes");
        Ok(written)
    }

    /// Downloads the file at `path` into a local file
    ///
    /// The content is first written to a temporary file next to `file_path`,
    /// which is renamed once the download completes. An existing file is
    /// replaced. Missing parent directories are created.
    pub async fn download_to_file<S: Into<String>>(
        &self,
        path: S,
        file_path: &Path,
    ) -> Result<u64, Error> {
        if file_path.is_dir() {
            return Err(NetworkError::IoError(std::io::Error::other("path is a directory")).into());
        }
        let parent_dir = match file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };
        if !parent_dir.is_dir() {
            tokio::fs::create_dir_all(&parent_dir)
                .await
                .map_err(NetworkError::IoError)?;
        }
        let file_name = file_path.file_name().ok_or_else(|| {
            NetworkError::IoError(std::io::Error::other(
                "could not get filename-component of path",
            ))
        })?;
        let mut tmp_file_name = file_name.to_os_string();
        tmp_file_name.push(format!("_{}", Uuid::new_v4().simple()));
        let tmp_file_path = parent_dir.join(tmp_file_name);

        let mut fp = tokio::fs::File::create(&tmp_file_path)
            .await
            .map_err(NetworkError::IoError)?;

        let written = match self.download(path, &mut fp).await {
            Ok(n) => n,
            Err(e) => {
                drop(fp);
                let _ = tokio::fs::remove_file(&tmp_file_path).await;
                return Err(e);
            }
        };
        drop(fp);

        if let Err(e) = tokio::fs::rename(&tmp_file_path, file_path).await {
            let _ = tokio::fs::remove_file(&tmp_file_path).await;
            return Err(NetworkError::IoError(e).into());
        }
        Ok(written)
    }
}

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

mod common;

use crate::common::create_client_from_env;
use clap::Parser;
use std::path::PathBuf;

/// Uploads a local file to Yandex.Disk and downloads it back
#[derive(Parser)]
struct Cli {
    /// Local file to upload
    file: PathBuf,
    /// Destination path on the disk
    remote: String,
    /// Where to store the downloaded copy
    #[arg(long, default_value = "/tmp/yadisk-downloads/copy")]
    download_to: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let args = Cli::parse();
    let client = create_client_from_env()?;

    if !args.file.is_file() {
        log::error!("File '{}' does not exist.", args.file.display());
        return Ok(());
    }

    client.upload_file(&args.remote, &args.file).await?;
    log::info!(
        "file '{}' is successfully uploaded to '{}'.",
        args.file.display(),
        args.remote
    );

    let written = client
        .download_to_file(&args.remote, &args.download_to)
        .await?;
    log::info!(
        "'{}' is successfully downloaded to '{}' ({written} bytes).",
        args.remote,
        args.download_to.display()
    );
    Ok(())
}

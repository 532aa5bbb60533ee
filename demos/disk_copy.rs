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
use std::time::Duration;
use yadisk::disk::HasLink;
use yadisk::disk::types::{DiskApi, LinkTarget};

/// Copies a file or directory on Yandex.Disk and waits for the copy to finish
#[derive(Parser)]
struct Cli {
    /// Source path
    from: String,
    /// Destination path
    to: String,
    /// Keep an existing destination instead of overwriting it
    #[arg(long)]
    no_overwrite: bool,
    /// Seconds to wait for an asynchronous copy
    #[arg(long, default_value_t = 120)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Cli::parse();
    let client = create_client_from_env()?;

    let link = client
        .copy(&args.from, &args.to)
        .overwrite(!args.no_overwrite)
        .build()
        .send()
        .await?
        .into_link();

    match link.target() {
        LinkTarget::Resource => println!("copied to {}", link.href()),
        LinkTarget::Operation(id) => {
            println!("copy runs as operation {id}, waiting...");
            let status = client
                .wait_for_operation(
                    &link,
                    Duration::from_secs(1),
                    Duration::from_secs(args.timeout),
                )
                .await?;
            println!("operation {id} finished: {status}");
        }
    }
    Ok(())
}

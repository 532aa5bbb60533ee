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
use yadisk::disk::types::DiskApi;

/// Lists a directory on Yandex.Disk
#[derive(Parser)]
struct Cli {
    /// Directory to list
    #[arg(default_value = "/")]
    path: String,
    /// Only print the first page, with the given size
    #[arg(long)]
    page: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to see every request
    let args = Cli::parse();
    let client = create_client_from_env()?;

    let stats = client.stats().build().send().await?.into_stats();
    println!(
        "used {} of {} bytes ({} free, {} in trash)",
        stats.used_space,
        stats.total_space,
        stats.free_space(),
        stats.trash_size
    );

    let list = match args.page {
        Some(limit) => client
            .list(&args.path)
            .limit(limit)
            .build()
            .send()
            .await?
            .into_list(),
        None => client.list_all(&args.path).await?,
    };

    for item in &list.items {
        let modified = item
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{:<4} {:>12} {modified:>16}  {}",
            item.resource_type.as_str(),
            item.size(),
            item.name
        );
    }
    log::info!("{} entries in '{}'", list.len(), args.path);
    Ok(())
}

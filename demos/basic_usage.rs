// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the config center.
//!
//! This example demonstrates:
//! - Creating a config center over an in-memory store
//! - Storing, reading, listing and removing documents
//! - Telling "not configured" apart from other failures
//! - Environment isolation between `prod` and `production`
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use configcenter::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Log filtering follows RUST_LOG; nothing is printed when it is unset
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Config Center: Basic Usage ===\n");

    let store = Arc::new(MemoryStore::new());
    let center = ConfigCenter::new(Arc::clone(&store), "test");

    println!("Environment: {}", center.environment());
    println!("Key prefix:  {}\n", center.environment_prefix());

    // Example 1: Store and read back a document
    println!("--- Example 1: Round Trip ---");
    center.set_config("xx125", "a=b\nc=1\n").await?;
    let content = center.get_config("xx125").await?;
    println!("✓ xx125 stored at {}", center.config_key("xx125")?);
    println!("  content: {:?}", content);

    // Example 2: List everything in the environment
    println!("\n--- Example 2: Listing ---");
    center.set_config("database", "host=localhost\nport=5432\n").await?;
    for (name, content) in center.list_config().await? {
        println!("  {} => {:?}", name, content);
    }

    // Example 3: Missing documents
    println!("\n--- Example 3: Missing Documents ---");
    match center.get_config("missing").await {
        Ok(_) => println!("✗ unexpected document"),
        Err(e) if e.is_not_found() => println!("✓ not configured: {}", e),
        Err(e) => return Err(e),
    }

    // Removing something that isn't there is fine
    center.remove_config("missing").await?;
    println!("✓ removing a missing document succeeds");

    // Example 4: Environments sharing a string prefix stay apart
    println!("\n--- Example 4: Isolation ---");
    let prod = ConfigCenter::new(Arc::clone(&store), "prod");
    let production = ConfigCenter::new(Arc::clone(&store), "production");
    prod.set_config("db", "prod").await?;
    production.set_config("db", "production").await?;
    println!("  prod sees {} document(s)", prod.list_config().await?.len());
    println!(
        "  production sees {} document(s)",
        production.list_config().await?.len()
    );

    // Example 5: Invalid names are rejected
    println!("\n--- Example 5: Name Validation ---");
    if let Err(e) = center.set_config("nested/name", "x").await {
        println!("✓ {}", e);
    }

    center.remove_config("xx125").await?;
    println!("\n=== Done ===");
    Ok(())
}

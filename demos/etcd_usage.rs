// SPDX-License-Identifier: MIT OR Apache-2.0

//! etcd example for the config center.
//!
//! This example demonstrates:
//! - Connecting an etcd store
//! - Tuning per-instance options with the builder
//! - Handling timeouts and transport errors separately from missing documents
//!
//! To run this example:
//! ```bash
//! # Start etcd
//! docker run -d -p 2379:2379 quay.io/coreos/etcd:v3.5.0 \
//!   etcd --advertise-client-urls http://0.0.0.0:2379 \
//!        --listen-client-urls http://0.0.0.0:2379
//!
//! RUST_LOG=debug cargo run --example etcd_usage --features etcd -- localhost:2379 test
//! ```

use configcenter::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let endpoint = args.next().unwrap_or_else(|| "localhost:2379".to_string());
    let environment = args.next().unwrap_or_default();

    println!("=== Config Center: etcd ===\n");

    let store = EtcdStore::connect(vec![endpoint.as_str()], None).await?;
    let center = ConfigCenter::builder(Arc::new(store))
        .environment(environment)
        .timeout(Duration::from_secs(5))
        .build()?;

    println!("Environment: {}", center.environment());

    center.set_config("xx125", "a=b\nc=1\n").await?;
    println!("✓ stored xx125");

    match center.get_config("xx125").await {
        Ok(content) => println!("✓ read xx125: {:?}", content),
        Err(e) if e.is_not_found() => println!("✗ xx125 vanished"),
        Err(e) if e.is_timeout() => println!("✗ etcd too slow: {}", e),
        Err(e) => return Err(e),
    }

    let configs = center.list_config().await?;
    println!("✓ {} document(s) in environment", configs.len());

    center.remove_config("xx125").await?;
    println!("✓ removed xx125");

    Ok(())
}

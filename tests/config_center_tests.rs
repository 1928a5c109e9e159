// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the config center against in-process stores.

mod common;

use common::stores::{FailingStore, SlowStore};
use configcenter::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const CFG_CONTENT: &str = "\na=b\nc=1\n";

fn shared_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

#[tokio::test]
async fn test_full_flow() {
    let center = ConfigCenter::new(shared_store(), "test");
    let key = "xx125";

    center.set_config(key, CFG_CONTENT).await.unwrap();
    assert_eq!(center.get_config(key).await.unwrap(), CFG_CONTENT);

    let configs = center.list_config().await.unwrap();
    assert_eq!(configs.get(key).map(String::as_str), Some(CFG_CONTENT));

    center.remove_config(key).await.unwrap();
    let err = center.get_config(key).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_never_written_is_not_found() {
    let center = ConfigCenter::new(shared_store(), "fresh");
    let err = center.get_config("nothing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_remove_never_written_succeeds() {
    let center = ConfigCenter::new(shared_store(), "fresh");
    center.remove_config("nothing").await.unwrap();
    center.remove_config("nothing").await.unwrap();
}

#[tokio::test]
async fn test_set_overwrites_last_write_wins() {
    let center = ConfigCenter::new(shared_store(), "test");
    center.set_config("app", "v=1").await.unwrap();
    center.set_config("app", "v=2").await.unwrap();
    center.set_config("app", "v=2").await.unwrap();
    assert_eq!(center.get_config("app").await.unwrap(), "v=2");
    assert_eq!(center.list_config().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_contains_all_documents() {
    let center = ConfigCenter::new(shared_store(), "test");
    center.set_config("n1", "c1").await.unwrap();
    center.set_config("n2", "c2").await.unwrap();

    let expected: HashMap<String, String> = [("n1", "c1"), ("n2", "c2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(center.list_config().await.unwrap(), expected);
}

#[tokio::test]
async fn test_list_empty_environment_is_not_an_error() {
    let center = ConfigCenter::new(shared_store(), "nobody-home");
    let configs = center.list_config().await.unwrap();
    assert!(configs.is_empty());
}

#[tokio::test]
async fn test_blank_environment_matches_sentinel() {
    let store = shared_store();
    let blank = ConfigCenter::new(Arc::clone(&store), "  ");
    let sentinel = ConfigCenter::new(Arc::clone(&store), "_");

    assert_eq!(blank.config_key("a").unwrap(), sentinel.config_key("a").unwrap());

    blank.set_config("a", "from blank").await.unwrap();
    assert_eq!(sentinel.get_config("a").await.unwrap(), "from blank");

    sentinel.set_config("b", "from sentinel").await.unwrap();
    assert_eq!(blank.list_config().await.unwrap().len(), 2);

    blank.remove_config("b").await.unwrap();
    assert!(sentinel.get_config("b").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_prefix_sharing_environments_are_isolated() {
    let store = shared_store();
    let prod = ConfigCenter::new(Arc::clone(&store), "prod");
    let production = ConfigCenter::new(Arc::clone(&store), "production");

    prod.set_config("db", "prod-db").await.unwrap();
    production.set_config("db", "production-db").await.unwrap();
    production.set_config("cache", "production-cache").await.unwrap();

    let prod_configs = prod.list_config().await.unwrap();
    assert_eq!(prod_configs.len(), 1);
    assert_eq!(prod_configs["db"], "prod-db");

    let production_configs = production.list_config().await.unwrap();
    assert_eq!(production_configs.len(), 2);
    assert_eq!(production_configs["db"], "production-db");

    assert!(prod.get_config("cache").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_nested_environment_is_isolated_from_parent() {
    let store = shared_store();
    let prod = ConfigCenter::new(Arc::clone(&store), "prod");
    let prod_eu = ConfigCenter::new(Arc::clone(&store), "prod/eu");

    prod_eu.set_config("secret", "nested-only").await.unwrap();
    prod.set_config("db", "prod-db").await.unwrap();

    let prod_configs = prod.list_config().await.unwrap();
    assert_eq!(prod_configs.len(), 1);
    assert_eq!(prod_configs["db"], "prod-db");
    assert!(!prod_configs.contains_key("secret"));

    // Every listed name is addressable by get_config on the same facade.
    for (name, content) in &prod_configs {
        assert_eq!(&prod.get_config(name).await.unwrap(), content);
    }

    let nested_configs = prod_eu.list_config().await.unwrap();
    assert_eq!(nested_configs.len(), 1);
    assert_eq!(nested_configs["secret"], "nested-only");
}

#[tokio::test]
async fn test_environment_whitespace_is_trimmed() {
    let store = shared_store();
    let padded = ConfigCenter::new(Arc::clone(&store), "\t staging \r\n");
    let plain = ConfigCenter::new(Arc::clone(&store), "staging");

    padded.set_config("a", "1").await.unwrap();
    assert_eq!(plain.get_config("a").await.unwrap(), "1");
}

#[tokio::test]
async fn test_degenerate_key_under_prefix_is_skipped() {
    let store = shared_store();
    let center = ConfigCenter::new(Arc::clone(&store), "test");

    store.put("/config_center/test/", "directory marker").await.unwrap();
    center.set_config("real", "value").await.unwrap();

    let configs = center.list_config().await.unwrap();
    assert_eq!(configs.len(), 1);
    assert!(!configs.contains_key(""));
}

#[tokio::test]
async fn test_only_degenerate_key_lists_empty() {
    let store = shared_store();
    let center = ConfigCenter::new(Arc::clone(&store), "test");

    store.put("/config_center/test/", "directory marker").await.unwrap();
    assert!(center.list_config().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_custom_base_paths_do_not_interfere() {
    let store = shared_store();
    let a = ConfigCenter::builder(Arc::clone(&store))
        .environment("prod")
        .base_path("/team_a")
        .build()
        .unwrap();
    let b = ConfigCenter::builder(Arc::clone(&store))
        .environment("prod")
        .base_path("/team_b")
        .build()
        .unwrap();

    a.set_config("db", "a").await.unwrap();
    b.set_config("db", "b").await.unwrap();

    assert_eq!(a.get_config("db").await.unwrap(), "a");
    assert_eq!(b.get_config("db").await.unwrap(), "b");
    assert_eq!(a.list_config().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_keys_follow_wire_layout() {
    let store = shared_store();
    let center = ConfigCenter::new(Arc::clone(&store), "test");
    center.set_config("xx125", CFG_CONTENT).await.unwrap();

    let kvs = store.get("/config_center/test/xx125").await.unwrap();
    assert_eq!(kvs, vec![KeyValue::new("/config_center/test/xx125", CFG_CONTENT)]);
}

#[tokio::test]
async fn test_invalid_names_rejected_before_store() {
    let store = Arc::new(FailingStore::new());
    let center = ConfigCenter::new(Arc::clone(&store), "test");

    for name in ["", "a/b", "/x", "x/"] {
        let err = center.get_config(name).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }), "{:?}", name);
        assert!(center.set_config(name, "c").await.is_err());
        assert!(center.remove_config(name).await.is_err());
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let store = Arc::new(FailingStore::new());
    let center = ConfigCenter::new(Arc::clone(&store), "test");

    let err = center.get_config("a").await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_not_found());

    assert!(center.set_config("a", "b").await.unwrap_err().is_transport());
    assert!(center.remove_config("a").await.unwrap_err().is_transport());
    assert!(center.list_config().await.unwrap_err().is_transport());

    // No retries: exactly one store call per operation.
    assert_eq!(store.calls(), 4);
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let center = ConfigCenter::builder(Arc::new(SlowStore::new(Duration::from_secs(5))))
        .environment("test")
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = center.get_config("a").await.unwrap_err();
    match err {
        ConfigError::Timeout {
            operation,
            key,
            timeout,
        } => {
            assert_eq!(operation.as_str(), "get");
            assert_eq!(key, "/config_center/test/a");
            assert_eq!(timeout, Duration::from_millis(50));
        }
        other => panic!("expected timeout, got {}", other),
    }

    assert!(center.set_config("a", "b").await.unwrap_err().is_timeout());
    assert!(center.remove_config("a").await.unwrap_err().is_timeout());

    let err = center.list_config().await.unwrap_err();
    assert!(err.is_timeout());
    assert!(!err.is_not_found());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_store_within_deadline_succeeds() {
    let center = ConfigCenter::builder(Arc::new(SlowStore::new(Duration::from_millis(10))))
        .environment("test")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    center.set_config("a", "b").await.unwrap();
    assert_eq!(center.get_config("a").await.unwrap(), "b");
}

#[tokio::test]
async fn test_deadlines_are_independent_per_call() {
    let center = ConfigCenter::builder(Arc::new(SlowStore::new(Duration::from_millis(30))))
        .environment("test")
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    // Sequential calls together exceed one budget, but each stays within its own.
    for i in 0..20 {
        center
            .set_config(&format!("n{}", i), "v")
            .await
            .unwrap();
    }
    assert_eq!(center.list_config().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_center() {
    let center = Arc::new(ConfigCenter::new(shared_store(), "test"));

    let mut handles = Vec::new();
    for i in 0..16 {
        let center = Arc::clone(&center);
        handles.push(tokio::spawn(async move {
            let name = format!("doc{}", i);
            center.set_config(&name, &i.to_string()).await.unwrap();
            center.get_config(&name).await.unwrap()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), i.to_string());
    }
    assert_eq!(center.list_config().await.unwrap().len(), 16);
}

#[tokio::test]
async fn test_center_over_trait_object_store() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let center: ConfigCenter<dyn KvStore> = ConfigCenter::new(store, "dyn");

    center.set_config("a", "1").await.unwrap();
    assert_eq!(center.get_config("a").await.unwrap(), "1");
}

#[tokio::test]
async fn test_names_are_not_trimmed() {
    let center = ConfigCenter::new(shared_store(), "test");
    center.set_config(" padded ", "x").await.unwrap();

    assert!(center.get_config("padded").await.unwrap_err().is_not_found());
    let configs = center.list_config().await.unwrap();
    assert_eq!(configs[" padded "], "x");
}

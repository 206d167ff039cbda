//! Integration tests for the file-backed profile store
//!
//! These tests exercise the store through the application port, the way
//! the weather handler uses it.

#![allow(clippy::expect_used)]

use application::ports::ProfileStorePort;
use domain::{GridField, ProfilePath};
use infrastructure::persistence::TomlProfileStore;
use serde_json::json;

const ADDRESS: &str = "Springfield, IL";

async fn open(path: &std::path::Path) -> TomlProfileStore {
    TomlProfileStore::open(path)
        .await
        .expect("Failed to open profile")
}

#[tokio::test]
async fn test_values_survive_reopen_after_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.toml");

    let store = open(&path).await;
    store
        .set(&ProfilePath::address(), json!(ADDRESS))
        .await
        .expect("set address");
    store
        .set(&ProfilePath::grid_field(ADDRESS, GridField::GridId), json!("ILX"))
        .await
        .expect("set grid id");
    store
        .set(&ProfilePath::grid_field(ADDRESS, GridField::GridX), json!(61))
        .await
        .expect("set grid x");
    store.save().await.expect("save");

    let reopened = open(&path).await;
    assert_eq!(
        reopened.get(&ProfilePath::address()).await.expect("get"),
        Some(json!(ADDRESS))
    );
    assert_eq!(
        reopened
            .get(&ProfilePath::grid_field(ADDRESS, GridField::GridId))
            .await
            .expect("get"),
        Some(json!("ILX"))
    );
    assert_eq!(
        reopened
            .get(&ProfilePath::grid_field(ADDRESS, GridField::GridX))
            .await
            .expect("get"),
        Some(json!(61))
    );
}

#[tokio::test]
async fn test_unsaved_values_are_lost_on_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.toml");

    let store = open(&path).await;
    store
        .set(&ProfilePath::address(), json!(ADDRESS))
        .await
        .expect("set address");
    drop(store);

    let reopened = open(&path).await;
    assert!(
        reopened
            .get(&ProfilePath::address())
            .await
            .expect("get")
            .is_none()
    );
}

#[tokio::test]
async fn test_hand_written_profile_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.toml");
    std::fs::write(
        &path,
        r#"
[nws_weather]
address = "Boise, ID"

[nws_weather."Boise, ID"]
gridId = "BOI"
gridX = 132
gridY = 87
"#,
    )
    .expect("write profile");

    let store = open(&path).await;
    assert_eq!(
        store.get(&ProfilePath::address()).await.expect("get"),
        Some(json!("Boise, ID"))
    );
    assert_eq!(
        store
            .get(&ProfilePath::grid_field("Boise, ID", GridField::GridY))
            .await
            .expect("get"),
        Some(json!(87))
    );
}

#[tokio::test]
async fn test_save_keeps_unrelated_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.toml");
    std::fs::write(&path, "[other_plugin]\nenabled = true\n").expect("write profile");

    let store = open(&path).await;
    store
        .set(&ProfilePath::address(), json!(ADDRESS))
        .await
        .expect("set address");
    store.save().await.expect("save");

    let reopened = open(&path).await;
    assert_eq!(
        reopened
            .get(&ProfilePath::new(["other_plugin", "enabled"]))
            .await
            .expect("get"),
        Some(json!(true))
    );
}

#![cfg(unix)]

use adb_mcp::app::App;
use adb_mcp::config::AdbConfig;
use serde_json::json;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    dir
}

/// Writes a stand-in bridge that maps device paths under `device_root`.
fn install_fake_adb(dir: &Path, device_root: &Path) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
ROOT='{root}'
if [ "$1" = "-s" ]; then shift 2; fi
cmd="$1"; shift
case "$cmd" in
  devices)
    printf 'List of devices attached\nfake-0001\tdevice\n\n'
    ;;
  push)
    mkdir -p "$ROOT$(dirname "$2")" && cp "$1" "$ROOT$2" || exit 1
    echo "$1: 1 file pushed." >&2
    ;;
  pull)
    [ -f "$ROOT$1" ] || {{ echo "adb: error: remote object '$1' does not exist" >&2; exit 1; }}
    cp "$ROOT$1" "$2"
    echo "$1: 1 file pulled." >&2
    ;;
  shell)
    echo "$@"
    ;;
  *)
    echo "unknown command $cmd" >&2
    exit 1
    ;;
esac
"#,
        root = device_root.display()
    );
    let path = dir.join("adb");
    std::fs::write(&path, script).expect("write fake adb");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

fn fake_app(prefix: &str) -> (App, PathBuf) {
    let dir = temp_dir(prefix);
    let device_root = dir.join("device");
    std::fs::create_dir_all(&device_root).expect("device root");
    let adb = install_fake_adb(&dir, &device_root);
    let app = App::initialize(AdbConfig::default().with_adb_path(adb)).expect("app");
    (app, dir)
}

#[tokio::test]
async fn push_then_pull_round_trips_bytes() {
    let (app, dir) = fake_app("adb-mcp-roundtrip");
    let original: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
    let local = dir.join("payload.bin");
    let back = dir.join("payload.back.bin");
    std::fs::write(&local, &original).expect("payload");

    let pushed = app
        .tool_executor
        .dispatch(
            "push-file",
            json!({ "local_path": local.display().to_string(), "remote_path": "/sdcard/payload.bin" }),
        )
        .await;
    assert!(!pushed.is_error, "{:?}", pushed.first_text());
    assert!(pushed.first_text().unwrap_or_default().contains("1 file pushed"));

    let pulled = app
        .tool_executor
        .dispatch(
            "pull-file",
            json!({ "remote_path": "/sdcard/payload.bin", "local_path": back.display().to_string() }),
        )
        .await;
    assert!(!pulled.is_error, "{:?}", pulled.first_text());

    assert_eq!(std::fs::read(&back).expect("pulled file"), original);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn pulling_missing_file_reports_bridge_error() {
    let (app, dir) = fake_app("adb-mcp-missing");

    let result = app
        .tool_executor
        .dispatch(
            "adb_pull",
            json!({ "remote_path": "/sdcard/none.txt", "local_path": dir.join("x").display().to_string() }),
        )
        .await;

    assert!(result.is_error);
    assert!(result
        .first_text()
        .unwrap_or_default()
        .contains("remote object '/sdcard/none.txt' does not exist"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn device_listing_comes_from_the_configured_executable() {
    let (app, dir) = fake_app("adb-mcp-devices");

    let result = app.tool_executor.dispatch("adb_devices", json!({})).await;

    assert!(!result.is_error);
    assert!(result.first_text().unwrap_or_default().contains("fake-0001\tdevice"));

    let shell = app
        .tool_executor
        .dispatch("adb_shell", json!({ "command": "getprop ro.product.model" }))
        .await;
    assert_eq!(shell.first_text(), Some("getprop ro.product.model\n"));
    let _ = std::fs::remove_dir_all(&dir);
}

mod common;
use common::ENV_LOCK;

use adb_mcp::config::AdbConfig;
use adb_mcp::constants::limits::MAX_OUTPUT_BYTES;
use std::path::PathBuf;

const KEYS: [&str; 3] = [
    "ADB_PATH",
    "ADB_MCP_MAX_OUTPUT_BYTES",
    "ADB_MCP_REMOTE_TMP_DIR",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

#[tokio::test]
async fn defaults_apply_without_environment() {
    let _guard = ENV_LOCK.lock().await;
    clear_env();

    let config = AdbConfig::from_env();

    assert_eq!(config, AdbConfig::default());
    assert_eq!(config.adb_path, PathBuf::from("adb"));
    assert_eq!(config.max_output_bytes, MAX_OUTPUT_BYTES);
    assert_eq!(config.remote_tmp_dir, "/sdcard");
}

#[tokio::test]
async fn environment_overrides_defaults() {
    let _guard = ENV_LOCK.lock().await;
    clear_env();
    std::env::set_var("ADB_PATH", "/opt/platform-tools/adb");
    std::env::set_var("ADB_MCP_MAX_OUTPUT_BYTES", "4096");
    std::env::set_var("ADB_MCP_REMOTE_TMP_DIR", "/data/local/tmp/");

    let config = AdbConfig::from_env();
    clear_env();

    assert_eq!(config.adb_path, PathBuf::from("/opt/platform-tools/adb"));
    assert_eq!(config.max_output_bytes, 4096);
    assert_eq!(config.remote_tmp_dir, "/data/local/tmp");
}

#[tokio::test]
async fn unusable_limits_fall_back_to_default() {
    let _guard = ENV_LOCK.lock().await;
    clear_env();

    for raw in ["0", "-5", "lots", "  "] {
        std::env::set_var("ADB_MCP_MAX_OUTPUT_BYTES", raw);
        assert_eq!(AdbConfig::from_env().max_output_bytes, MAX_OUTPUT_BYTES, "{:?}", raw);
    }
    clear_env();

    assert_eq!(
        AdbConfig::default().with_max_output_bytes(0).max_output_bytes,
        MAX_OUTPUT_BYTES
    );
}

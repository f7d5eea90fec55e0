mod common;
use common::{app_with, strings, FakeRunner};

use adb_mcp::errors::ToolErrorKind;
use adb_mcp::services::process_runner::CapturedOutput;
use serde_json::json;

#[tokio::test]
async fn install_with_reinstall_targets_the_single_device() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "Performing Streamed Install\nSuccess\n");
    let app = app_with(runner.clone());

    let result = app
        .tool_executor
        .dispatch(
            "install-package",
            json!({ "apk_path": "/tmp/app.apk", "reinstall": true }),
        )
        .await;

    assert!(!result.is_error);
    assert_eq!(
        result.first_text(),
        Some("Performing Streamed Install\nSuccess\n")
    );
    assert_eq!(
        runner.calls(),
        vec![
            strings(&["devices"]),
            strings(&["-s", "emulator-5554", "install", "-r", "/tmp/app.apk"]),
        ]
    );
}

#[tokio::test]
async fn install_without_reinstall_omits_flag() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "Success\n");
    let app = app_with(runner.clone());

    app.tool_executor
        .dispatch("adb_install", json!({ "apk_path": "/tmp/app.apk" }))
        .await;

    assert_eq!(
        runner.device_calls(),
        vec![strings(&["-s", "emulator-5554", "install", "/tmp/app.apk"])]
    );
}

#[tokio::test]
async fn unknown_operation_yields_error_envelope() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "");
    let app = app_with(runner.clone());

    for name in ["adb_reboot", "", "shell_exec_now"] {
        let result = app.tool_executor.dispatch(name, json!({})).await;
        assert!(result.is_error, "{} must fail", name);
        assert_eq!(result.error_kind, Some(ToolErrorKind::UnknownOperation));
        let text = result.first_text().expect("text");
        assert!(text.starts_with("Error: Unknown tool"));
        assert!(text.contains("code: UNKNOWN_OPERATION"));
    }
    assert!(runner.calls().is_empty(), "unknown tools never spawn");
}

#[tokio::test]
async fn unknown_operation_suggests_close_names() {
    let app = app_with(FakeRunner::with_devices(&[], ""));
    let err = app
        .tool_executor
        .execute("adb_shel", json!({}))
        .await
        .expect_err("unknown");
    assert_eq!(err.kind, ToolErrorKind::UnknownOperation);
    assert!(err.hint.unwrap_or_default().contains("adb_shell"));
}

#[tokio::test]
async fn missing_required_argument_is_invalid_params() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "");
    let app = app_with(runner.clone());

    let result = app.tool_executor.dispatch("shell-exec", json!({})).await;

    assert!(result.is_error);
    assert_eq!(result.error_kind, Some(ToolErrorKind::InvalidParams));
    assert!(result
        .first_text()
        .unwrap_or_default()
        .contains("missing required field 'command'"));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn null_arguments_are_treated_as_empty() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "List of devices attached\n");
    let app = app_with(runner.clone());

    let result = app
        .tool_executor
        .dispatch("adb_devices", serde_json::Value::Null)
        .await;

    assert!(!result.is_error);
    assert_eq!(runner.calls(), vec![strings(&["devices", "-l"])]);
}

#[tokio::test]
async fn shell_passes_command_as_single_argument() {
    let runner = FakeRunner::with_devices(&["emulator-5554"], "total 0\n");
    let app = app_with(runner.clone());

    let result = app
        .tool_executor
        .dispatch("adb_shell", json!({ "command": "ls -la /sdcard | head" }))
        .await;

    assert_eq!(result.first_text(), Some("total 0\n"));
    assert_eq!(
        runner.device_calls(),
        vec![strings(&["-s", "emulator-5554", "shell", "ls -la /sdcard | head"])]
    );
}

#[tokio::test]
async fn package_and_activity_manager_split_on_whitespace() {
    let runner = FakeRunner::with_devices(&[], "ok\n");
    let app = app_with(runner.clone());

    app.tool_executor
        .dispatch(
            "package-manager-cmd",
            json!({ "command": "grant  com.example\tandroid.permission.CAMERA", "device_serial": "R58M" }),
        )
        .await;
    app.tool_executor
        .dispatch(
            "activity-manager-cmd",
            json!({ "command": "start -n com.example/.Main", "device_serial": "R58M" }),
        )
        .await;

    assert_eq!(
        runner.calls(),
        vec![
            strings(&["-s", "R58M", "shell", "pm", "grant", "com.example", "android.permission.CAMERA"]),
            strings(&["-s", "R58M", "shell", "am", "start", "-n", "com.example/.Main"]),
        ]
    );
}

#[tokio::test]
async fn pull_and_push_keep_argument_order() {
    let runner = FakeRunner::with_devices(&[], "1 file pulled\n");
    let app = app_with(runner.clone());

    app.tool_executor
        .dispatch(
            "pull-file",
            json!({ "remote_path": "/sdcard/a.txt", "local_path": "/tmp/a.txt", "device_serial": "X" }),
        )
        .await;
    app.tool_executor
        .dispatch(
            "push-file",
            json!({ "local_path": "/tmp/b.txt", "remote_path": "/sdcard/b.txt", "device_serial": "X" }),
        )
        .await;

    assert_eq!(
        runner.calls(),
        vec![
            strings(&["-s", "X", "pull", "/sdcard/a.txt", "/tmp/a.txt"]),
            strings(&["-s", "X", "push", "/tmp/b.txt", "/sdcard/b.txt"]),
        ]
    );
}

#[tokio::test]
async fn execution_failure_becomes_error_envelope() {
    let runner = FakeRunner::new(|args| {
        if args.first().map(String::as_str) == Some("devices") {
            Ok(CapturedOutput::ok(common::device_listing(&["emulator-5554"])))
        } else {
            Ok(CapturedOutput::failed(1, "adb: error: failed to stat remote object '/nope': No such file or directory\n"))
        }
    });
    let app = app_with(runner);

    let result = app
        .tool_executor
        .dispatch(
            "adb_pull",
            json!({ "remote_path": "/nope", "local_path": "/tmp/nope" }),
        )
        .await;

    assert!(result.is_error);
    assert_eq!(result.error_kind, Some(ToolErrorKind::ExecutionFailed));
    let text = result.first_text().unwrap_or_default();
    assert!(text.starts_with("Error: ADB command failed: adb: error: failed to stat"));
}

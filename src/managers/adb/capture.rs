use crate::constants::remote::{SCREENSHOT_EXT, SCREENSHOT_STEM, UI_DUMP_EXT, UI_DUMP_STEM};
use crate::errors::ToolError;
use crate::services::adb::argv;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

use super::AdbManager;

static ARTIFACT_SEQ: AtomicU64 = AtomicU64::new(0);

/// How far a remote temporary artifact got before cleanup ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStage {
    Pending,
    Created,
    Transferred,
    Cleaned,
}

impl ArtifactStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactStage::Pending => "pending",
            ArtifactStage::Created => "created",
            ArtifactStage::Transferred => "transferred",
            ArtifactStage::Cleaned => "cleaned",
        }
    }
}

/// Millisecond timestamp, process id and an in-process counter: distinct
/// across repeated calls in the same millisecond and across server processes.
fn unique_suffix() -> String {
    format!(
        "{}-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        std::process::id(),
        ARTIFACT_SEQ.fetch_add(1, Ordering::Relaxed)
    )
}

/// One device-side temp file plus the two invocations that use it.
struct RemoteArtifact {
    path: String,
    create: Vec<String>,
    read: Vec<String>,
}

impl AdbManager {
    fn remote_artifact_path(&self, stem: &str, ext: &str) -> String {
        let dir = self.adb.config().remote_tmp_dir.trim_end_matches('/');
        format!("{}/{}-{}.{}", dir, stem, unique_suffix(), ext)
    }

    /// Create, read, then always attempt `rm -f`.
    ///
    /// A primary failure wins over a cleanup failure. A cleanup failure after
    /// a successful read still fails the operation; the details record that
    /// the data was already transferred.
    async fn run_artifact_workflow(
        &self,
        serial: &str,
        artifact: RemoteArtifact,
    ) -> Result<String, ToolError> {
        let RemoteArtifact { path, create, read } = artifact;
        let mut stage = ArtifactStage::Pending;

        let primary = match self.adb.exec_on(serial, create).await {
            Ok(_) => {
                stage = ArtifactStage::Created;
                self.adb.exec_on(serial, read).await
            }
            Err(err) => Err(err),
        };
        if primary.is_ok() {
            stage = ArtifactStage::Transferred;
        }

        let cleanup = self
            .adb
            .exec_on(serial, argv(["shell", "rm", "-f", path.as_str()]))
            .await;

        match (primary, cleanup) {
            (Ok(output), Ok(_)) => {
                stage = ArtifactStage::Cleaned;
                self.logger.debug(
                    "remote artifact cleaned",
                    Some(&serde_json::json!({ "remote_path": path, "stage": stage.as_str() })),
                );
                Ok(output)
            }
            (Ok(_), Err(err)) => {
                self.logger.warn(
                    "remote artifact cleanup failed after transfer",
                    Some(&serde_json::json!({ "remote_path": path, "code": err.code })),
                );
                let exit_code = err
                    .details
                    .as_ref()
                    .and_then(|details| details.get("exit_code"))
                    .cloned()
                    .unwrap_or(Value::Null);
                Err(err.with_details(serde_json::json!({
                    "remote_path": path,
                    "stage": stage.as_str(),
                    "cleanup_failed": true,
                    "exit_code": exit_code,
                })))
            }
            (Err(err), cleanup) => {
                if let Err(cleanup_err) = cleanup {
                    self.logger.warn(
                        "remote artifact cleanup failed",
                        Some(&serde_json::json!({
                            "remote_path": path,
                            "stage": stage.as_str(),
                            "message": cleanup_err.message,
                        })),
                    );
                }
                Err(err)
            }
        }
    }

    pub(super) async fn screenshot(&self, args: Value) -> Result<String, ToolError> {
        let output_path = self.validation.ensure_local_path(&args, "output_path")?;
        let serial = self.target_device(&args).await?;
        let path = self.remote_artifact_path(SCREENSHOT_STEM, SCREENSHOT_EXT);
        let artifact = RemoteArtifact {
            create: argv(["shell", "screencap", "-p", path.as_str()]),
            read: argv(["pull", path.as_str(), output_path.as_str()]),
            path,
        };
        self.run_artifact_workflow(&serial, artifact).await?;
        Ok(format!("Screenshot saved to {}", output_path))
    }

    pub(super) async fn ui_hierarchy(&self, args: Value) -> Result<String, ToolError> {
        let serial = self.target_device(&args).await?;
        let path = self.remote_artifact_path(UI_DUMP_STEM, UI_DUMP_EXT);
        let artifact = RemoteArtifact {
            create: argv(["shell", "uiautomator", "dump", path.as_str()]),
            read: argv(["shell", "cat", path.as_str()]),
            path,
        };
        self.run_artifact_workflow(&serial, artifact).await
    }
}

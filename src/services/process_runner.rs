use crate::constants::limits::READ_CHUNK_BYTES;
use crate::errors::ToolError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Everything one external invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
            exit_code: Some(0),
        }
    }

    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
            exit_code: Some(exit_code),
        }
    }
}

/// Runs one external program to completion. Implementations must not retry.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        max_output_bytes: usize,
    ) -> Result<CapturedOutput, ToolError>;
}

#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

async fn read_capped<R>(reader: Option<R>, limit: usize) -> Result<Vec<u8>, ToolError>
where
    R: AsyncRead + Unpin,
{
    let mut captured = Vec::new();
    let Some(mut reader) = reader else {
        return Ok(captured);
    };
    let mut buf = [0u8; READ_CHUNK_BYTES];
    loop {
        let n = reader
            .read(&mut buf)
            .await
            .map_err(|err| ToolError::execution_failed(format!("Failed to read output: {}", err)))?;
        if n == 0 {
            break;
        }
        if captured.len() + n > limit {
            return Err(ToolError::output_too_large(limit));
        }
        captured.extend_from_slice(&buf[..n]);
    }
    Ok(captured)
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &Path,
        args: &[String],
        max_output_bytes: usize,
    ) -> Result<CapturedOutput, ToolError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                ToolError::execution_failed(format!(
                    "ADB command failed: cannot start {}: {}",
                    program.display(),
                    err
                ))
                .with_code("SPAWN_FAILED")
                .with_hint("Install the device bridge or point ADB_PATH (or --adb-path) at it.")
            })?;

        // Both streams are drained together; the first one over the ceiling
        // aborts the other and the child is killed.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let streams = tokio::try_join!(
            read_capped(stdout, max_output_bytes),
            read_capped(stderr, max_output_bytes)
        );
        let (stdout, stderr) = match streams {
            Ok(pair) => pair,
            Err(err) => {
                let _ = child.kill().await;
                return Err(err);
            }
        };

        let status = child.wait().await.map_err(|err| {
            ToolError::execution_failed(format!("Failed to wait for process: {}", err))
        })?;

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            success: status.success(),
            exit_code: status.code(),
        })
    }
}

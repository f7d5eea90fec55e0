use crate::constants::{env, limits, remote};
use std::path::PathBuf;

/// Process-wide settings, resolved once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbConfig {
    /// Device-bridge executable. A bare name is looked up on `PATH`.
    pub adb_path: PathBuf,
    /// Ceiling applied to each captured stream of a single invocation.
    pub max_output_bytes: usize,
    /// Device directory used for temporary capture artifacts.
    pub remote_tmp_dir: String,
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            adb_path: PathBuf::from("adb"),
            max_output_bytes: limits::MAX_OUTPUT_BYTES,
            remote_tmp_dir: remote::DEFAULT_TMP_DIR.to_string(),
        }
    }
}

impl AdbConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let adb_path = read_env(env::ADB_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.adb_path);
        let max_output_bytes = read_env(env::MAX_OUTPUT_BYTES)
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_output_bytes);
        let remote_tmp_dir = read_env(env::REMOTE_TMP_DIR)
            .map(|dir| normalize_remote_dir(&dir))
            .unwrap_or(defaults.remote_tmp_dir);
        Self {
            adb_path,
            max_output_bytes,
            remote_tmp_dir,
        }
    }

    pub fn with_adb_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.adb_path = path.into();
        self
    }

    pub fn with_max_output_bytes(mut self, limit: usize) -> Self {
        if limit > 0 {
            self.max_output_bytes = limit;
        }
        self
    }

    pub fn with_remote_tmp_dir(mut self, dir: &str) -> Self {
        self.remote_tmp_dir = normalize_remote_dir(dir);
        self
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn normalize_remote_dir(dir: &str) -> String {
    let trimmed = dir.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

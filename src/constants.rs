pub mod limits {
    pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;
    pub const READ_CHUNK_BYTES: usize = 8192;
    pub const COMMAND_PREVIEW_LENGTH: usize = 120;
    pub const MAX_SUGGESTIONS: usize = 5;
}

pub mod logcat {
    pub const DEFAULT_MAX_LINES: usize = 100;
}

pub mod remote {
    pub const DEFAULT_TMP_DIR: &str = "/sdcard";
    pub const SCREENSHOT_STEM: &str = "screenshot";
    pub const SCREENSHOT_EXT: &str = "png";
    pub const UI_DUMP_STEM: &str = "window_dump";
    pub const UI_DUMP_EXT: &str = "xml";
}

pub mod env {
    pub const ADB_PATH: &str = "ADB_PATH";
    pub const MAX_OUTPUT_BYTES: &str = "ADB_MCP_MAX_OUTPUT_BYTES";
    pub const REMOTE_TMP_DIR: &str = "ADB_MCP_REMOTE_TMP_DIR";
    pub const LOG_LEVEL: &str = "ADB_MCP_LOG_LEVEL";
    pub const LOG_LEVEL_FALLBACK: &str = "LOG_LEVEL";
}

pub mod server {
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
    pub const NAME: &str = "adb-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

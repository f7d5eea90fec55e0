use adb_mcp::config::AdbConfig;
use adb_mcp::services::logger::Logger;
use clap::Parser;
use std::path::PathBuf;

/// MCP server exposing Android device-bridge operations over stdio.
#[derive(Debug, Parser)]
#[command(name = "adb-mcp", version, about)]
struct Cli {
    /// Device-bridge executable (overrides ADB_PATH).
    #[arg(long, value_name = "PATH")]
    adb_path: Option<PathBuf>,

    /// Per-stream output ceiling in bytes (overrides ADB_MCP_MAX_OUTPUT_BYTES).
    #[arg(long, value_name = "BYTES")]
    max_output_bytes: Option<usize>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut config = AdbConfig::from_env();
    if let Some(path) = cli.adb_path {
        config = config.with_adb_path(path);
    }
    if let Some(limit) = cli.max_output_bytes {
        config = config.with_max_output_bytes(limit);
    }

    if let Err(err) = adb_mcp::mcp::server::run_stdio(config).await {
        Logger::new("adb-mcp").error(
            "server stopped",
            Some(&serde_json::json!({ "code": err.code, "message": err.message, "details": err.details })),
        );
        std::process::exit(1);
    }
}

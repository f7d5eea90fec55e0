#![allow(dead_code)]

use adb_mcp::app::App;
use adb_mcp::config::AdbConfig;
use adb_mcp::errors::ToolError;
use adb_mcp::services::process_runner::{CapturedOutput, CommandRunner};
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

pub static ENV_LOCK: Lazy<AsyncMutex<()>> = Lazy::new(|| AsyncMutex::new(()));

type Responder = dyn Fn(&[String]) -> Result<CapturedOutput, ToolError> + Send + Sync;

/// Records every invocation and answers from a closure instead of spawning.
pub struct FakeRunner {
    calls: Mutex<Vec<Vec<String>>>,
    responder: Box<Responder>,
}

impl FakeRunner {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&[String]) -> Result<CapturedOutput, ToolError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Lists `serials` for `adb devices` and answers everything else with `reply`.
    pub fn with_devices(serials: &[&str], reply: &str) -> Arc<Self> {
        let listing = device_listing(serials);
        let reply = reply.to_string();
        Self::new(move |args| {
            if args.first().map(String::as_str) == Some("devices") {
                Ok(CapturedOutput::ok(listing.clone()))
            } else {
                Ok(CapturedOutput::ok(reply.clone()))
            }
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Invocations other than device listing.
    pub fn device_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|args| args.first().map(String::as_str) != Some("devices"))
            .collect()
    }
}

#[async_trait::async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        _program: &Path,
        args: &[String],
        _max_output_bytes: usize,
    ) -> Result<CapturedOutput, ToolError> {
        self.calls.lock().expect("calls lock").push(args.to_vec());
        (self.responder)(args)
    }
}

pub fn device_listing(serials: &[&str]) -> String {
    let mut out = String::from("List of devices attached\n");
    for serial in serials {
        out.push_str(&format!("{}\tdevice\n", serial));
    }
    out.push('\n');
    out
}

pub fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

pub fn app_with(runner: Arc<FakeRunner>) -> App {
    App::with_runner(AdbConfig::default(), runner).expect("app wiring")
}

use crate::errors::ToolError;
use crate::services::adb::{argv, AdbClient};
use crate::services::logger::Logger;
use std::sync::Arc;

/// Serials listed by `adb devices`, in output order.
///
/// Skips blank lines, the `List of devices attached` header and daemon
/// notices such as `* daemon started successfully`. The serial is the
/// first whitespace-delimited token; the device state is not inspected.
pub fn parse_device_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.contains("List of devices"))
        .filter(|line| !line.starts_with('*'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[derive(Clone)]
pub struct DeviceResolver {
    logger: Logger,
    adb: Arc<AdbClient>,
}

impl DeviceResolver {
    pub fn new(logger: Logger, adb: Arc<AdbClient>) -> Self {
        Self {
            logger: logger.child("devices"),
            adb,
        }
    }

    /// An explicit serial is trusted as-is; otherwise exactly one device
    /// must be attached.
    pub async fn resolve(&self, explicit: Option<&str>) -> Result<String, ToolError> {
        if let Some(serial) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
            return Ok(serial.to_string());
        }
        let output = self.adb.exec(argv(["devices"])).await?;
        let mut candidates = parse_device_list(&output);
        match candidates.len() {
            0 => Err(ToolError::no_device_connected()
                .with_hint("Connect a device or start an emulator, then check `adb devices`.")),
            1 => {
                let serial = candidates.remove(0);
                self.logger.debug(
                    "resolved single attached device",
                    Some(&serde_json::json!({ "serial": serial })),
                );
                Ok(serial)
            }
            _ => Err(ToolError::ambiguous_device(&candidates)
                .with_hint("Pass device_serial with one of the listed devices.")),
        }
    }
}

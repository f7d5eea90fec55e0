pub mod adb;
pub mod device_resolver;
pub mod logger;
pub mod process_runner;
pub mod tool_executor;
pub mod validation;

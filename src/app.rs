use crate::config::AdbConfig;
use crate::errors::ToolError;
use crate::managers::adb::{AdbManager, AdbOperation, OperationHandler};
use crate::mcp::aliases::builtin_tool_alias_map_owned;
use crate::mcp::catalog::tool_catalog;
use crate::services::adb::AdbClient;
use crate::services::device_resolver::DeviceResolver;
use crate::services::logger::Logger;
use crate::services::process_runner::{CommandRunner, ProcessRunner};
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use crate::services::validation::Validation;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub config: Arc<AdbConfig>,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    /// Every catalog entry needs a handler and every handler needs a catalog
    /// entry; aliases must point at a handler.
    fn validate_tool_wiring(
        handlers: &HashMap<String, Arc<dyn ToolHandler>>,
        alias_map: &HashMap<String, String>,
    ) -> Result<(), ToolError> {
        let catalog: HashSet<&str> = tool_catalog().iter().map(|t| t.name.as_str()).collect();
        let mut missing: Vec<String> = catalog
            .iter()
            .filter(|name| !handlers.contains_key(**name))
            .map(|name| name.to_string())
            .collect();
        let mut undocumented: Vec<String> = handlers
            .keys()
            .filter(|name| !catalog.contains(name.as_str()))
            .cloned()
            .collect();
        let mut dangling: Vec<String> = alias_map
            .iter()
            .filter(|(_, target)| !handlers.contains_key(*target))
            .map(|(alias, _)| alias.clone())
            .collect();
        if missing.is_empty() && undocumented.is_empty() && dangling.is_empty() {
            return Ok(());
        }
        missing.sort();
        undocumented.sort();
        dangling.sort();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_hint("Every tool in tool_catalog.json must have a handler, and every alias a target.")
            .with_details(serde_json::json!({
                "missing_handlers": missing,
                "missing_catalog_entries": undocumented,
                "dangling_aliases": dangling,
            })))
    }

    pub fn initialize(config: AdbConfig) -> Result<Self, ToolError> {
        Self::with_runner(config, Arc::new(ProcessRunner::new()))
    }

    /// Builds the app around a caller-supplied runner; tests pass a scripted one.
    pub fn with_runner(
        config: AdbConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, ToolError> {
        let logger = Logger::new("adb-mcp");
        let config = Arc::new(config);
        let validation = Validation::new();

        let adb = Arc::new(AdbClient::new(logger.clone(), config.clone(), runner));
        let resolver = Arc::new(DeviceResolver::new(logger.clone(), adb.clone()));
        let manager = Arc::new(AdbManager::new(
            logger.clone(),
            validation,
            adb,
            resolver,
        ));

        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        for operation in AdbOperation::ALL {
            handlers.insert(
                operation.tool_name().to_string(),
                Arc::new(OperationHandler::new(manager.clone(), operation)),
            );
        }

        let alias_map = builtin_tool_alias_map_owned();
        Self::validate_tool_wiring(&handlers, &alias_map)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), handlers, alias_map));

        Ok(Self {
            logger,
            config,
            tool_executor,
        })
    }
}

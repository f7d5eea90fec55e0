use std::collections::HashMap;

/// Descriptive operation names accepted in place of the `adb_*` wire names.
pub const BUILTIN_TOOL_ALIASES: &[(&str, &str)] = &[
    ("list-devices", "adb_devices"),
    ("shell-exec", "adb_shell"),
    ("install-package", "adb_install"),
    ("read-log", "adb_logcat"),
    ("pull-file", "adb_pull"),
    ("push-file", "adb_push"),
    ("screenshot", "adb_screenshot"),
    ("ui-dump", "adb_ui_hierarchy"),
    ("package-manager-cmd", "adb_package_manager"),
    ("activity-manager-cmd", "adb_activity_manager"),
];

pub fn builtin_tool_alias_map_owned() -> HashMap<String, String> {
    BUILTIN_TOOL_ALIASES
        .iter()
        .map(|(alias, target)| (alias.to_string(), target.to_string()))
        .collect()
}

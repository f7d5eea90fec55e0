use std::path::{Path, PathBuf};

/// Expands a leading `~` in host-side paths. Device paths never go through here.
pub fn expand_home_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Some(str_path) = path.to_str() else {
        return path.to_path_buf();
    };
    let home = || std::env::var("HOME").ok().filter(|h| !h.is_empty());
    if str_path == "~" {
        if let Some(home) = home() {
            return PathBuf::from(home);
        }
    }
    if let Some(rest) = str_path.strip_prefix("~/") {
        if let Some(home) = home() {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

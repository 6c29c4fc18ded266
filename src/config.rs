//! Data-directory and store-file resolution.
//!
//! Priority (highest to lowest): CLI flag > env var (both arrive through
//! clap) > platform default.

use std::path::PathBuf;

/// Name of the store file inside the data directory.
pub const STORE_FILE: &str = "templates.json";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the template store.
    pub data_dir: PathBuf,
    /// Log filter string, e.g. "debug" or "info,dirforge=trace".
    pub log: String,
}

impl AppConfig {
    pub fn new(data_dir: Option<PathBuf>, log: Option<String>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(default_data_dir),
            log: log.unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Location of the persisted template store.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/dirforge
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("dirforge");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/dirforge or ~/.local/share/dirforge
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("dirforge");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("dirforge");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\dirforge
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("dirforge");
        }
    }
    // Fallback
    PathBuf::from(".dirforge")
}

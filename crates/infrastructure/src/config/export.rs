//! Route export configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where saved route reports are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for saved routes, created on demand
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_directory() -> PathBuf {
    PathBuf::from("saved_routes")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl ExportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("directory must not be empty".to_string());
        }
        Ok(())
    }
}

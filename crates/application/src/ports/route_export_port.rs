//! Route export port
//!
//! Persists rendered route reports.

use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for saving route reports
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RouteExportPort: Send + Sync {
    /// Save `contents` under a name derived from `file_stem`
    ///
    /// Existing files are never overwritten. Returns the path written.
    async fn save(&self, file_stem: &str, contents: &str) -> Result<PathBuf, ApplicationError>;
}

//! Route file store - Implements RouteExportPort on a directory
//!
//! Reports are written as `<stem>.txt`. An existing file is never
//! overwritten: the first free name of `<stem>(1).txt`, `<stem>(2).txt`, ...
//! is used instead. Files are opened with `create_new`, so the name check and
//! the creation are a single step. A file whose write fails is removed again
//! so its name stays free.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::RouteExportPort;
use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument, warn};

/// Give up after this many taken names
const MAX_SUFFIX: u32 = 10_000;

/// Stores route reports as text files in one directory
#[derive(Debug, Clone)]
pub struct RouteFileStore {
    directory: PathBuf,
}

impl RouteFileStore {
    /// Create a store writing into `directory`; it is created on first save
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name for the given collision counter
    fn file_name(stem: &str, counter: u32) -> String {
        if counter == 0 {
            format!("{stem}.txt")
        } else {
            format!("{stem}({counter}).txt")
        }
    }

    fn export_error(path: &Path, err: &std::io::Error) -> ApplicationError {
        ApplicationError::Export(format!("{}: {err}", path.display()))
    }

    /// Write `contents` into the file just created at `path`
    ///
    /// On failure the file is removed before the error is returned.
    async fn write_or_remove<W>(path: &Path, file: &mut W, contents: &str) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let result = async {
            file.write_all(contents.as_bytes()).await?;
            file.flush().await
        }
        .await;

        let Err(err) = result else {
            return Ok(());
        };
        if let Err(e) = fs::remove_file(path).await {
            warn!(path = %path.display(), error = %e, "Could not remove partial file");
        }
        Err(err)
    }
}

#[async_trait]
impl RouteExportPort for RouteFileStore {
    #[instrument(skip(self, contents), fields(directory = %self.directory.display()))]
    async fn save(&self, file_stem: &str, contents: &str) -> Result<PathBuf, ApplicationError> {
        if file_stem.is_empty() || file_stem.contains(['/', '\\']) || file_stem.starts_with('.') {
            return Err(ApplicationError::Validation(format!(
                "Invalid file name: '{file_stem}'"
            )));
        }

        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| Self::export_error(&self.directory, &e))?;

        for counter in 0..=MAX_SUFFIX {
            let path = self.directory.join(Self::file_name(file_stem, counter));

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(path = %path.display(), "File exists, trying next name");
                    continue;
                },
                Err(e) => return Err(Self::export_error(&path, &e)),
            };

            Self::write_or_remove(&path, &mut file, contents)
                .await
                .map_err(|e| Self::export_error(&path, &e))?;

            return Ok(path);
        }

        Err(ApplicationError::Export(format!(
            "no free file name for '{file_stem}' in {}",
            self.directory.display()
        )))
    }
}

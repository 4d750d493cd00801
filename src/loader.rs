//! Template content loading for feijoa.
//! Defines the file-system seam consumed by resolution and loading, and a
//! local-filesystem implementation backed by tokio.

use crate::error::{Error, Result};
use async_trait::async_trait;
use log::debug;
use std::path::Path;

/// Trait for the file-system primitives the engine core depends on.
///
/// Resolution and loading never touch the file system directly; they go
/// through this seam so callers can substitute virtual or in-memory stores.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Checks whether `path` exists.
    ///
    /// There is no error channel: a file that is missing and a file that is
    /// unreadable for permission reasons are indistinguishable here.
    async fn exists(&self, path: &Path) -> bool;

    /// Reads `path` as UTF-8 text.
    ///
    /// # Returns
    /// * `Result<String>` - File content
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read or decoded
    async fn read_text(&self, path: &Path) -> Result<String>;
}

/// Template store backed by the local filesystem.
pub struct LocalStore;

impl LocalStore {
    /// Creates a new LocalStore instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        LocalStore::new()
    }
}

#[async_trait]
impl TemplateStore for LocalStore {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_text(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(Error::IoError)
    }
}

/// Loads the content of a confirmed template path.
///
/// The path is expected to come from resolution; a file removed between
/// the existence check and this read surfaces as `Error::IoError`.
///
/// # Arguments
/// * `store` - File-system seam to read through
/// * `path` - Confirmed template source location
///
/// # Returns
/// * `Result<String>` - Raw template text
pub async fn load_template(store: &dyn TemplateStore, path: &Path) -> Result<String> {
    debug!("Loading template from '{}'.", path.display());
    store.read_text(path).await
}

//! Template and template-options types for feijoa.
//! A template is a named source entity with an optional known file-system
//! location; parsing its content into tokens happens outside this core.

use crate::error::Result;
use crate::loader::{load_template, TemplateStore};
use crate::resolver::resolve;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration carried by a template.
///
/// The resolver reads the `path` field of the parent template's options to
/// resolve relative names; it never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// The template's own resolved source location, if known
    pub path: Option<PathBuf>,
}

impl TemplateOptions {
    /// Creates options carrying a known source path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }
}

/// A template with its options and loaded source text.
#[derive(Debug)]
pub struct Template {
    options: TemplateOptions,
    source: String,
}

impl Template {
    /// Creates a template from already-available source text.
    pub fn new(options: TemplateOptions, source: impl Into<String>) -> Self {
        Self { options, source: source.into() }
    }

    /// Resolves `name` against `parent` and loads the confirmed file.
    ///
    /// The resulting template's options carry the resolved path, so it can
    /// in turn act as the parent for names referenced from its content.
    ///
    /// # Arguments
    /// * `store` - File-system seam for existence checks and reads
    /// * `name` - Template name, absolute or relative to the parent
    /// * `parent` - The template the name was referenced from, if any
    ///
    /// # Errors
    /// * `Error::RelativePathError` if `name` is relative and no parent path is known
    /// * `Error::TemplateNotFoundError` if resolution finds no candidate
    /// * `Error::IoError` if the resolved file cannot be read
    pub async fn open(
        store: &dyn TemplateStore,
        name: &str,
        parent: Option<&Template>,
    ) -> Result<Template> {
        let path = resolve(store, name, parent.map(|template| &template.options)).await?;
        let source = load_template(store, &path).await?;
        Ok(Template::new(TemplateOptions::with_path(path), source))
    }

    /// The template's options.
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// The template's raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

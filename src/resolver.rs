//! Template-name resolution for feijoa.
//! Maps a template name plus the parent template's known location to a
//! single confirmed source path, with extension-fallback lookup.

use crate::constants::DEFAULT_TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use crate::loader::TemplateStore;
use crate::template::TemplateOptions;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolves a template name to a confirmed source path.
///
/// Relative names are joined against the directory containing the parent
/// template's own path. The unmodified candidate is checked first; if it
/// does not exist the default extension is appended and checked once. A name
/// that already carries the default extension is never extended a second
/// time. Names with other extensions still get the suffix appended and
/// checked; the possibly odd combined name is accepted engine behavior.
///
/// The returned path is a point-in-time result: the file may disappear
/// before it is read, in which case the read reports the failure.
///
/// # Arguments
/// * `store` - File-system seam used for existence checks
/// * `name` - Template name, absolute or relative to the parent
/// * `parent` - Options of the template the name was referenced from
///
/// # Returns
/// * `Result<PathBuf>` - Confirmed source path
///
/// # Errors
/// * `Error::RelativePathError` if `name` is relative and `parent` carries no path
/// * `Error::TemplateNotFoundError` if neither candidate exists
pub async fn resolve(
    store: &dyn TemplateStore,
    name: &str,
    parent: Option<&TemplateOptions>,
) -> Result<PathBuf> {
    let candidate = if Path::new(name).is_absolute() {
        PathBuf::from(name)
    } else {
        let parent_path = parent
            .and_then(|options| options.path.as_deref())
            .ok_or_else(|| Error::RelativePathError { name: name.to_string() })?;
        let parent_dir = parent_path.parent().unwrap_or_else(|| Path::new(""));
        parent_dir.join(name)
    };

    debug!("Resolving template '{}' as '{}'.", name, candidate.display());

    if store.exists(&candidate).await {
        return Ok(candidate);
    }

    resolve_with_extension(store, candidate).await
}

/// Fallback lookup with the default extension appended.
async fn resolve_with_extension(
    store: &dyn TemplateStore,
    candidate: PathBuf,
) -> Result<PathBuf> {
    if has_default_extension(&candidate) {
        // Already carries the reserved suffix; appending again is pointless.
        return Err(Error::TemplateNotFoundError {
            path: candidate.display().to_string(),
        });
    }

    let mut extended = candidate.into_os_string();
    extended.push(DEFAULT_TEMPLATE_EXTENSION);
    let extended = PathBuf::from(extended);

    debug!("Trying extension fallback '{}'.", extended.display());

    if store.exists(&extended).await {
        Ok(extended)
    } else {
        Err(Error::TemplateNotFoundError {
            path: extended.display().to_string(),
        })
    }
}

fn has_default_extension(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{}", ext) == DEFAULT_TEMPLATE_EXTENSION,
        None => false,
    }
}

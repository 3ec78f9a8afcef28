//! Destination path preparation.

use std::fs::{self, OpenOptions};
use std::path::Path;

use log::debug;

use crate::error_handling::SitemapError;

/// Makes sure a sitemap can be written to `path`.
///
/// Missing parent directories are created recursively. A missing file is
/// created empty; an existing file is opened for append, so its contents are
/// left alone until the sitemap is generated.
///
/// # Errors
///
/// * `SitemapError::DirectoryCreation` if the parent directory cannot be created
/// * `SitemapError::Permission` if the file cannot be created or opened for writing
pub(crate) fn prepare_destination(path: &Path) -> Result<(), SitemapError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            debug!("Creating sitemap directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|source| SitemapError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // The handle is dropped at the end of the statement
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SitemapError::Permission {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Sitemap destination ready: {}", path.display());
    Ok(())
}

//! Directory planner: creates the project skeleton.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::DirectoryCatalog;
use crate::error::ScaffoldError;
use crate::progress::Progress;

/// Create `root` and every catalog directory beneath it.
///
/// Existing directories are left alone and are not reported. The first
/// failure aborts with [`ScaffoldError::DirectoryCreationFailed`];
/// directories created before it stay on disk. Returns the catalog paths this
/// call created, in catalog order.
pub fn create_directories(
    root: &Path,
    catalog: &DirectoryCatalog,
    progress: &dyn Progress,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    create_dir(root)?;

    let mut created = Vec::with_capacity(catalog.len());
    for dir in catalog.iter() {
        let path = root.join(dir);
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "directory already present");
            continue;
        }
        create_dir(&path)?;
        tracing::debug!(path = %path.display(), "created directory");
        progress.directory(Path::new(dir));
        created.push(path);
    }
    Ok(created)
}

fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

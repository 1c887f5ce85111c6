//! File materializer: renders catalog templates into the project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::TemplateRegistry;
use crate::catalog::TemplateCatalog;
use crate::context::TemplateContext;
use crate::error::ScaffoldError;
use crate::progress::Progress;
use crate::render::render;

/// Render every catalog entry in order and write it under `root`.
///
/// Files are created or overwritten. The directory planner must already have
/// run: parent directories are not created here. The first error aborts;
/// files written before it are left in place.
pub fn materialize(
    root: &Path,
    catalog: &TemplateCatalog,
    registry: &TemplateRegistry,
    ctx: &TemplateContext,
    progress: &dyn Progress,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut written = Vec::with_capacity(catalog.len());
    for entry in catalog.entries() {
        let body = registry.lookup(&entry.template)?;
        let rendered = render(&entry.template, &body, ctx)?;

        let path = root.join(&entry.destination);
        fs::write(&path, rendered).map_err(|source| ScaffoldError::FileWriteFailed {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            template = %entry.template,
            "wrote file"
        );
        progress.file(Path::new(&entry.destination));
        written.push(path);
    }
    Ok(written)
}

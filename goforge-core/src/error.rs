use std::path::PathBuf;

/// Error type for every stage of the scaffolding pipeline.
///
/// Every stage is fail-fast: the first error aborts the run and nothing
/// already written to disk is removed (unless clean-on-failure was
/// requested explicitly, see [`crate::pipeline::RunOptions`]).
#[derive(Debug)]
pub enum ScaffoldError {
    /// Bad or cancelled user input. Raised before any filesystem mutation.
    InvalidInput(String),
    /// A catalog directory could not be created.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A catalog entry references a template the bundle does not carry.
    TemplateNotFound(String),
    /// A template uses a placeholder the context cannot fill.
    UnresolvedPlaceholder { template: String, placeholder: String },
    /// A rendered file could not be written.
    FileWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An external tool exited non-zero or could not be spawned.
    ExternalToolFailed { step: String, output: String },
}

impl ScaffoldError {
    /// Name of the pipeline step that failed, for diagnostics.
    pub fn step(&self) -> &str {
        match self {
            ScaffoldError::InvalidInput(_) => "resolve input",
            ScaffoldError::DirectoryCreationFailed { .. } => "create directories",
            ScaffoldError::TemplateNotFound(_)
            | ScaffoldError::UnresolvedPlaceholder { .. }
            | ScaffoldError::FileWriteFailed { .. } => "write files",
            ScaffoldError::ExternalToolFailed { step, .. } => step,
        }
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            ScaffoldError::DirectoryCreationFailed { path, source } => {
                write!(f, "Failed to create directory {}: {source}", path.display())
            }
            ScaffoldError::TemplateNotFound(id) => write!(f, "Template not found: {id}"),
            ScaffoldError::UnresolvedPlaceholder {
                template,
                placeholder,
            } => write!(
                f,
                "Unresolved placeholder '{placeholder}' in template {template}"
            ),
            ScaffoldError::FileWriteFailed { path, source } => {
                write!(f, "Failed to write file {}: {source}", path.display())
            }
            ScaffoldError::ExternalToolFailed { step, output } => {
                write!(f, "Step '{step}' failed")?;
                if !output.trim().is_empty() {
                    write!(f, "\nOutput:\n{}", output.trim_end())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::DirectoryCreationFailed { source, .. }
            | ScaffoldError::FileWriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

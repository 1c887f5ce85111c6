//! User settings loaded from `goforge.yaml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "goforge.yaml";

/// Environment variable pointing at an explicit settings file.
pub const SETTINGS_ENV: &str = "GOFORGE_CONFIG";

/// Environment variable overriding `go_binary`.
pub const GO_BINARY_ENV: &str = "GOFORGE_GO";

/// Error type for settings loading.
#[derive(Debug)]
pub enum SettingsError {
    /// The file exists (or was named explicitly) but could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid settings YAML.
    Parse { path: PathBuf, message: String },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Read { path, source } => {
                write!(f, "Cannot read settings {}: {source}", path.display())
            }
            SettingsError::Parse { path, message } => {
                write!(f, "Invalid settings {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Read { source, .. } => Some(source),
            SettingsError::Parse { .. } => None,
        }
    }
}

/// Tool settings. Every key is optional.
///
/// ```yaml
/// go_binary: /usr/local/go/bin/go
/// module_prefix: github.com/acme
/// default_database: PostgreSQL
/// skip_build: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub go_binary: String,
    pub module_prefix: String,
    pub default_database: Option<String>,
    pub skip_build: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            go_binary: "go".into(),
            module_prefix: "github.com/your-username".into(),
            default_database: None,
            skip_build: false,
        }
    }
}

impl Settings {
    /// Load settings for the current process.
    ///
    /// Uses the file named by `GOFORGE_CONFIG` if set (it must exist),
    /// otherwise `goforge.yaml` in the working directory if present,
    /// otherwise defaults. `GOFORGE_GO` is applied last.
    pub fn load() -> Result<Self, SettingsError> {
        let settings = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => {
                let path = Path::new(SETTINGS_FILE);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(settings.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(go) = lookup(GO_BINARY_ENV).filter(|v| !v.trim().is_empty()) {
            self.go_binary = go;
        }
        self
    }

    /// Default module path offered for a project: `<module_prefix>/<name>`.
    pub fn default_module(&self, project_name: &str) -> String {
        let prefix = self.module_prefix.trim_end_matches('/');
        if prefix.is_empty() {
            project_name.to_string()
        } else {
            format!("{prefix}/{project_name}")
        }
    }
}

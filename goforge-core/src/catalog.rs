//! Fixed catalogs describing the generated project layout.

use std::path::Path;

/// Subdirectories of a generated project, relative to its root.
const PROJECT_DIRECTORIES: &[&str] = &[
    "cmd/api",
    "api/v1/handler",
    "api/v1/request",
    "api/v1/response",
    "api/openapi",
    "internal/category",
    "internal/hello",
    "pkg/config",
    "pkg/database",
    "migrations",
    "logs",
];

/// Destination path → template identifier, in write order.
const PROJECT_TEMPLATES: &[(&str, &str)] = &[
    (".gitignore", "gitignore.tmpl"),
    (".mockery.yaml", "mockery.yaml.tmpl"),
    ("go.mod", "go.mod.tmpl"),
    ("config.yaml", "config.yaml.tmpl"),
    ("cmd/api/main.go", "main.go.tmpl"),
    ("cmd/api/wire.go", "wire.go.tmpl"),
    ("pkg/config/config.go", "config.go.tmpl"),
    ("pkg/database/database.go", "database.go.tmpl"),
    ("api/v1/router.go", "router.go.tmpl"),
    ("api/v1/handler/hello.go", "hello_handler.go.tmpl"),
    ("api/v1/response/response.go", "response.go.tmpl"),
    ("internal/hello/service.go", "hello_service.go.tmpl"),
    ("internal/hello/repository.go", "hello_repository.go.tmpl"),
    ("api/openapi/openapi.yaml", "openapi.yaml.tmpl"),
    ("migrations/.gitkeep", "gitkeep.tmpl"),
    ("logs/.gitkeep", "gitkeep.tmpl"),
];

/// Ordered set of relative directories making up the project skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCatalog {
    dirs: Vec<String>,
}

impl DirectoryCatalog {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for dir in dirs {
            let dir = dir.into();
            if !out.contains(&dir) {
                out.push(dir);
            }
        }
        Self { dirs: out }
    }

    /// The skeleton bundled with goforge.
    pub fn project() -> Self {
        Self::new(PROJECT_DIRECTORIES.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Whether `dir` is the root (empty) or one of the catalog directories
    /// or an intermediate segment of one.
    pub fn covers(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty()
            || self
                .dirs
                .iter()
                .any(|d| Path::new(d).starts_with(dir))
    }
}

/// One `(destination, template identifier)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalogEntry {
    pub destination: String,
    pub template: String,
}

impl TemplateCatalogEntry {
    pub fn new(destination: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            template: template.into(),
        }
    }
}

/// Ordered list of files to materialize. Iteration order is write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: Vec<TemplateCatalogEntry>,
}

impl TemplateCatalog {
    pub fn new(entries: Vec<TemplateCatalogEntry>) -> Self {
        Self { entries }
    }

    /// The file set bundled with goforge.
    pub fn project() -> Self {
        Self::new(
            PROJECT_TEMPLATES
                .iter()
                .map(|(dest, id)| TemplateCatalogEntry::new(*dest, *id))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TemplateCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destinations whose parent directory is not covered by `dirs`.
    pub fn uncovered_destinations(&self, dirs: &DirectoryCatalog) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| {
                let parent = Path::new(&e.destination)
                    .parent()
                    .unwrap_or_else(|| Path::new(""));
                !dirs.covers(parent)
            })
            .map(|e| e.destination.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_destination_lands_in_a_catalog_directory() {
        let dirs = DirectoryCatalog::project();
        let templates = TemplateCatalog::project();
        assert!(templates.uncovered_destinations(&dirs).is_empty());
    }

    #[test]
    fn uncovered_destination_is_reported() {
        let dirs = DirectoryCatalog::new(["cmd/api"]);
        let templates = TemplateCatalog::new(vec![
            TemplateCatalogEntry::new("go.mod", "go.mod.tmpl"),
            TemplateCatalogEntry::new("cmd/main.go", "main.go.tmpl"),
            TemplateCatalogEntry::new("pkg/x.go", "x.tmpl"),
        ]);
        assert_eq!(templates.uncovered_destinations(&dirs), vec!["pkg/x.go"]);
    }

    #[test]
    fn directory_catalog_drops_duplicates() {
        let dirs = DirectoryCatalog::new(["a", "b", "a"]);
        assert_eq!(dirs.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}

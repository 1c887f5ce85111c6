//! Context resolution: turns raw user choices into a [`TemplateContext`].

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::error::ScaffoldError;

const POSTGRES_DSN: &str =
    "host=localhost user=your_user password=your_password dbname=your_dbname port=5432 sslmode=disable";
const MYSQL_DSN: &str =
    "your_user:your_password@tcp(127.0.0.1:3306)/your_dbname?charset=utf8mb4&parseTime=True&loc=Local";

/// Supported database backends for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Postgres,
    Mysql,
    /// No driver is installed; the user wires one in by hand.
    None,
}

impl Database {
    /// All selectable backends, in prompt order.
    pub const ALL: [Database; 3] = [Database::Postgres, Database::Mysql, Database::None];

    pub fn label(&self) -> &'static str {
        match self {
            Database::Postgres => "PostgreSQL",
            Database::Mysql => "MySQL",
            Database::None => "None",
        }
    }

    /// Label shown in the interactive backend selector.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Database::None => "Other (manual install)",
            other => other.label(),
        }
    }

    /// GORM driver identifier.
    pub fn driver(&self) -> &'static str {
        match self {
            Database::Postgres => "postgres",
            Database::Mysql => "mysql",
            Database::None => "none",
        }
    }

    /// Go import path of the driver package, if the backend has one.
    pub fn driver_import(&self) -> Option<&'static str> {
        match self {
            Database::Postgres => Some("gorm.io/driver/postgres"),
            Database::Mysql => Some("gorm.io/driver/mysql"),
            Database::None => None,
        }
    }

    /// Connection string template written to the generated config file.
    ///
    /// `None` falls back to the PostgreSQL shape.
    pub fn dsn(&self) -> &'static str {
        match self {
            Database::Mysql => MYSQL_DSN,
            Database::Postgres | Database::None => POSTGRES_DSN,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Database {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(Database::Postgres),
            "mysql" => Ok(Database::Mysql),
            "none" | "other" | "other (manual install)" => Ok(Database::None),
            _ => Err(ScaffoldError::InvalidInput(format!(
                "Unknown database '{s}'. Available: PostgreSQL, MySQL, None"
            ))),
        }
    }
}

/// Resolved substitution values used to render every template.
///
/// Backend-derived fields are never stored; they are always computed from
/// the selected [`Database`], so they cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    project_name: String,
    module_path: String,
    database: Database,
}

impl TemplateContext {
    /// Validate raw input and build a context for a project under `parent`.
    ///
    /// Fails with [`ScaffoldError::InvalidInput`] when the project name is
    /// empty or not a single path segment, when `parent/<name>` exists and is
    /// a file or a non-empty directory, when the module path is blank or
    /// contains whitespace, or when `database` is not a known backend.
    /// Reads the filesystem but never modifies it.
    pub fn resolve(
        parent: &Path,
        project_name: &str,
        module_path: &str,
        database: &str,
    ) -> Result<Self, ScaffoldError> {
        let database = database.parse::<Database>()?;
        let context = Self::new(project_name, module_path, database)?;
        check_target_free(&parent.join(&context.project_name), &context.project_name)?;
        Ok(context)
    }

    /// Build a context from already-parsed values, without touching the
    /// filesystem.
    pub fn new(
        project_name: &str,
        module_path: &str,
        database: Database,
    ) -> Result<Self, ScaffoldError> {
        validate_project_name(project_name)?;
        validate_module_path(module_path)?;
        Ok(Self {
            project_name: project_name.to_string(),
            module_path: module_path.to_string(),
            database,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn database(&self) -> Database {
        self.database
    }

    pub fn db_driver(&self) -> &'static str {
        self.database.driver()
    }

    pub fn db_import(&self) -> Option<&'static str> {
        self.database.driver_import()
    }

    pub fn db_dsn(&self) -> &'static str {
        self.database.dsn()
    }

    /// Value for a template placeholder, or `None` if the name is unknown.
    pub fn lookup(&self, placeholder: &str) -> Option<&str> {
        match placeholder {
            "project_name" => Some(&self.project_name),
            "module_path" => Some(&self.module_path),
            "database" => Some(self.database.label()),
            "db_driver" => Some(self.db_driver()),
            "db_import" => Some(self.db_import().unwrap_or("gorm.io/driver/<your-driver>")),
            "db_dsn" => Some(self.db_dsn()),
            _ => None,
        }
    }
}

fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::InvalidInput(
            "Project name must not be empty".into(),
        ));
    }
    if name.chars().any(|c| c.is_control() || c == '/' || c == '\\') {
        return Err(ScaffoldError::InvalidInput(format!(
            "Project name '{name}' must be a single directory name"
        )));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ScaffoldError::InvalidInput(format!(
            "Project name '{name}' must be a single directory name"
        ))),
    }
}

fn validate_module_path(module_path: &str) -> Result<(), ScaffoldError> {
    if module_path.trim().is_empty() {
        return Err(ScaffoldError::InvalidInput(
            "Module path must not be empty".into(),
        ));
    }
    if module_path.chars().any(char::is_whitespace) {
        return Err(ScaffoldError::InvalidInput(format!(
            "Module path '{module_path}' must not contain whitespace"
        )));
    }
    Ok(())
}

fn check_target_free(root: &Path, name: &str) -> Result<(), ScaffoldError> {
    if !root.exists() {
        return Ok(());
    }
    if !root.is_dir() {
        return Err(ScaffoldError::InvalidInput(format!(
            "'{name}' already exists and is not a directory"
        )));
    }
    let mut entries = std::fs::read_dir(root).map_err(|e| {
        ScaffoldError::InvalidInput(format!("Cannot inspect existing directory '{name}': {e}"))
    })?;
    if entries.next().is_some() {
        return Err(ScaffoldError::InvalidInput(format!(
            "Directory '{name}' already exists and is not empty"
        )));
    }
    Ok(())
}

use goforge_core::{Database, ScaffoldError, TemplateContext};
use std::fs;
use tempfile::TempDir;

fn entries(dir: &std::path::Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn resolve_fresh_project() {
    let tmp = TempDir::new().unwrap();

    let ctx = TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "PostgreSQL").unwrap();

    assert_eq!(ctx.project_name(), "demo");
    assert_eq!(ctx.module_path(), "example.com/demo");
    assert_eq!(ctx.database(), Database::Postgres);
    assert_eq!(ctx.db_driver(), "postgres");
    assert_eq!(ctx.db_import(), Some("gorm.io/driver/postgres"));
    assert!(ctx.db_dsn().contains("sslmode=disable"));
}

#[test]
fn resolve_does_not_touch_filesystem() {
    let tmp = TempDir::new().unwrap();

    TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "MySQL").unwrap();

    assert_eq!(entries(tmp.path()), 0);
}

#[test]
fn resolve_accepts_existing_empty_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();

    assert!(TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "None").is_ok());
}

#[test]
fn resolve_rejects_non_empty_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo")).unwrap();
    fs::write(tmp.path().join("demo/keep.txt"), "x").unwrap();

    let err = TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "PostgreSQL").unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidInput(_)));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(entries(&tmp.path().join("demo")), 1);
}

#[test]
fn resolve_rejects_existing_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("demo"), "not a dir").unwrap();

    let err = TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "PostgreSQL").unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidInput(_)));
}

#[test]
fn resolve_rejects_empty_name() {
    let tmp = TempDir::new().unwrap();

    let err = TemplateContext::resolve(tmp.path(), "", "example.com/demo", "PostgreSQL").unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidInput(_)));
}

#[test]
fn resolve_rejects_unknown_database() {
    let tmp = TempDir::new().unwrap();

    let err = TemplateContext::resolve(tmp.path(), "demo", "example.com/demo", "Oracle").unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidInput(_)));
    assert!(err.to_string().contains("Oracle"));
}

#[test]
fn resolve_rejects_blank_module_path() {
    let tmp = TempDir::new().unwrap();

    assert!(TemplateContext::resolve(tmp.path(), "demo", "  ", "MySQL").is_err());
    assert!(TemplateContext::resolve(tmp.path(), "demo", "example.com/my demo", "MySQL").is_err());
}

#[test]
fn derived_fields_follow_the_selector() {
    let pg = TemplateContext::new("a", "m", Database::Postgres).unwrap();
    let my = TemplateContext::new("a", "m", Database::Mysql).unwrap();
    let none = TemplateContext::new("a", "m", Database::None).unwrap();

    assert_eq!(
        pg.db_dsn(),
        "host=localhost user=your_user password=your_password dbname=your_dbname port=5432 sslmode=disable"
    );
    assert_eq!(
        my.db_dsn(),
        "your_user:your_password@tcp(127.0.0.1:3306)/your_dbname?charset=utf8mb4&parseTime=True&loc=Local"
    );
    assert_eq!(none.db_dsn(), pg.db_dsn());
    assert_eq!(my.lookup("db_driver"), Some("mysql"));
    assert_eq!(none.lookup("db_driver"), Some("none"));
    assert_eq!(none.db_import(), None);
    assert_eq!(pg.lookup("nope"), None);
}

use goforge_core::materializer::materialize;
use goforge_core::render::render;
use goforge_core::{
    Database, DirectoryCatalog, MemoryTemplates, Recorder, ScaffoldError, Silent, TemplateCatalog,
    TemplateCatalogEntry, TemplateContext, TemplateRegistry,
};
use std::fs;
use tempfile::TempDir;

fn ctx(database: Database) -> TemplateContext {
    TemplateContext::new("demo", "example.com/demo", database).unwrap()
}

fn prepare_root(tmp: &TempDir) -> std::path::PathBuf {
    let root = tmp.path().join("demo");
    goforge_core::planner::create_directories(&root, &DirectoryCatalog::project(), &Silent).unwrap();
    root
}

// ── Embedded bundle ─────────────────────────────────────────────────

#[test]
fn embedded_bundle_carries_every_catalog_template() {
    let registry = TemplateRegistry::embedded();
    for entry in TemplateCatalog::project().entries() {
        assert!(
            registry.lookup(&entry.template).is_ok(),
            "missing template {}",
            entry.template
        );
    }
}

#[test]
fn embedded_templates_render_for_every_backend() {
    let registry = TemplateRegistry::embedded();
    for database in Database::ALL {
        let ctx = ctx(database);
        for entry in TemplateCatalog::project().entries() {
            let body = registry.lookup(&entry.template).unwrap();
            render(&entry.template, &body, &ctx)
                .unwrap_or_else(|e| panic!("{} failed for {database}: {e}", entry.template));
        }
    }
}

#[test]
fn rendering_is_deterministic() {
    let registry = TemplateRegistry::embedded();
    let ctx = ctx(Database::Mysql);
    let body = registry.lookup("config.yaml.tmpl").unwrap();

    let first = render("config.yaml.tmpl", &body, &ctx).unwrap();
    let second = render("config.yaml.tmpl", &body, &ctx).unwrap();

    assert_eq!(first.as_bytes(), second.as_bytes());
}

// ── Materializer ────────────────────────────────────────────────────

#[test]
fn materialize_writes_catalog_in_order() {
    let tmp = TempDir::new().unwrap();
    let root = prepare_root(&tmp);
    let recorder = Recorder::new();

    let written = materialize(
        &root,
        &TemplateCatalog::project(),
        &TemplateRegistry::embedded(),
        &ctx(Database::Postgres),
        &recorder,
    )
    .unwrap();

    assert_eq!(written.len(), TemplateCatalog::project().len());
    let expected: Vec<String> = TemplateCatalog::project()
        .entries()
        .iter()
        .map(|e| format!("file:{}", e.destination))
        .collect();
    assert_eq!(recorder.events(), expected);

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.com/demo\n"));
}

#[test]
fn materialize_overwrites_existing_files() {
    let tmp = TempDir::new().unwrap();
    let root = prepare_root(&tmp);
    fs::write(root.join("go.mod"), "stale").unwrap();

    materialize(
        &root,
        &TemplateCatalog::project(),
        &TemplateRegistry::embedded(),
        &ctx(Database::Postgres),
        &Silent,
    )
    .unwrap();

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(!go_mod.contains("stale"));
}

#[test]
fn missing_template_stops_before_later_entries() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir_all(&root).unwrap();

    let registry = TemplateRegistry::new(
        MemoryTemplates::new()
            .with("first.tmpl", "first {{project_name}}")
            .with("third.tmpl", "third"),
    );
    let catalog = TemplateCatalog::new(vec![
        TemplateCatalogEntry::new("first.txt", "first.tmpl"),
        TemplateCatalogEntry::new("second.txt", "second.tmpl"),
        TemplateCatalogEntry::new("third.txt", "third.tmpl"),
    ]);

    let err = materialize(&root, &catalog, &registry, &ctx(Database::None), &Silent).unwrap_err();

    match err {
        ScaffoldError::TemplateNotFound(id) => assert_eq!(id, "second.tmpl"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(root.join("first.txt")).unwrap(), "first demo");
    assert!(!root.join("second.txt").exists());
    assert!(!root.join("third.txt").exists());
}

#[test]
fn unresolved_placeholder_is_not_written() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir_all(&root).unwrap();

    let registry = TemplateRegistry::new(MemoryTemplates::new().with("bad.tmpl", "{{author}}"));
    let catalog = TemplateCatalog::new(vec![TemplateCatalogEntry::new("bad.txt", "bad.tmpl")]);

    let err = materialize(&root, &catalog, &registry, &ctx(Database::None), &Silent).unwrap_err();

    assert!(matches!(err, ScaffoldError::UnresolvedPlaceholder { ref placeholder, .. } if placeholder == "author"));
    assert!(!root.join("bad.txt").exists());
}

#[test]
fn missing_parent_directory_is_a_write_failure() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    fs::create_dir_all(&root).unwrap();

    let registry = TemplateRegistry::new(MemoryTemplates::new().with("x.tmpl", "x"));
    let catalog = TemplateCatalog::new(vec![TemplateCatalogEntry::new("nowhere/x.txt", "x.tmpl")]);

    let err = materialize(&root, &catalog, &registry, &ctx(Database::None), &Silent).unwrap_err();

    assert!(matches!(err, ScaffoldError::FileWriteFailed { .. }));
    assert_eq!(err.step(), "write files");
}

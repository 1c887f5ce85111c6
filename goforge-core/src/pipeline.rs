//! The scaffolding pipeline: planner → materializer → orchestrator.

use std::path::{Path, PathBuf};

use crate::bundle::TemplateRegistry;
use crate::catalog::{DirectoryCatalog, TemplateCatalog, TemplateCatalogEntry};
use crate::context::TemplateContext;
use crate::error::ScaffoldError;
use crate::materializer::materialize;
use crate::orchestrator::{plan_steps, run_steps, CommandRunner, DependencySpec, GenerationStep, SystemRunner};
use crate::planner::create_directories;
use crate::progress::{Cleanup, Progress, Stage};

/// Per-run switches. The default is a full run that leaves partial output
/// on disk when it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute the plan only. No filesystem writes, no external tools.
    pub dry_run: bool,
    /// Stop after the files are written.
    pub skip_build: bool,
    /// Remove the project root on failure, if this run created it.
    pub clean_on_failure: bool,
    /// Go toolchain used for the build steps.
    pub go_binary: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            skip_build: false,
            clean_on_failure: false,
            go_binary: "go".into(),
        }
    }
}

/// Everything a run would do, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<TemplateCatalogEntry>,
    pub steps: Vec<GenerationStep>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub plan: Plan,
    pub dry_run: bool,
    /// Catalog directories this run created. Ones already on disk are left out.
    pub directories_created: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
    pub steps_run: usize,
}

impl ScaffoldReport {
    pub fn root(&self) -> &Path {
        &self.plan.root
    }
}

/// The scaffolding engine.
///
/// Construct it with a template registry, optionally swap the catalogs or
/// the command runner, then call [`Scaffolder::run`] once per project.
pub struct Scaffolder<R = SystemRunner> {
    registry: TemplateRegistry,
    directories: DirectoryCatalog,
    templates: TemplateCatalog,
    runner: R,
}

impl Scaffolder<SystemRunner> {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            directories: DirectoryCatalog::project(),
            templates: TemplateCatalog::project(),
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Scaffolder<R> {
    pub fn with_runner<R2: CommandRunner>(self, runner: R2) -> Scaffolder<R2> {
        Scaffolder {
            registry: self.registry,
            directories: self.directories,
            templates: self.templates,
            runner,
        }
    }

    pub fn with_directories(mut self, directories: DirectoryCatalog) -> Self {
        self.directories = directories;
        self
    }

    pub fn with_templates(mut self, templates: TemplateCatalog) -> Self {
        self.templates = templates;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Compute what [`Scaffolder::run`] would do for `ctx` under `parent`.
    pub fn plan(&self, ctx: &TemplateContext, parent: &Path, opts: &RunOptions) -> Plan {
        let root = parent.join(ctx.project_name());
        let steps = if opts.skip_build {
            Vec::new()
        } else {
            plan_steps(&root, &DependencySpec::for_database(ctx.database()), &opts.go_binary)
        };
        Plan {
            directories: self.directories.iter().map(str::to_string).collect(),
            files: self.templates.entries().to_vec(),
            steps,
            root,
        }
    }

    /// Generate the project for `ctx` as `parent/<project name>`.
    ///
    /// Stages run strictly in sequence and the first error aborts the run.
    /// Partial output stays on disk unless `opts.clean_on_failure` is set
    /// and the project root did not exist before the run. On failure the
    /// outcome is reported once through [`Progress::aborted`].
    pub fn run(
        &self,
        ctx: &TemplateContext,
        parent: &Path,
        opts: &RunOptions,
        progress: &dyn Progress,
    ) -> Result<ScaffoldReport, ScaffoldError> {
        let plan = self.plan(ctx, parent, opts);
        tracing::info!(
            project = ctx.project_name(),
            module = ctx.module_path(),
            database = %ctx.database(),
            root = %plan.root.display(),
            dry_run = opts.dry_run,
            "scaffolding project"
        );

        if opts.dry_run {
            return Ok(ScaffoldReport {
                plan,
                dry_run: true,
                directories_created: Vec::new(),
                files_written: Vec::new(),
                steps_run: 0,
            });
        }

        let root_existed = plan.root.exists();
        match self.execute(ctx, &plan, progress) {
            Ok((directories_created, files_written, steps_run)) => {
                tracing::info!(
                    root = %plan.root.display(),
                    directories = directories_created.len(),
                    files = files_written.len(),
                    steps = steps_run,
                    "project ready"
                );
                Ok(ScaffoldReport {
                    plan,
                    dry_run: false,
                    directories_created,
                    files_written,
                    steps_run,
                })
            }
            Err(err) => {
                tracing::warn!(step = err.step(), error = %err, "scaffolding aborted");
                let cleanup = if opts.clean_on_failure && !root_existed {
                    clean_up(&plan.root)
                } else {
                    Cleanup::Kept
                };
                progress.aborted(&err, &plan.root, cleanup);
                Err(err)
            }
        }
    }

    fn execute(
        &self,
        ctx: &TemplateContext,
        plan: &Plan,
        progress: &dyn Progress,
    ) -> Result<(Vec<PathBuf>, Vec<PathBuf>, usize), ScaffoldError> {
        progress.stage(Stage::Directories);
        let dirs = create_directories(&plan.root, &self.directories, progress)?;
        progress.stage_done(Stage::Directories);

        progress.stage(Stage::Files);
        let files = materialize(&plan.root, &self.templates, &self.registry, ctx, progress)?;
        progress.stage_done(Stage::Files);

        let steps = run_steps(&plan.steps, &self.runner, progress)?;
        Ok((dirs, files, steps))
    }
}

fn clean_up(root: &Path) -> Cleanup {
    match std::fs::remove_dir_all(root) {
        Ok(()) => {
            tracing::info!(root = %root.display(), "removed partial project");
            Cleanup::Removed
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Cleanup::Removed,
        Err(e) => {
            tracing::warn!(
                root = %root.display(),
                error = %e,
                "could not remove partial project"
            );
            Cleanup::RemovalFailed
        }
    }
}

//! Build orchestrator: post-materialization external tools.
//!
//! Tools are opaque. A step is a program, its arguments and a working
//! directory; a zero exit status is success and anything else aborts the run.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::context::Database;
use crate::error::ScaffoldError;
use crate::progress::{Progress, Stage};

/// Packages every generated project needs, in fetch order.
const STATIC_DEPENDENCIES: &[&str] = &[
    "github.com/gin-gonic/gin",
    "github.com/spf13/viper",
    "gorm.io/gorm",
    "github.com/google/wire/cmd/wire",
    "github.com/stretchr/testify",
    "github.com/vektra/mockery/v2/...@latest",
];

/// Ordered package identifiers to fetch for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    packages: Vec<String>,
}

impl DependencySpec {
    /// Static packages followed by the backend driver, if any.
    pub fn for_database(database: Database) -> Self {
        let mut packages: Vec<String> = STATIC_DEPENDENCIES.iter().map(|p| p.to_string()).collect();
        if let Some(driver) = database.driver_import() {
            packages.push(driver.to_string());
        }
        Self { packages }
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }
}

/// One external command run inside the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStep {
    pub name: String,
    pub stage: Stage,
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl GenerationStep {
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Exit status and output of a finished tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    /// stdout and stderr as the tool interleaved them. [`SystemRunner`]
    /// points both streams at one pipe, so the order is the order of the
    /// tool's writes.
    pub output: String,
}

/// Runs a step to completion, blocking the caller.
pub trait CommandRunner {
    fn run(&self, step: &GenerationStep) -> std::io::Result<ToolOutput>;
}

/// Spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, step: &GenerationStep) -> std::io::Result<ToolOutput> {
        let (mut reader, writer) = std::io::pipe()?;
        // The temporary `Command` owns both write ends and is dropped at the
        // end of this statement, so the read below sees EOF once the child exits.
        let mut child = Command::new(&step.program)
            .args(&step.args)
            .current_dir(&step.working_dir)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer)
            .spawn()?;

        let mut bytes = Vec::new();
        let read = reader.read_to_end(&mut bytes);
        let status = child.wait()?;
        read?;

        Ok(ToolOutput {
            success: status.success(),
            output: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Build the step list for a project: one `go get` per package, then
/// `go generate ./...`.
pub fn plan_steps(root: &Path, deps: &DependencySpec, go_binary: &str) -> Vec<GenerationStep> {
    let mut steps: Vec<GenerationStep> = deps
        .packages()
        .iter()
        .map(|pkg| GenerationStep {
            name: format!("go get {pkg}"),
            stage: Stage::Dependencies,
            program: go_binary.to_string(),
            args: vec!["get".into(), pkg.clone()],
            working_dir: root.to_path_buf(),
        })
        .collect();

    steps.push(GenerationStep {
        name: "go generate".into(),
        stage: Stage::Generate,
        program: go_binary.to_string(),
        args: vec!["generate".into(), "./...".into()],
        working_dir: root.to_path_buf(),
    });
    steps
}

/// Run `steps` strictly in order. Stops at the first failure.
///
/// Returns the number of steps that ran successfully.
pub fn run_steps(
    steps: &[GenerationStep],
    runner: &dyn CommandRunner,
    progress: &dyn Progress,
) -> Result<usize, ScaffoldError> {
    let mut current: Option<Stage> = None;

    for (done, step) in steps.iter().enumerate() {
        if current != Some(step.stage) {
            if let Some(prev) = current {
                progress.stage_done(prev);
            }
            progress.stage(step.stage);
            current = Some(step.stage);
        }
        progress.step(&step.name);
        tracing::debug!(
            step = %step.name,
            command = %step.command_line(),
            cwd = %step.working_dir.display(),
            "running external tool"
        );

        let result = runner.run(step).map_err(|e| ScaffoldError::ExternalToolFailed {
            step: step.name.clone(),
            output: format!("failed to start '{}': {e}", step.program),
        })?;

        if !result.success {
            tracing::warn!(step = %step.name, completed = done, "external tool failed");
            return Err(ScaffoldError::ExternalToolFailed {
                step: step.name.clone(),
                output: result.output,
            });
        }
    }

    if let Some(last) = current {
        progress.stage_done(last);
    }
    Ok(steps.len())
}

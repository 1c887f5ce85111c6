use colored::Colorize;
use dialoguer::{Input, Select};
use goforge_core::{
    CommandRunner, Database, RunOptions, ScaffoldError, ScaffoldReport, Scaffolder, SystemRunner,
    TemplateContext, TemplateRegistry,
};
use std::path::Path;

use crate::console::ConsoleProgress;
use crate::settings::Settings;

/// Raw CLI flags for `goforge init`, before prompting and validation.
#[derive(Debug, Clone, Default)]
pub struct CliInitOpts {
    pub module: Option<String>,
    pub db: Option<String>,
    pub no_interactive: bool,
    pub dry_run: bool,
    pub skip_build: bool,
    pub clean_on_failure: bool,
    pub verbose: bool,
}

/// Create a new Go project named `name` in the current directory.
///
/// Missing module path and database are prompted for with `dialoguer`
/// unless `--no-interactive` is given, in which case the settings defaults
/// are used. Dependencies are fetched and `go generate` runs unless
/// `--skip-build` (or `skip_build` in the settings) is set.
pub fn run(name: &str, cli_opts: CliInitOpts) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    run_with(name, cli_opts, &settings, SystemRunner).map(|_| ())
}

/// [`run`] with explicit settings and command runner.
pub fn run_with<R: CommandRunner>(
    name: &str,
    cli_opts: CliInitOpts,
    settings: &Settings,
    runner: R,
) -> Result<ScaffoldReport, Box<dyn std::error::Error>> {
    let parent = Path::new(".");
    let (module, database) = collect_choices(name, &cli_opts, settings)?;
    let ctx = TemplateContext::resolve(parent, name, &module, &database)?;

    println!(
        "{} Creating a new project named: {}",
        "->".blue(),
        ctx.project_name().green()
    );
    println!("   - Module:   {}", ctx.module_path().cyan());
    println!("   - Database: {}", ctx.database().label().cyan());

    let opts = RunOptions {
        dry_run: cli_opts.dry_run,
        skip_build: cli_opts.skip_build || settings.skip_build,
        clean_on_failure: cli_opts.clean_on_failure,
        go_binary: settings.go_binary.clone(),
    };
    let progress = ConsoleProgress {
        verbose: cli_opts.verbose,
    };

    let report = Scaffolder::new(TemplateRegistry::embedded())
        .with_runner(runner)
        .run(&ctx, parent, &opts, &progress)?;

    if report.dry_run {
        print_plan(&report);
    } else {
        print_summary(&ctx, &report);
    }
    Ok(report)
}

fn collect_choices(
    name: &str,
    cli_opts: &CliInitOpts,
    settings: &Settings,
) -> Result<(String, String), ScaffoldError> {
    let module = match &cli_opts.module {
        Some(module) => module.clone(),
        None if cli_opts.no_interactive => settings.default_module(name),
        None => prompt_module(name, settings)?,
    };

    let database = match &cli_opts.db {
        Some(db) => db.clone(),
        None if cli_opts.no_interactive => settings
            .default_database
            .clone()
            .unwrap_or_else(|| Database::None.label().to_string()),
        None => prompt_database(settings)?,
    };

    Ok((module, database))
}

fn prompt_module(name: &str, settings: &Settings) -> Result<String, ScaffoldError> {
    Input::<String>::new()
        .with_prompt("Enter the Go module name")
        .default(settings.default_module(name))
        .interact_text()
        .map_err(cancelled)
}

fn prompt_database(settings: &Settings) -> Result<String, ScaffoldError> {
    let labels: Vec<&str> = Database::ALL.iter().map(Database::prompt_label).collect();
    let default = settings
        .default_database
        .as_deref()
        .and_then(|d| d.parse::<Database>().ok())
        .and_then(|d| Database::ALL.iter().position(|c| *c == d))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Select the database you will use")
        .items(&labels)
        .default(default)
        .interact()
        .map_err(cancelled)?;
    Ok(Database::ALL[idx].label().to_string())
}

fn cancelled(err: dialoguer::Error) -> ScaffoldError {
    tracing::debug!(error = %err, "prompt aborted");
    ScaffoldError::InvalidInput(format!("Operation cancelled ({err})"))
}

fn print_plan(report: &ScaffoldReport) {
    let plan = &report.plan;
    println!();
    println!(
        "{} Dry run: nothing was written to {}",
        "!".yellow(),
        plan.root.display()
    );
    println!("  Directories:");
    for dir in &plan.directories {
        println!("    {dir}/");
    }
    println!("  Files:");
    for entry in &plan.files {
        println!("    {} {}", entry.destination, format!("<- {}", entry.template).dimmed());
    }
    if !plan.steps.is_empty() {
        println!("  Commands:");
        for step in &plan.steps {
            println!("    {}", step.command_line());
        }
    }
}

fn print_summary(ctx: &TemplateContext, report: &ScaffoldReport) {
    println!();
    if report.steps_run > 0 {
        println!(
            "{} Project '{}' ready to run! All dependencies installed and code generated.",
            "✓".green(),
            ctx.project_name().green()
        );
    } else {
        println!(
            "{} Project '{}' created ({} directories, {} files).",
            "✓".green(),
            ctx.project_name().green(),
            report.directories_created.len(),
            report.files_written.len()
        );
    }
    println!();
    println!("Next steps:");
    println!("  cd {}", ctx.project_name());
    if report.steps_run == 0 {
        println!("  go mod tidy");
        println!("  go generate ./...");
    }
    println!("  go run cmd/api/main.go");
    println!();
    println!(
        "  Hello:    {}",
        "http://localhost:8080/api/v1/hello".cyan()
    );
    if ctx.database() == Database::None {
        println!(
            "  {} No database driver installed. Add one with `go get gorm.io/driver/<name>`.",
            "!".yellow()
        );
    }
}

//! Terminal output: colored progress lines and the tracing subscriber.

use std::path::Path;

use colored::Colorize;
use goforge_core::{Cleanup, Progress, ScaffoldError, Stage};
use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with progress on stdout.
/// `RUST_LOG` wins over the default filter.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "goforge_core=debug,goforge_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints pipeline progress to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress {
    /// Also list every directory and file as it is created.
    pub verbose: bool,
}

impl Progress for ConsoleProgress {
    fn stage(&self, stage: Stage) {
        println!("{} {}...", "->".blue(), stage.describe());
    }

    fn directory(&self, path: &Path) {
        if self.verbose {
            println!("   {}/", path.display().to_string().dimmed());
        }
    }

    fn file(&self, path: &Path) {
        if self.verbose {
            println!("   {}", path.display().to_string().dimmed());
        }
    }

    fn step(&self, name: &str) {
        println!("   - {}", name.dimmed());
    }

    fn stage_done(&self, stage: Stage) {
        if matches!(stage, Stage::Dependencies | Stage::Generate) {
            println!("{} {}", "✓".green(), done_message(stage));
        }
    }

    fn aborted(&self, error: &ScaffoldError, root: &Path, cleanup: Cleanup) {
        eprintln!("{} {} failed", "x".red(), error.step());
        match cleanup {
            Cleanup::Removed => eprintln!("  Partial project removed."),
            Cleanup::Kept => eprintln!(
                "  Partial project left in {} for inspection.",
                root.display()
            ),
            Cleanup::RemovalFailed => eprintln!(
                "  Could not remove partial project in {}; remove it by hand.",
                root.display()
            ),
        }
    }
}

fn done_message(stage: Stage) -> &'static str {
    match stage {
        Stage::Dependencies => "Dependencies installed",
        Stage::Generate => "Code generation complete",
        Stage::Directories => "Directories created",
        Stage::Files => "Files written",
    }
}

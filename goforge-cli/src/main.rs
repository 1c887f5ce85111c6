use clap::{Parser, Subcommand};
use goforge_cli::commands::init::{self, CliInitOpts};
use goforge_cli::console;

#[derive(Parser)]
#[command(name = "goforge", version, about = "goforge CLI — scaffold Go modular services")]
struct Cli {
    /// Show every directory and file as it is created, and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Go modular monolith project
    Init {
        /// Project name (directory to create)
        name: String,
        /// Go module path (e.g. github.com/acme/shop)
        #[arg(long)]
        module: Option<String>,
        /// Database backend: postgres, mysql or none
        #[arg(long)]
        db: Option<String>,
        /// Never prompt; use settings defaults for missing values
        #[arg(long)]
        no_interactive: bool,
        /// Print the plan without writing files or running tools
        #[arg(long)]
        dry_run: bool,
        /// Skip `go get` and `go generate`
        #[arg(long)]
        skip_build: bool,
        /// Remove the project directory if any stage fails
        #[arg(long)]
        clean_on_failure: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    console::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            name,
            module,
            db,
            no_interactive,
            dry_run,
            skip_build,
            clean_on_failure,
        } => init::run(
            &name,
            CliInitOpts {
                module,
                db,
                no_interactive,
                dry_run,
                skip_build,
                clean_on_failure,
                verbose: cli.verbose,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}

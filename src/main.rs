// Use modules from the library crate
use volt_vue::{VoltError, commands, config, logging};

use anyhow::{Context, Result};
use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "volt-vue",
    about = "Add PrimeVue Volt components to your project",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Show detailed error messages and diagnostics
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add the specified Volt component(s) to your project
    ///
    /// Components that a requested component imports are added as well,
    /// unless --no-deps is given. The shared utils module is always added.
    ///
    /// Examples:
    ///   volt-vue add button                 # Add button to src/volt
    ///   volt-vue add panel button           # Add several components
    ///   volt-vue add --no-src-dir button    # Add button to ./volt
    ///   volt-vue add --outdir lib button    # Add button to lib/volt
    ///   volt-vue add --no-deps panel        # Add panel without dependencies
    ///   volt-vue add all                    # Add all components
    Add {
        /// Component name(s) or "all" for all components
        #[arg(required = true, value_name = "COMPONENTS")]
        components: Vec<String>,

        /// Install to root directory instead of src directory
        #[arg(long)]
        no_src_dir: bool,

        /// Specify output directory (overrides --no-src-dir)
        #[arg(long, value_name = "DIRECTORY")]
        outdir: Option<PathBuf>,

        /// Don't automatically install dependencies
        #[arg(long)]
        no_deps: bool,

        /// Use a local checkout of the component library instead of cloning
        #[arg(long, value_name = "PATH", conflicts_with = "repository")]
        source: Option<PathBuf>,

        /// Clone from this repository instead of the configured one
        #[arg(long, value_name = "URL")]
        repository: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    let verbose = cli.verbose;
    if let Err(e) = logging::init(verbose) {
        eprintln!("⚠️ {:#}", e);
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            if verbose {
                eprintln!("❌ Detailed error information:");
                eprintln!("{:?}", e);
            } else {
                eprintln!("❌ Error occurred: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_config().context("Failed to load configuration")?;

    match cli.command {
        Command::Add {
            components,
            no_src_dir,
            outdir,
            no_deps,
            source,
            repository,
        } => {
            let project_dir =
                std::env::current_dir().context("Failed to determine current directory")?;

            let options = commands::AddOptions {
                components,
                src_dir: !no_src_dir,
                outdir,
                deps: !no_deps,
                source,
                repository,
                verbose: cli.verbose,
            };

            let outcome = commands::add(options, &config, &project_dir).await?;

            Ok(if outcome.is_fatal() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

/// Map clap errors onto the CLI's exit codes
///
/// Help and version exit with 0; everything else, including a missing or
/// unknown command, exits with 1.
fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            let command = err
                .get(ContextKind::InvalidSubcommand)
                .map(|value| value.to_string())
                .unwrap_or_default();
            eprintln!("❌ {}", VoltError::UnsupportedCommand(command));
            print_usage();
            ExitCode::FAILURE
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!();
    eprintln!("Available commands:");
    eprintln!("  add <components>                    - Add component(s) to your project");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  volt-vue add button                 - Add button component to src/volt");
    eprintln!("  volt-vue add panel                  - Add panel with only required dependencies");
    eprintln!("  volt-vue add panel button           - Add panel and full button component");
    eprintln!("  volt-vue add --no-src-dir button    - Add button component to root/volt");
    eprintln!("  volt-vue add --outdir lib button    - Add button component to lib/volt");
    eprintln!("  volt-vue add --no-deps panel        - Add panel without dependencies");
    eprintln!("  volt-vue add all                    - Add all components");
}

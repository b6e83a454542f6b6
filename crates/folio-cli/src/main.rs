mod cmd;
mod input;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::draft::DraftSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Portfolio wizard: collect your answers and generate config.json for the portfolio site",
    version,
    propagate_version = true
)]
struct Cli {
    /// Working root (default: nearest directory with .folio/, else cwd)
    #[arg(long, global = true, env = "FOLIO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log debug details to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate config.json from a complete answer set
    Generate {
        /// Answers JSON file, or '-' for stdin
        #[arg(long, short = 'a')]
        answers: PathBuf,
        /// Destination file (default: settings output, config.json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Show section counts for a generated config.json
    Summary {
        /// Generated document (default: settings output, config.json)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Report records that generation would drop, and overall completion
    Check {
        /// Answers JSON file, or '-' for stdin
        #[arg(long, short = 'a')]
        answers: PathBuf,
    },

    /// List wizard steps and the answer keys each one collects
    Steps,

    /// Fill in the wizard step by step with a saved draft
    Draft {
        #[command(subcommand)]
        subcommand: DraftSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Generate {
            answers,
            output,
            stdout,
        } => cmd::generate::run(&root, &answers, output.as_deref(), stdout, cli.json),
        Commands::Summary { config } => cmd::summary::run(&root, config.as_deref(), cli.json),
        Commands::Check { answers } => cmd::check::run(&answers, cli.json),
        Commands::Steps => cmd::steps::run(cli.json),
        Commands::Draft { subcommand } => cmd::draft::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

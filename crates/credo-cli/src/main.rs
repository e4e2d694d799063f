mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "credo",
    about = "Maintain versioned engineering-practice blocks in agent guidance files",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .git/)
    #[arg(long, global = true, env = "CREDO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install or update a practice block in the guidance document
    Install {
        /// Practice tag (omit to see what is available)
        tag: Option<String>,

        /// Target document (default: CLAUDE.md in the project root)
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Report what is installed in the guidance document
    Status {
        /// Target document (default: CLAUDE.md in the project root)
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// List shipped practices
    List,

    /// Print a practice body to stdout
    Show { tag: String },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Install { tag, target } => {
            cmd::install::run(&root, tag.as_deref(), target.as_deref(), cli.json)
        }
        Commands::Status { target } => cmd::status::run(&root, target.as_deref(), cli.json),
        Commands::List => cmd::list::run(cli.json),
        Commands::Show { tag } => cmd::show::run(&tag),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

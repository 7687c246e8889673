//! pkgmeta CLI
//!
//! Reads and updates package metadata stored in `package.json` or embedded
//! in a single-file package's `/*package.json */` comment.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use pkgmeta_core::{MetadataLayout, Resolver};
use pkgmeta_fs::NormalizedPath;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let resolver = match &cli.layout {
        Some(path) => {
            tracing::debug!(layout = %path.display(), "Loading metadata layout");
            let layout = MetadataLayout::load(&NormalizedPath::new(path))?;
            Resolver::with_layout(layout)?
        }
        None => Resolver::new(),
    };

    match cli.command {
        Some(cmd) => execute_command(&resolver, cmd),
        None => {
            println!("{} package metadata tool", "pkgmeta".green().bold());
            println!();
            println!("Run {} for available commands.", "pkgmeta --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr so `--json` output stays parseable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Tracing enabled");
    }
}

fn execute_command(resolver: &Resolver, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Show { path, json } => commands::run_show(resolver, &path, json),
        Commands::Deps { path } => commands::run_deps(resolver, &path),
        Commands::AddDep { path, id, archive } => {
            commands::run_add_dep(resolver, &path, &id, &archive)
        }
        Commands::RemoveDep { path, id } => commands::run_remove_dep(resolver, &path, &id),
    }
}

//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgmeta - Read and update package metadata, embedded or standalone
#[derive(Parser, Debug)]
#[command(name = "pkgmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Metadata layout file (TOML, JSON or YAML) overriding the default names
    #[arg(long, global = true, env = "PKGMETA_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show where a package's metadata lives and what it holds
    Show {
        /// Package file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the package's volo dependencies
    Deps {
        /// Package file or directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record a dependency and save the metadata
    ///
    /// Examples:
    ///   pkgmeta add-dep . jquery jquery-1.7.2.zip
    ///   pkgmeta add-dep widget.js underscore underscore.zip
    AddDep {
        /// Package file or directory
        path: PathBuf,

        /// Dependency identifier
        id: String,

        /// Archive or reference name for the dependency
        archive: String,
    },

    /// Remove a dependency and save the metadata
    RemoveDep {
        /// Package file or directory
        path: PathBuf,

        /// Dependency identifier
        id: String,
    },
}

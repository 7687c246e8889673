//! Command implementations for pkgmeta-cli

pub mod deps;
pub mod show;

pub use deps::{run_add_dep, run_deps, run_remove_dep};
pub use show::run_show;

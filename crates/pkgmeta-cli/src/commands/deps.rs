//! Dependency commands: list, add, remove

use std::path::Path;

use colored::Colorize;
use pkgmeta_core::{PackageMetadata, Resolver};

use crate::error::{CliError, Result};

/// Run the deps command
pub fn run_deps(resolver: &Resolver, path: &Path) -> Result<()> {
    let package = resolver.resolve(path)?;
    let dependencies = package.dependencies();

    if dependencies.is_empty() {
        println!("{}", "No dependencies".dimmed());
        return Ok(());
    }

    for (id, archive) in dependencies {
        println!("{} -> {}", id.cyan(), archive);
    }
    Ok(())
}

/// Run the add-dep command
pub fn run_add_dep(resolver: &Resolver, path: &Path, id: &str, archive: &str) -> Result<()> {
    let mut package = resolve_writable(resolver, path)?;

    package.set_dependency(id, archive)?;
    package.save()?;

    println!("{} {} -> {}", "+".green(), id.cyan(), archive);
    Ok(())
}

/// Run the remove-dep command
pub fn run_remove_dep(resolver: &Resolver, path: &Path, id: &str) -> Result<()> {
    let mut package = resolve_writable(resolver, path)?;

    if !package.remove_dependency(id) {
        return Err(CliError::user(format!("Dependency '{}' not found", id)));
    }
    package.save()?;

    println!("{} {}", "-".red(), id.cyan());
    Ok(())
}

fn resolve_writable(resolver: &Resolver, path: &Path) -> Result<PackageMetadata> {
    let package = resolver.resolve(path)?;
    if !package.has_location() {
        let layout = resolver.layout();
        return Err(CliError::user(format!(
            "Cannot locate metadata for {}: expected exactly one {} file or a {}",
            path.display(),
            layout.source_suffix,
            layout.metadata_file
        )));
    }
    Ok(package)
}

//! Show command implementation

use std::path::Path;

use colored::Colorize;
use pkgmeta_core::Resolver;
use serde_json::json;

use crate::error::Result;

/// Run the show command
pub fn run_show(resolver: &Resolver, path: &Path, as_json: bool) -> Result<()> {
    let package = resolver.resolve(path)?;

    if as_json {
        let report = json!({
            "storage_mode": package.storage_mode(),
            "location": package.location().map(|l| l.as_str()),
            "data": package.data(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}:      {}", "Mode".dimmed(), package.storage_mode().to_string().cyan());
    match package.location() {
        Some(location) => println!("{}:  {}", "Location".dimmed(), location),
        None => println!(
            "{}:  {}",
            "Location".dimmed(),
            "none (no single source file and no metadata file)".yellow()
        ),
    }
    println!();

    match package.data() {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("{}", "No metadata".dimmed()),
    }

    Ok(())
}

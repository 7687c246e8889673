//! Filesystem primitives for package metadata handling
//!
//! Provides normalized paths, atomic text writes, directory listing and
//! format-detecting config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::MetadataName;
pub use error::{Error, Result};
pub use path::NormalizedPath;

//! Shared test fixtures for the pkgmeta workspace.
//!
//! It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`package`]: [`TestPackage`] builder for package directories on disk

pub mod package;

pub use package::TestPackage;

/// A single-file package whose embedded comment holds `{"name":"widget"}`.
pub const EMBEDDED_WIDGET_JS: &str = "/*package.json \n{\"name\":\"widget\"}\n*/\nvar widget = {};\n";

/// A source file with no metadata comment.
pub const PLAIN_WIDGET_JS: &str = "var widget = {};\n";

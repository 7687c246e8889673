//! Package metadata handles and storage resolution.
//!
//! A package keeps its metadata either in a dedicated `package.json` or,
//! for single-file packages, in a `/*package.json ... */` comment inside
//! its only `.js` file. [`resolve`] decides which applies and returns a
//! [`PackageMetadata`] handle that can be refreshed, edited and saved.
//!
//! ```rust,no_run
//! use pkgmeta_core::resolve;
//!
//! let mut package = resolve("vendor/widget")?;
//! if package.has_location() {
//!     package.set_dependency("jquery", "jquery-1.7.2.zip")?;
//!     package.save()?;
//! }
//! # Ok::<(), pkgmeta_core::Error>(())
//! ```

pub mod error;
pub mod layout;
pub mod package;
pub mod path;
pub mod resolver;

pub use error::{Error, Result};
pub use layout::MetadataLayout;
pub use package::{DEPENDENCIES_PATH, PackageMetadata, StorageMode};
pub use path::{ensure_path, get_at_path};
pub use resolver::{Resolver, resolve};

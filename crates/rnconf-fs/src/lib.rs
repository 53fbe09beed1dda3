//! Filesystem primitives for the native project config resolver
//!
//! Provides normalized path handling, format-agnostic config loading and the
//! well-known file names the resolver looks for.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;

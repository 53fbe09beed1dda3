//! Configuration resolution and merge engine
//!
//! Resolves the consolidated native project configuration of an app:
//! installed dependencies and their per-platform contributions, the root
//! project's per-platform settings, and the available commands.
//!
//! Problems inside third-party packages never fail a resolution. They are
//! collected as [`Warning`]s and returned on [`ResolvedConfig::warnings`].

pub mod config;
pub mod diagnostics;
pub mod error;

pub use config::{
    ConfigResolver, DependencyConfig, LoadConfigOptions, NodeModulesLocator, PackageLocator,
    ResolvedConfig, load_config,
};
pub use diagnostics::{Diagnostics, Warning, WarningKind};
pub use error::{Error, Result};

//! Configuration resolution
//!
//! Resolution runs in one pass over the project:
//!
//! 1. read the root `package.json` and config file ([`loader`])
//! 2. discover and load every dependency ([`dependency`])
//! 3. collect the declared platforms ([`platform`])
//! 4. merge dependency platforms, project sections and commands
//!    ([`dependency`], [`project`], [`commands`])
//!
//! # Example
//!
//! ```ignore
//! use rnconf_core::config::{LoadConfigOptions, load_config};
//! use rnconf_fs::NormalizedPath;
//!
//! let config = load_config(LoadConfigOptions {
//!     project_root: NormalizedPath::new("/path/to/app"),
//!     selected_platform: Some("ios".to_string()),
//! })
//! .await?;
//! println!("{}", serde_json::to_string_pretty(&config)?);
//! ```

pub mod commands;
pub mod dependency;
pub mod loader;
pub mod merge;
pub mod platform;
pub mod project;
mod resolver;

pub use commands::merge_commands;
pub use dependency::{DependencyConfig, NodeModulesLocator, PackageLocator};
pub use loader::LoadedPackage;
pub use merge::deep_merge_value;
pub use platform::{KnownPlatforms, select_platform};
pub use project::merge_project;
pub use resolver::{ConfigResolver, LoadConfigOptions, ResolvedConfig, load_config};

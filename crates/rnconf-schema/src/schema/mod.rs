//! Strict configuration model
//!
//! These types describe a package config document after it passed
//! validation:
//!
//! - [`PackageConfig`] - the whole `react-native.config.{json,toml,yaml}`
//! - [`Command`] - a command contributed by a package or the root project
//! - [`PlatformDeclaration`] - a platform a package makes available

pub mod command;
pub mod package;
pub mod platform;

pub use command::{Command, CommandExample, CommandOption};
pub use package::{DependencySection, PackageConfig, PlatformParams, UserDependencyConfig};
pub use platform::PlatformDeclaration;

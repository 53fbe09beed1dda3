//! Configuration schema for the native project config resolver.
//!
//! Package configuration is third-party input: it is parsed into an untyped
//! [`serde_json::Value`], checked by [`validation::validate`] and only then
//! converted into the strict [`PackageConfig`] model.

pub mod error;
pub mod manifest;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use manifest::PackageManifest;
pub use schema::{
    Command, CommandExample, CommandOption, DependencySection, PackageConfig, PlatformDeclaration,
    PlatformParams, UserDependencyConfig,
};
pub use validation::{ConfigKind, ValidationError, ValidationReport, validate};

//! Warnings collected during one resolution run
//!
//! Problems local to one dependency never abort resolution. They are
//! recorded here, logged through `tracing`, and handed back to the caller on
//! [`crate::ResolvedConfig::warnings`].

use rnconf_fs::NormalizedPath;
use serde::Serialize;
use std::fmt;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A dependency's config file could not be parsed
    ConfigParse,
    /// A dependency's config file failed validation
    InvalidConfig,
    /// A dependency's `package.json` could not be parsed
    ManifestParse,
    /// A platform key that no package declares
    UnknownPlatform,
    /// A platform declaration naming an implementation nobody registered
    UnregisteredImplementation,
    /// A candidate dependency that is not installed
    MissingDependency,
    /// A platform provider failed while inspecting a package
    ProviderFailed,
    /// The framework package could not be located
    ReactNativeNotFound,
}

/// A single structured warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Package the warning is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// File the warning is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<NormalizedPath>,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            package: None,
            path: None,
            message: message.into(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_path(mut self, path: NormalizedPath) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = &self.package {
            write!(f, "[{package}] ")?;
        }
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " ({path})")?;
        }
        Ok(())
    }
}

/// Collector threaded through one resolution run
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. It is traced at debug level only; presenting it is
    /// left to whoever reads [`ResolvedConfig::warnings`](crate::ResolvedConfig).
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(
            kind = ?warning.kind,
            package = warning.package.as_deref(),
            path = warning.path.as_ref().map(|p| p.as_str()),
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

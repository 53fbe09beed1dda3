//! Platform providers for the native project config resolver.
//!
//! A platform is an open, pluggable target. Each one is backed by a
//! [`PlatformProvider`] that auto-detects project and dependency defaults
//! from the filesystem and merges declared parameters over them. The
//! built-in providers cover iOS and Android; [`PlatformRegistry`] maps
//! implementation ids to providers.

pub mod android;
pub mod error;
pub mod ios;
pub mod params;
pub mod provider;
pub mod registry;

pub use android::AndroidPlatform;
pub use error::{Error, Result};
pub use ios::IosPlatform;
pub use ios::xcode::{CommandOutput, CommandRunner, ProcessRunner, XcodeInfo, XcodeProject};
pub use provider::PlatformProvider;
pub use registry::PlatformRegistry;

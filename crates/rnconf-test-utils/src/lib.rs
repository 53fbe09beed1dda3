//! Shared test utilities for the rnconf workspace.
//!
//! This crate provides standardised project fixtures for the crate test
//! suites. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`mocks`] - file sets for the framework package and a platform package
//! - [`project`] - [`TestProject`] builder over a temporary directory

pub mod mocks;
pub mod project;

pub use project::TestProject;

//! Application identity from Cargo.toml.
//!
//! Single source of truth for the project name, version, author, and links
//! used across the codebase.

/// Display name of the project (the package name is lowercase).
pub const NAME: &str = "AutoConveyor";

/// Application version (from Cargo.toml `package.version`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project author (from Cargo.toml `package.authors`).
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// One-line project description (from Cargo.toml `package.description`).
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// GitHub repository URL (from Cargo.toml `package.repository`).
pub const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// License line shown in the banner.
pub const LICENSE: &str = "MIT License";

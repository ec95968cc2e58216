//! # Constants
//!
//! Centralized constants for magic values used throughout glossia.
//!
//! Licensed under the MIT License.

// =============================================================================
// Build
// =============================================================================

/// Version string baked in at build time.
///
/// Set `GLOSSIA_VERSION` when compiling to override the package version.
pub const VERSION: &str = match option_env!("GLOSSIA_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

// =============================================================================
// Project Layout
// =============================================================================

/// Configuration file name inside the project root.
pub const CONFIG_FILE_NAME: &str = "glossia.yaml";

/// Project name used when none is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "glossia-project";

/// Unix permissions for created directories.
pub const DIR_MODE: u32 = 0o755;

/// Unix permissions for the configuration file.
pub const FILE_MODE: u32 = 0o644;

// =============================================================================
// Default Configuration Values
// =============================================================================

/// Configuration schema version written into new projects.
pub const DEFAULT_CONFIG_VERSION: &str = "1.0.0";

/// Source directories scanned for translation keys.
pub const DEFAULT_SOURCES: &[&str] = &["src", "lib"];

/// Output directory for generated translation files.
pub const DEFAULT_OUTPUT_DIR: &str = "locales";

/// Language codes enabled in new projects.
pub const DEFAULT_LANGUAGES: &[&str] = &["en", "es", "fr", "de"];

// =============================================================================
// Exit Codes
// =============================================================================

/// Generic failure (anything that is not an init step failure).
pub const EXIT_FAILURE: i32 = 1;

/// The project name was rejected before touching the filesystem.
pub const EXIT_INVALID_NAME: i32 = 3;

/// The project root directory could not be created.
pub const EXIT_CREATE_ROOT: i32 = 4;

/// The configuration file could not be written.
pub const EXIT_WRITE_CONFIG: i32 = 5;

/// The output directory could not be created.
pub const EXIT_CREATE_OUTPUT: i32 = 6;

//! # glossia
//!
//! A modern language hub for your organization.
//!
//! This crate bootstraps translation projects: `glossia init` creates a
//! project directory holding a `glossia.yaml` configuration and an empty
//! output directory for generated translation files.
//!
//! ## Layout
//!
//! ```text
//! <project-name>/
//!   glossia.yaml
//!   locales/
//! ```
//!
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;

pub use commands::{initialize, initialize_in, ProjectSummary};
pub use config::{ProjectConfig, TranslationFormat};
pub use constants::VERSION;
pub use error::{InitError, InitStep};

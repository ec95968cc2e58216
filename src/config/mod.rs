//! # Configuration
//!
//! The per-project `glossia.yaml` document and its value types.
//!
//! Licensed under the MIT License.

pub mod format;
pub mod project;

pub use self::{format::TranslationFormat, project::ProjectConfig};

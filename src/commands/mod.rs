//! # Commands
//!
//! CLI command implementations for glossia.
//!
//! Licensed under the MIT License.

pub mod completions;
pub mod init;
pub mod version;
pub mod welcome;

pub use self::{
    completions::execute as completions,
    init::{execute as init, initialize, initialize_in, InitArgs, ProjectSummary},
    version::{execute as version, version_line},
    welcome::execute as welcome,
};

//! # Version Command
//!
//! Prints the build-time version of the CLI.
//!
//! Licensed under the MIT License.

use crate::constants::VERSION;

/// Returns the version line, e.g. `Glossia CLI version 0.1.0`.
pub fn version_line() -> String {
    format!("Glossia CLI version {VERSION}")
}

/// Executes the version command.
pub fn execute() {
    println!("{}", version_line());
}

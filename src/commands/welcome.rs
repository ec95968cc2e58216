//! # Welcome Banner
//!
//! Shown when `glossia` runs without a subcommand.
//!
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

pub fn execute() {
    println!("{}", "Welcome to Glossia CLI!".bold());
    println!("Use 'glossia --help' to see available commands.");
}

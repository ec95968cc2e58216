//! # UI Utilities
//!
//! Console output shared by commands.
//!
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

/// Prints a success line for a created path.
///
/// Format: `✓ Created {what}: {path}`
pub fn print_created(what: &str, path: &Path) {
    println!("{} Created {}: {}", "✓".green(), what, path.display());
}

/// Prints the follow-up commands after a project was initialized.
pub fn print_next_steps(project_root: &Path) {
    println!("\n{}", "Next steps:".bold());
    println!("  cd {}", project_root.display());
    println!(
        "  glossia extract  {}",
        "# Extract translation keys from source code".dimmed()
    );
    println!(
        "  glossia generate {}",
        "# Generate translation files".dimmed()
    );
}

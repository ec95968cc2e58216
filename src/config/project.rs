//! # Project Configuration
//!
//! The `glossia.yaml` document written into the root of every new project.
//!
//! Licensed under the MIT License.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::TranslationFormat;
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_CONFIG_VERSION, DEFAULT_LANGUAGES, DEFAULT_OUTPUT_DIR,
    DEFAULT_PROJECT_NAME, DEFAULT_SOURCES,
};

/// Project configuration stored at glossia.yaml in the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (also the project directory name)
    pub name: String,

    /// Configuration schema version
    pub version: String,

    /// Source directories to scan for translation keys
    pub sources: Vec<String>,

    /// Output directory for translation files, relative to the project root
    pub output: String,

    /// Supported language codes
    pub languages: Vec<String>,

    /// File format for translation files
    #[serde(default)]
    pub format: TranslationFormat,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            version: DEFAULT_CONFIG_VERSION.to_string(),
            sources: DEFAULT_SOURCES.iter().map(ToString::to_string).collect(),
            output: DEFAULT_OUTPUT_DIR.to_string(),
            languages: DEFAULT_LANGUAGES.iter().map(ToString::to_string).collect(),
            format: TranslationFormat::default(),
        }
    }
}

impl ProjectConfig {
    /// Default configuration with the given project name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the path to the config file inside a project root
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Returns the full path to the output directory
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }

    /// Renders the config file contents, comments included.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Loads the project config from glossia.yaml in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, key: &str, values: &[String]) -> fmt::Result {
    writeln!(f, "{key}:")?;
    for value in values {
        writeln!(f, "  - \"{value}\"")?;
    }
    Ok(())
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Glossia Configuration")?;
        writeln!(f, "name: {}", self.name)?;
        writeln!(f, "version: \"{}\"", self.version)?;
        writeln!(f)?;
        writeln!(f, "# Source directories to scan for translation keys")?;
        write_list(f, "sources", &self.sources)?;
        writeln!(f)?;
        writeln!(f, "# Output directory for translation files")?;
        writeln!(f, "output: \"{}\"", self.output)?;
        writeln!(f)?;
        writeln!(f, "# Supported languages")?;
        write_list(f, "languages", &self.languages)?;
        writeln!(f)?;

        let formats: Vec<&str> = TranslationFormat::ALL
            .iter()
            .map(|format| format.as_str())
            .collect();
        writeln!(
            f,
            "# File format for translation files ({})",
            formats.join(", ")
        )?;
        writeln!(f, "format: \"{}\"", self.format)
    }
}

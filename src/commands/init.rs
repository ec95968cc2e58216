//! # Init Command
//!
//! Creates a new Glossia project directory with a default `glossia.yaml`
//! and an empty output directory for generated translation files.
//!
//! Steps run strictly in order and stop at the first failure. Nothing is
//! rolled back: re-running `init` is the recovery path, since every step
//! is idempotent (the config file is simply rewritten).
//!
//! Licensed under the MIT License.

use std::{
    fs::{DirBuilder, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use log::debug;

use crate::{
    config::ProjectConfig,
    constants::{DEFAULT_PROJECT_NAME, DIR_MODE, FILE_MODE},
    error::InitError,
    ui,
};

/// Arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Project name; the default name is used when absent or empty
    pub name: Option<String>,
}

/// What a successful initialization produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub config: ProjectConfig,
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub output_path: PathBuf,
}

/// Executes the init command.
pub fn execute(args: &InitArgs) -> Result<()> {
    let name = resolve_project_name(args.name.as_deref());
    println!("Initializing Glossia project: {name}");

    let summary = initialize(Some(name))?;

    ui::print_created("project directory", &summary.root);
    ui::print_created("configuration file", &summary.config_path);
    ui::print_created("output directory", &summary.output_path);
    ui::print_next_steps(&summary.root);

    Ok(())
}

/// Returns the given name, or the default project name if it is absent or empty.
pub fn resolve_project_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PROJECT_NAME,
    }
}

/// Checks that a project name is a single, ordinary path segment.
///
/// Surrounding whitespace is kept as-is and is not an error.
pub fn validate_project_name(name: &str) -> Result<(), InitError> {
    let reason = if name.contains(['/', '\\']) {
        Some("contains a path separator")
    } else if name.contains('\0') {
        Some("contains a NUL character")
    } else if name == "." || name == ".." {
        Some("is a reserved path segment")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(InitError::InvalidName {
            name: name.to_string(),
            reason,
        })
    })
}

/// Initializes a project relative to the current directory.
///
/// Returned paths are relative (`acme`, `acme/glossia.yaml`, ...).
pub fn initialize(name: Option<&str>) -> Result<ProjectSummary, InitError> {
    let name = resolve_project_name(name);
    validate_project_name(name)?;
    create_project(PathBuf::from(name), ProjectConfig::new(name))
}

/// Initializes a project inside `base` instead of the current directory.
pub fn initialize_in(base: &Path, name: Option<&str>) -> Result<ProjectSummary, InitError> {
    let name = resolve_project_name(name);
    validate_project_name(name)?;
    create_project(base.join(name), ProjectConfig::new(name))
}

fn create_project(root: PathBuf, config: ProjectConfig) -> Result<ProjectSummary, InitError> {
    debug!("Creating project directory {}", root.display());
    create_dir(&root).map_err(|source| InitError::CreateRoot {
        path: root.clone(),
        source,
    })?;

    let config_path = ProjectConfig::path(&root);
    debug!("Writing config file {}", config_path.display());
    write_file(&config_path, &config.render()).map_err(|source| InitError::WriteConfig {
        path: config_path.clone(),
        source,
    })?;

    // Derived from the written config so the two can't drift apart
    let output_path = config.output_path(&root);
    debug!("Creating output directory {}", output_path.display());
    create_dir(&output_path).map_err(|source| InitError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;

    Ok(ProjectSummary {
        config,
        root,
        config_path,
        output_path,
    })
}

/// Creates a directory and any missing parents. Existing directories are fine.
fn create_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path)
}

/// Writes `contents` to `path`, truncating any existing file.
fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

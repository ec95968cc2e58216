//! # Errors
//!
//! Failure types for project initialization.
//!
//! Licensed under the MIT License.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::constants::{
    EXIT_CREATE_OUTPUT, EXIT_CREATE_ROOT, EXIT_INVALID_NAME, EXIT_WRITE_CONFIG,
};

/// The initialization step an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    ValidateName,
    CreateRoot,
    WriteConfig,
    CreateOutput,
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ValidateName => "validating project name",
            Self::CreateRoot => "creating project directory",
            Self::WriteConfig => "creating config file",
            Self::CreateOutput => "creating output directory",
        };
        f.write_str(label)
    }
}

/// Error returned by [`crate::commands::init::initialize`].
///
/// Every variant except `InvalidName` wraps the underlying I/O error.
/// Earlier steps are left on disk when a later step fails.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Error creating project directory {}", path.display())]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating config file {}", path.display())]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating output directory {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    /// Returns the step that failed.
    pub const fn step(&self) -> InitStep {
        match self {
            Self::InvalidName { .. } => InitStep::ValidateName,
            Self::CreateRoot { .. } => InitStep::CreateRoot,
            Self::WriteConfig { .. } => InitStep::WriteConfig,
            Self::CreateOutput { .. } => InitStep::CreateOutput,
        }
    }

    /// Process exit status for this failure class.
    pub const fn exit_code(&self) -> i32 {
        match self.step() {
            InitStep::ValidateName => EXIT_INVALID_NAME,
            InitStep::CreateRoot => EXIT_CREATE_ROOT,
            InitStep::WriteConfig => EXIT_WRITE_CONFIG,
            InitStep::CreateOutput => EXIT_CREATE_OUTPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            InitError::InvalidName {
                name: "a/b".into(),
                reason: "contains a path separator",
            },
            InitError::CreateRoot {
                path: "a".into(),
                source: io_err(),
            },
            InitError::WriteConfig {
                path: "a/glossia.yaml".into(),
                source: io_err(),
            },
            InitError::CreateOutput {
                path: "a/locales".into(),
                source: io_err(),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(InitError::exit_code).collect();
        assert!(codes.iter().all(|&c| c != 0 && c != 1));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_io_source_is_preserved() {
        let err = InitError::WriteConfig {
            path: "acme/glossia.yaml".into(),
            source: io_err(),
        };
        assert_eq!(err.step(), InitStep::WriteConfig);
        assert_eq!(err.to_string(), "Error creating config file acme/glossia.yaml");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
    }
}

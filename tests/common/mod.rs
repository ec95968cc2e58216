//! # Test Harness
//!
//! Provides a scratch working directory for integration tests so that
//! `glossia init` never touches the real current directory.
//!
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that owns a temporary working directory.
pub struct TestEnv {
    /// Temporary directory that projects are created in
    pub work_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment and changes into its working directory.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let work_dir = TempDir::new().expect("Failed to create temp work dir");
        let original_cwd = env::current_dir().expect("Failed to get current dir");
        env::set_current_dir(work_dir.path()).expect("Failed to change to work dir");

        Self {
            work_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the working directory.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Returns the path where a project root would be created.
    pub fn project_root(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Returns the path where a project's config would be stored.
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.project_root(name).join("glossia.yaml")
    }

    /// Returns the path of a project's output directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.project_root(name).join("locales")
    }

    /// Reads a project's config file content.
    pub fn read_config(&self, name: &str) -> String {
        fs::read_to_string(self.config_path(name)).expect("Failed to read config")
    }

    /// Overwrites a project's config file content.
    pub fn write_config(&self, name: &str, content: &str) {
        fs::write(self.config_path(name), content).expect("Failed to write config");
    }

    /// Lists every file and directory below the working directory,
    /// relative to it and sorted.
    pub fn list_entries(&self) -> Vec<PathBuf> {
        let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(self.path())
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter_map(|e| e.path().strip_prefix(self.path()).ok().map(Path::to_path_buf))
            .collect();
        entries.sort();
        entries
    }

    /// Creates a `glossia` command running in this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("glossia").unwrap();
        cmd.current_dir(self.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}

/// Returns the artifacts `init` is expected to create for `name`.
pub fn expected_entries(name: &str) -> Vec<PathBuf> {
    let mut entries = vec![
        PathBuf::from(name),
        PathBuf::from(name).join("glossia.yaml"),
        PathBuf::from(name).join("locales"),
    ];
    entries.sort();
    entries
}

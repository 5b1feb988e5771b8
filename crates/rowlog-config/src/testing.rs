//! Test environment abstraction for isolated testing.
//!
//! Provides `TestEnvironment` to manage:
//! - A throwaway working directory
//! - The data file path inside it
//! - Project-local config files
//!
//! # Usage
//!
//! ```ignore
//! use rowlog_config::testing::TestEnvironment;
//!
//! #[test]
//! fn test_something() {
//!     let env = TestEnvironment::new().unwrap();
//!     env.seed_data("alice,30,town\n").unwrap();
//!     // env.data_path() now holds one row
//! }
//! ```

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use tempfile::TempDir;

use crate::{DEFAULT_DATA_FILE, PROJECT_CONFIG_PATH};

/// Atomic counter for unique test IDs
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated test environment with its own working directory
pub struct TestEnvironment {
    /// Temporary directory (dropped on cleanup)
    _temp_dir: TempDir,
    /// Working directory for the test
    pub project_root: PathBuf,
    /// Stand-in for the user's home directory
    pub home: PathBuf,
    /// Unique test ID
    pub test_id: u32,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> anyhow::Result<Self> {
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        let project_root = root.join("project");
        let home = root.join("home");
        std::fs::create_dir_all(&project_root)?;
        std::fs::create_dir_all(&home)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
            home,
            test_id,
        })
    }

    /// Default data file inside the project root
    pub fn data_path(&self) -> PathBuf {
        self.project_root.join(DEFAULT_DATA_FILE)
    }

    /// Project config file location
    pub fn project_config_path(&self) -> PathBuf {
        self.project_root.join(PROJECT_CONFIG_PATH)
    }

    /// Write `content` to the default data file, replacing it
    pub fn seed_data(&self, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.data_path();
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Read the default data file back as text
    pub fn read_data(&self) -> anyhow::Result<String> {
        Ok(std::fs::read_to_string(self.data_path())?)
    }

    /// Write the project-local config file
    pub fn write_project_config(&self, toml: &str) -> anyhow::Result<PathBuf> {
        let path = self.project_config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_creates_directories() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.project_root.exists());
        assert!(env.home.exists());
        assert!(!env.data_path().exists());
    }

    #[test]
    fn test_environment_has_unique_root() {
        let env1 = TestEnvironment::new().unwrap();
        let env2 = TestEnvironment::new().unwrap();
        assert_ne!(env1.project_root, env2.project_root);
        assert_ne!(env1.test_id, env2.test_id);
    }

    #[test]
    fn test_seed_and_read_data() {
        let env = TestEnvironment::new().unwrap();
        env.seed_data("alice,30,town\n").unwrap();
        assert_eq!(env.read_data().unwrap(), "alice,30,town\n");
    }

    #[test]
    fn test_write_project_config() {
        let env = TestEnvironment::new().unwrap();
        let path = env
            .write_project_config("[data]\nfile = \"other.csv\"\n")
            .unwrap();
        assert!(path.ends_with(".rowlog/config.toml"));
        assert!(path.exists());
    }
}

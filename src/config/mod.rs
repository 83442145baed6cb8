//! Configuration management for moodlog.
//!
//! Settings come from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Directory holding the journal data (defaults to ~/Documents/moodlog)
//! - `MOODLOG_USER`: Display name of the current user
//! - `USER`: Fallback display name if MOODLOG_USER is not set (defaults to "guest")
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_USER_NAME, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR,
    ENV_VAR_MOODLOG_USER, ENV_VAR_USER, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for moodlog.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/moodlog"),
///     user_name: "hana".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use moodlog::Config;
/// use std::env;
///
/// env::set_var("MOODLOG_DIR", "/custom/moodlog/path");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert_eq!(config.data_dir.to_str(), Some("/custom/moodlog/path"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where the journal blob is stored.
    ///
    /// Loaded from `MOODLOG_DIR` with a fallback to ~/Documents/moodlog.
    pub data_dir: PathBuf,

    /// Display name for the status readout.
    ///
    /// Loaded in the following order of precedence:
    /// 1. MOODLOG_USER
    /// 2. USER
    /// 3. Defaults to "guest" if neither is set
    pub user_name: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("user_name", &self.user_name)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and
    /// environment variable references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The expanded data directory path is empty
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let user_name = env::var(ENV_VAR_MOODLOG_USER)
            .or_else(|_| env::var(ENV_VAR_USER))
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

        Ok(Config {
            data_dir,
            user_name,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_MOODLOG_DIR);
        env::remove_var(ENV_VAR_MOODLOG_USER);
    }

    #[test]
    fn test_debug_impl_redacts_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moodlog"),
            user_name: "hana".to_string(),
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/moodlog"));
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        setup();
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_MOODLOG_DIR, &dir_path);
        let config = Config::load().unwrap();
        env::remove_var(ENV_VAR_MOODLOG_DIR);

        assert_eq!(config.data_dir, temp_dir.path());
    }

    #[test]
    #[serial]
    fn test_load_default_dir_uses_home() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        match orig_home {
            Some(val) => env::set_var(ENV_VAR_HOME, val),
            None => env::remove_var(ENV_VAR_HOME),
        }
        assert_eq!(config.data_dir, PathBuf::from("/home/tester/Documents/moodlog"));
    }

    #[test]
    #[serial]
    fn test_load_expands_tilde() {
        setup();
        let orig_home = env::var(ENV_VAR_HOME).ok();
        env::set_var(ENV_VAR_HOME, "/home/tester");
        env::set_var(ENV_VAR_MOODLOG_DIR, "~/journal");

        let config = Config::load().unwrap();

        env::remove_var(ENV_VAR_MOODLOG_DIR);
        match orig_home {
            Some(val) => env::set_var(ENV_VAR_HOME, val),
            None => env::remove_var(ENV_VAR_HOME),
        }
        assert_eq!(config.data_dir, PathBuf::from("/home/tester/journal"));
    }

    #[test]
    #[serial]
    fn test_user_name_precedence() {
        setup();
        let orig_user = env::var(ENV_VAR_USER).ok();

        env::set_var(ENV_VAR_USER, "shell-user");
        assert_eq!(Config::load().unwrap().user_name, "shell-user");

        env::set_var(ENV_VAR_MOODLOG_USER, "hana");
        assert_eq!(Config::load().unwrap().user_name, "hana");

        env::remove_var(ENV_VAR_MOODLOG_USER);
        env::remove_var(ENV_VAR_USER);
        assert_eq!(Config::load().unwrap().user_name, DEFAULT_USER_NAME);

        if let Some(val) = orig_user {
            env::set_var(ENV_VAR_USER, val);
        }
    }

    #[test]
    fn test_validate_rejects_relative_and_empty_dirs() {
        let relative = Config {
            data_dir: PathBuf::from("relative/path"),
            user_name: "hana".to_string(),
        };
        match relative.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            _ => panic!("Expected Config error for relative path"),
        }

        let empty = Config {
            data_dir: PathBuf::new(),
            user_name: "hana".to_string(),
        };
        match empty.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected Config error for empty path"),
        }
    }
}

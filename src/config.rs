//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DATASET_PATH` - Admissions dataset CSV (default: `Data.csv`)
//! - `CREDENTIALS_PATH` - Credential store CSV (default: `Login.csv`)
//! - `FEEDBACK_PATH` - Feedback sink CSV (default: `Feedback.csv`)
//! - `STATIC_DIR` - Static assets served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub dataset_path: PathBuf,
    pub credentials_path: PathBuf,
    pub feedback_path: PathBuf,
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            dataset_path: PathBuf::from("Data.csv"),
            credentials_path: PathBuf::from("Login.csv"),
            feedback_path: PathBuf::from("Feedback.csv"),
            static_dir: PathBuf::from("static"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            dataset_path: env_path("DATASET_PATH").unwrap_or(defaults.dataset_path),
            credentials_path: env_path("CREDENTIALS_PATH").unwrap_or(defaults.credentials_path),
            feedback_path: env_path("FEEDBACK_PATH").unwrap_or(defaults.feedback_path),
            static_dir: env_path("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - any file path is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, path) in [
            ("DATASET_PATH", &self.dataset_path),
            ("CREDENTIALS_PATH", &self.credentials_path),
            ("FEEDBACK_PATH", &self.feedback_path),
        ] {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{name} must not be empty");
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Dataset: {}", self.dataset_path.display());
        tracing::info!("  Credential store: {}", self.credentials_path.display());
        tracing::info!("  Feedback store: {}", self.feedback_path.display());
        tracing::info!("  Static assets: {}", self.static_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key).map(PathBuf::from)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "LISTEN",
        "DATASET_PATH",
        "CREDENTIALS_PATH",
        "FEEDBACK_PATH",
        "STATIC_DIR",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for key in KEYS {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();
        config.dataset_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_without_environment() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.dataset_path, PathBuf::from("Data.csv"));
        assert_eq!(config.credentials_path, PathBuf::from("Login.csv"));
        assert_eq!(config.feedback_path, PathBuf::from("Feedback.csv"));
    }

    #[test]
    #[serial]
    fn test_paths_from_environment() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATASET_PATH", "/data/cutoffs.csv");
            env::set_var("CREDENTIALS_PATH", "/data/accounts.csv");
            env::set_var("LISTEN", "127.0.0.1:8080");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("/data/cutoffs.csv"));
        assert_eq!(config.credentials_path, PathBuf::from("/data/accounts.csv"));
        assert_eq!(config.listen_addr, "127.0.0.1:8080");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_log_format_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}

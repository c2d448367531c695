//! Configuration loader
//!
//! Loads client configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Probe for a config file (JSON or TOML); fall back to defaults if none
//! 2. Overlay any environment variables that are set
//!
//! ## Environment Variables
//! - `CHRONODESK_API_URL`: API base URL (default `http://localhost:8000/api`)
//! - `CHRONODESK_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `CHRONODESK_ERROR_MESSAGE`: Fallback message for failed requests
//! - `CHRONODESK_TOKEN_STORE`: `memory`, `file` or `keychain`
//! - `CHRONODESK_TOKEN_PATH`: Session file for the `file` store
//! - `CHRONODESK_LOG_LEVEL`: Tracing filter directive
//! - `CHRONODESK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./chronodesk.json` or `./chronodesk.toml` (current working directory)
//! 2. `../chronodesk.json` or `../chronodesk.toml` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use chronodesk_domain::constants::API_BASE_URL_ENV;
use chronodesk_domain::{ChronoDeskError, Config, Result, TokenStoreKind};

const TIMEOUT_ENV: &str = "CHRONODESK_API_TIMEOUT_SECS";
const ERROR_MESSAGE_ENV: &str = "CHRONODESK_ERROR_MESSAGE";
const TOKEN_STORE_ENV: &str = "CHRONODESK_TOKEN_STORE";
const TOKEN_PATH_ENV: &str = "CHRONODESK_TOKEN_PATH";
const LOG_LEVEL_ENV: &str = "CHRONODESK_LOG_LEVEL";
const LOG_JSON_ENV: &str = "CHRONODESK_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// Uses the first config file found by [`probe_config_paths`], or defaults
/// when there is none, then applies environment overrides.
///
/// # Errors
/// Returns `ChronoDeskError::Config` if a file exists but cannot be parsed,
/// or an environment variable has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    tracing::info!(base_url = %config.api.base_url, store = ?config.session.store, "Configuration loaded");
    Ok(config)
}

/// Load configuration from defaults plus environment variables
///
/// # Errors
/// Returns `ChronoDeskError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Overlay environment variables that are set onto `config`
///
/// # Errors
/// Returns `ChronoDeskError::Config` if a variable has an invalid value.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(url) = env_opt(API_BASE_URL_ENV) {
        config.api.base_url = url;
    }

    if let Some(timeout) = env_opt(TIMEOUT_ENV) {
        config.api.timeout_seconds = timeout
            .parse::<u64>()
            .map_err(|e| ChronoDeskError::Config(format!("Invalid API timeout: {}", e)))?;
    }

    if let Some(message) = env_opt(ERROR_MESSAGE_ENV) {
        config.api.fallback_error_message = message;
    }

    if let Some(store) = env_opt(TOKEN_STORE_ENV) {
        config.session.store = store.parse::<TokenStoreKind>().map_err(ChronoDeskError::Config)?;
    }

    if let Some(path) = env_opt(TOKEN_PATH_ENV) {
        config.session.token_path = path;
    }

    if let Some(level) = env_opt(LOG_LEVEL_ENV) {
        config.logging.level = level;
    }

    config.logging.json = env_bool(LOG_JSON_ENV, config.logging.json);

    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ChronoDeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ChronoDeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ChronoDeskError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ChronoDeskError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ChronoDeskError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ChronoDeskError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ChronoDeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("chronodesk.json"),
            cwd.join("chronodesk.toml"),
            cwd.join("../chronodesk.json"),
            cwd.join("../chronodesk.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![exe_dir.join("chronodesk.json"), exe_dir.join("chronodesk.toml")]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Non-empty environment variable
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_opt(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chronodesk_domain::constants::DEFAULT_API_BASE_URL;
    use serial_test::serial;
    use tempfile::Builder;

    use super::*;

    const ALL_VARS: [&str; 7] = [
        API_BASE_URL_ENV,
        TIMEOUT_ENV,
        ERROR_MESSAGE_ENV,
        TOKEN_STORE_ENV,
        TOKEN_PATH_ENV,
        LOG_LEVEL_ENV,
        LOG_JSON_ENV,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_env_bool_parsing() {
        std::env::set_var("CHRONODESK_TEST_BOOL", "YES");
        assert!(env_bool("CHRONODESK_TEST_BOOL", false));
        std::env::set_var("CHRONODESK_TEST_BOOL", "off");
        assert!(!env_bool("CHRONODESK_TEST_BOOL", true));
        std::env::remove_var("CHRONODESK_TEST_BOOL");
        assert!(env_bool("CHRONODESK_TEST_BOOL", true));
    }

    #[test]
    #[serial]
    fn test_load_from_env_defaults() {
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_load_from_env_all_vars_set() {
        clear_env();
        std::env::set_var(API_BASE_URL_ENV, "https://hr.example.com/api");
        std::env::set_var(TIMEOUT_ENV, "5");
        std::env::set_var(ERROR_MESSAGE_ENV, "Falha na requisição");
        std::env::set_var(TOKEN_STORE_ENV, "memory");
        std::env::set_var(TOKEN_PATH_ENV, "/tmp/session.json");
        std::env::set_var(LOG_LEVEL_ENV, "debug");
        std::env::set_var(LOG_JSON_ENV, "true");

        let config = load_from_env().unwrap();
        clear_env();

        assert_eq!(config.api.base_url, "https://hr.example.com/api");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.fallback_error_message, "Falha na requisição");
        assert_eq!(config.session.store, TokenStoreKind::Memory);
        assert_eq!(config.session.token_path, "/tmp/session.json");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    #[serial]
    fn test_load_from_env_invalid_values() {
        clear_env();
        std::env::set_var(TIMEOUT_ENV, "soon");
        let result = load_from_env();
        clear_env();
        assert!(matches!(result, Err(ChronoDeskError::Config(_))));

        std::env::set_var(TOKEN_STORE_ENV, "cookie");
        let result = load_from_env();
        clear_env();
        assert!(matches!(result, Err(ChronoDeskError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_values() {
        clear_env();
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://file.example.com/api\"\ntimeout_seconds = 12")
            .unwrap();

        let mut config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.api.base_url, "https://file.example.com/api");

        std::env::set_var(API_BASE_URL_ENV, "https://env.example.com/api");
        apply_env_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.api.base_url, "https://env.example.com/api");
        assert_eq!(config.api.timeout_seconds, 12);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/chronodesk.json")));
        assert!(matches!(result, Err(ChronoDeskError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("api: {}", Path::new("chronodesk.yaml"));
        assert!(matches!(result, Err(ChronoDeskError::Config(msg)) if msg.contains("yaml")));
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let result = parse_config("{ not json", Path::new("chronodesk.json"));
        assert!(matches!(result, Err(ChronoDeskError::Config(msg)) if msg.contains("JSON")));
    }
}

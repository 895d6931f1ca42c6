//! Configuration file loading.
//!
//! Loads cadre configuration from TOML files at XDG-compliant locations.

use crate::config::types::CadreConfig;
use crate::error::CadreError;
use std::path::{Path, PathBuf};

/// Default configuration file name for project-local config.
const LOCAL_CONFIG_NAME: &str = "cadre.toml";

/// Default configuration file name within the XDG config directory.
const XDG_CONFIG_NAME: &str = "config.toml";

/// Application name for XDG directory lookup.
const APP_NAME: &str = "cadre";

/// Loads configuration from the default search paths.
///
/// Search order:
/// 1. `./cadre.toml` (project-local)
/// 2. `~/.config/cadre/config.toml` (XDG config)
///
/// When no file is found, returns the documented defaults (single mode,
/// 10 iterations, calculator tool).
///
/// # Errors
///
/// Returns a configuration error if a config file exists but cannot be
/// read or parsed.
pub fn load() -> Result<CadreConfig, CadreError> {
    let local_path = PathBuf::from(LOCAL_CONFIG_NAME);
    if local_path.exists() {
        return from_path(&local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let xdg_path = config_dir.join(APP_NAME).join(XDG_CONFIG_NAME);
        if xdg_path.exists() {
            return from_path(&xdg_path);
        }
    }

    tracing::debug!("no configuration file found, using defaults");
    Ok(CadreConfig::default())
}

/// Loads configuration from a specific file path.
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read, contains
/// invalid TOML, or does not match the expected schema.
pub fn from_path(path: &Path) -> Result<CadreConfig, CadreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CadreError::configuration(
            "config_file",
            format!("failed to read '{}': {}", path.display(), e),
        )
    })?;

    from_str(&contents).map_err(|e| {
        CadreError::configuration(
            "config_file",
            format!("failed to parse '{}': {}", path.display(), e),
        )
    })
}

/// Parses configuration from a TOML string.
///
/// # Errors
///
/// Returns a configuration error if the TOML is invalid or does not match
/// the schema.
pub fn from_str(toml_str: &str) -> Result<CadreConfig, CadreError> {
    toml::from_str(toml_str)
        .map_err(|e| CadreError::configuration("config", format!("invalid TOML: {e}")))
}

/// Returns the paths that would be searched for configuration files.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join(XDG_CONFIG_NAME));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [agent]
            name = "scout"
            mode = "auto"
            max_iterations = 5
            early_exit = true

            [tools]
            enabled = ["calculator", "search"]

            [credentials]
            api_key_env = "OPENAI_API_KEY"
        "#;

        let config = from_str(toml).unwrap();
        assert_eq!(config.agent.name, "scout");
        assert_eq!(config.agent.mode, "auto");
        assert_eq!(config.agent.max_iterations, 5);
        assert!(config.agent.early_exit);
        assert_eq!(config.tools.enabled.len(), 2);
        assert_eq!(
            config.credentials.api_key_env.as_deref(),
            Some("OPENAI_API_KEY")
        );
    }

    #[test]
    fn empty_string_yields_defaults() {
        let config = from_str("").unwrap();
        assert_eq!(config.agent.mode, "single");
        assert_eq!(config.tools.enabled, vec!["calculator"]);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config = from_str("[agent]\nmax_iterations = 3\n").unwrap();
        assert_eq!(config.agent.max_iterations, 3);
        assert_eq!(config.agent.mode, "single");
        assert_eq!(config.tools.enabled, vec!["calculator"]);
    }

    #[test]
    fn invalid_toml_is_a_configuration_error() {
        let err = from_str("[agent\nmode = ").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = from_path(Path::new("/nonexistent/cadre.toml")).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn search_paths_start_with_local() {
        let paths = search_paths();
        assert_eq!(paths[0], PathBuf::from("cadre.toml"));
    }
}

//! # VIKAS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loads, merges and validates the settings used by the `vikas` front-ends:
//! the default user name and simulated typing delay for `vikas chat`, and the
//! bind address for `vikas srv`. The reply engine itself takes no configuration;
//! its catalogue is compiled in.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by each command, not here)
//! 2. The file named by `VIKAS_CONFIG`, when that variable is set
//! 3. Project-specific `.vikas.toml` in the current directory or ancestors
//! 4. User-specific `config.toml` in the platform config directory
//! 5. Default values defined in the code
//!
//! When `VIKAS_CONFIG` is set it replaces sources 3 and 4 entirely and the file
//! must exist. The project search stops at the first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! name = "Ramesh Kumar"
//! reply_delay_ms = 400
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! enable_cors = true
//! ```
//!
use crate::core::error::{Result, VikasError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "VIKAS_CONFIG";
const PROJECT_CONFIG_FILENAME: &str = ".vikas.toml";

/// Longest simulated typing delay accepted, in milliseconds.
pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

const DEFAULT_REPLY_DELAY_MS: u64 = 400;
const DEFAULT_PORT: u16 = 8000;

/// Effective configuration after merging every source.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub chat: ChatConfig,
    pub server: ServerSettings,
}

/// Settings for the interactive `vikas chat` session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Raw name used when `--name` is not given. Normalized by the reply engine.
    pub name: Option<String>,
    /// Pause before each reply is printed, imitating the assistant typing.
    pub reply_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            name: None,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

/// Settings for the `vikas srv` HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            enable_cors: true,
        }
    }
}

/// On-disk shape of a config file. Every field is optional so a file only
/// needs to mention what it overrides.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    chat: FileChatConfig,
    #[serde(default)]
    server: FileServerConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileChatConfig {
    name: Option<String>,
    reply_delay_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FileServerConfig {
    host: Option<String>,
    port: Option<u16>,
    enable_cors: Option<bool>,
}

impl FileConfig {
    /// Layers `over` on top of `self`; fields set in `over` win.
    fn overlay(self, over: FileConfig) -> FileConfig {
        FileConfig {
            chat: FileChatConfig {
                name: over.chat.name.or(self.chat.name),
                reply_delay_ms: over.chat.reply_delay_ms.or(self.chat.reply_delay_ms),
            },
            server: FileServerConfig {
                host: over.server.host.or(self.server.host),
                port: over.server.port.or(self.server.port),
                enable_cors: over.server.enable_cors.or(self.server.enable_cors),
            },
        }
    }

    fn into_config(self) -> Result<Config> {
        let defaults = Config::default();
        let host = match self.server.host {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|e| {
                anyhow!(VikasError::Config(format!(
                    "Invalid server host '{}': {}",
                    raw, e
                )))
            })?,
            None => defaults.server.host,
        };
        Ok(Config {
            chat: ChatConfig {
                name: self.chat.name,
                reply_delay_ms: self
                    .chat
                    .reply_delay_ms
                    .unwrap_or(defaults.chat.reply_delay_ms),
            },
            server: ServerSettings {
                host,
                port: self.server.port.unwrap_or(defaults.server.port),
                enable_cors: self.server.enable_cors.unwrap_or(defaults.server.enable_cors),
            },
        })
    }
}

/// Loads the effective configuration for the current process.
///
/// Reads `VIKAS_CONFIG`, the current directory and the user config directory,
/// then defers to [`load_config_from`].
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let user_config = user_config_path();
    load_config_from(&current_dir, explicit.as_deref(), user_config.as_deref())
}

/// Loads configuration from explicit locations.
///
/// * `start_dir`: where the `.vikas.toml` search begins.
/// * `explicit`: a file that replaces project and user config when given.
/// * `user_config`: the user-level config file, if one is known.
pub fn load_config_from(
    start_dir: &Path,
    explicit: Option<&Path>,
    user_config: Option<&Path>,
) -> Result<Config> {
    let merged = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!(VikasError::Config(format!(
                    "{} points to '{}', which is not a readable file.",
                    CONFIG_ENV_VAR,
                    path.display()
                ))));
            }
            info!("Loading configuration from {}: {}", CONFIG_ENV_VAR, path.display());
            read_file_config(path)?
        }
        None => {
            let user = match user_config {
                Some(path) if path.is_file() => {
                    info!("Loading user configuration from: {}", path.display());
                    read_file_config(path)?
                }
                Some(path) => {
                    debug!("User configuration file not found at {}", path.display());
                    FileConfig::default()
                }
                None => FileConfig::default(),
            };
            let project = match find_project_config_path(start_dir) {
                Some(path) => {
                    info!("Loading project configuration from: {}", path.display());
                    read_file_config(&path)?
                }
                None => {
                    debug!("No project configuration file ({}) found.", PROJECT_CONFIG_FILENAME);
                    FileConfig::default()
                }
            };
            user.overlay(project)
        }
    };

    let config = merged.into_config()?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "Vikas", "vikas") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn validate_config(config: &Config) -> Result<()> {
    if config.chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(VikasError::Config(format!(
            "chat.reply_delay_ms is {} but may be at most {}.",
            config.chat.reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }
    if config.server.port == 0 {
        return Err(anyhow!(VikasError::Config(
            "server.port must be between 1 and 65535.".to_string()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [chat]
            name = "ramesh kumar"

            [server]
            port = 9000
        "#;

        let file: FileConfig = toml::from_str(toml_content).expect("Failed to parse TOML");
        let config = file.into_config().unwrap();

        assert_eq!(config.chat.name.as_deref(), Some("ramesh kumar"));
        assert_eq!(config.chat.reply_delay_ms, DEFAULT_REPLY_DELAY_MS); // Default
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST)); // Default
        assert!(config.server.enable_cors); // Default
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("[chat]\nnickname = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let file: FileConfig = toml::from_str("[server]\nhost = \"not-an-ip\"").unwrap();
        let err = file.into_config().unwrap_err();
        assert!(err.to_string().contains("Invalid server host 'not-an-ip'"));
        assert!(matches!(err.downcast_ref::<VikasError>(), Some(VikasError::Config(_))));
    }

    #[test]
    fn test_overlay_prefers_upper_layer() {
        let user: FileConfig =
            toml::from_str("[chat]\nname = \"user\"\nreply_delay_ms = 100\n[server]\nport = 7000").unwrap();
        let project: FileConfig = toml::from_str("[chat]\nname = \"project\"").unwrap();
        let config = user.overlay(project).into_config().unwrap();
        assert_eq!(config.chat.name.as_deref(), Some("project"));
        assert_eq!(config.chat.reply_delay_ms, 100);
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_validate_config_rejects_long_delay() {
        let config = Config {
            chat: ChatConfig {
                reply_delay_ms: MAX_REPLY_DELAY_MS + 1,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("reply_delay_ms"));
    }

    #[test]
    fn test_validate_config_rejects_port_zero() {
        let config = Config {
            server: ServerSettings {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_project_config_found_in_ancestor() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "[chat]\nreply_delay_ms = 0").unwrap();

        let config = load_config_from(&nested, None, None).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 0);
    }

    #[test]
    fn test_project_search_stops_at_git_dir() {
        let root = tempdir().unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "[chat]\nreply_delay_ms = 0").unwrap();

        let config = load_config_from(&repo, None, None).unwrap();
        assert_eq!(config.chat.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
    }

    #[test]
    fn test_project_overrides_user_config() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        let user_file = root.path().join("user.toml");
        fs::write(&user_file, "[chat]\nname = \"user name\"\n[server]\nenable_cors = false").unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "[chat]\nname = \"project name\"").unwrap();

        let config = load_config_from(root.path(), None, Some(&user_file)).unwrap();
        assert_eq!(config.chat.name.as_deref(), Some("project name"));
        assert!(!config.server.enable_cors);
    }

    #[test]
    fn test_explicit_file_replaces_other_sources() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "[chat]\nname = \"project\"").unwrap();
        let explicit = root.path().join("explicit.toml");
        fs::write(&explicit, "[server]\nport = 8123").unwrap();

        let config = load_config_from(root.path(), Some(&explicit), None).unwrap();
        assert_eq!(config.chat.name, None);
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let root = tempdir().unwrap();
        let missing = root.path().join("nope.toml");
        let err = load_config_from(root.path(), Some(&missing), None).unwrap_err();
        assert!(err.to_string().contains(CONFIG_ENV_VAR));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let root = tempdir().unwrap();
        let bad = root.path().join("bad.toml");
        fs::write(&bad, "[chat\nname = ").unwrap();
        let err = load_config_from(root.path(), Some(&bad), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}

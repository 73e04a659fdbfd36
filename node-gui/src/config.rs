//! Launch configuration.
//!
//! Values come from the optional `gui.toml` file of the data directory, overridden by the
//! command line. The log level can additionally be forced with the `LOG_LEVEL` environment
//! variable.

use std::{fmt, path::PathBuf, str::FromStr};

use bitcoin::Network;
use node_ui::{AppMode, Mode};
use serde::{de, Deserialize, Deserializer};
use tracing_subscriber::filter::LevelFilter;

use crate::{
    args::{CliOptions, DEFAULT_EXPORT_ICON_SIZE},
    dir::NodeDirectory,
};

pub const CONFIG_FILE_NAME: &str = "gui.toml";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

fn deserialize_fromstr_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': {}", string, e)))
}

/// Content of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, deserialize_with = "deserialize_fromstr_opt")]
    pub network: Option<Network>,
    #[serde(default, deserialize_with = "deserialize_fromstr_opt")]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub disable_wallet: bool,
    #[serde(default, deserialize_with = "deserialize_fromstr_opt")]
    pub log_level: Option<LevelFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ReadingFile(String),
    Parsing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Error while reading config file: {}", e),
            Self::Parsing(e) => write!(f, "Error while parsing config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigFile {
    /// Load the configuration file of the directory, a missing file gives the defaults.
    pub fn from_file(datadir: &NodeDirectory) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(datadir.config_file()) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::ReadingFile(e.to_string())),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parsing(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub directory: PathBuf,
    pub icon_size: u32,
}

/// Resolved launch configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub datadir: NodeDirectory,
    pub network: Network,
    pub app_mode: AppMode,
    pub log_level: LevelFilter,
    pub export: Option<ExportRequest>,
}

impl Config {
    pub fn new(
        datadir: NodeDirectory,
        cli: CliOptions,
        file: ConfigFile,
        env_log_level: Option<LevelFilter>,
    ) -> Self {
        let network = cli.network.or(file.network).unwrap_or(Network::Bitcoin);
        let app_mode = AppMode::from_launch(
            cli.mode.or(file.mode),
            cli.disable_wallet || file.disable_wallet,
        );
        let log_level = env_log_level
            .or(file.log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let export = cli.export_icons.map(|directory| ExportRequest {
            directory,
            icon_size: cli.icon_size.unwrap_or(DEFAULT_EXPORT_ICON_SIZE),
        });
        Self {
            datadir,
            network,
            app_mode,
            log_level,
            export,
        }
    }
}

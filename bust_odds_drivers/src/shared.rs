pub mod request;
pub mod server;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ConfigServer,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigServer {
    pub host: String,
    pub port: u16,
    /// 0 lets actix pick one worker per physical core.
    pub workers: usize,
}

impl Default for ConfigServer {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

/// Parsed from the `log_level` string of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] io::Error),

    #[error("cannot parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

impl Config {
    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        if self.log_level.is_empty() {
            return Ok(LogLevel::Info);
        }
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Parses the content of a config file. Fields left out take their default
/// values.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(content)?;
    config.log_level()?;
    Ok(config)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let file_content = fs::read_to_string(filename)?;
    parse_config(&file_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_full_config() {
        let config = parse_config(
            r#"
server:
  host: 0.0.0.0
  port: 9000
  workers: 4
log_level: Debug
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.workers, 4);
        assert_eq!(config.log_level().unwrap(), LogLevel::Debug);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config("server:\n  port: 3000\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.workers, 0);
        assert_eq!(config.log_level().unwrap(), LogLevel::Info);
    }

    #[test]
    fn should_return_error_when_log_level_unknown() {
        let result = parse_config("log_level: Loud\n");
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(level)) if level == "Loud"));
    }

    #[test]
    fn should_return_error_when_file_missing() {
        let result = parse_config_from_file("/nonexistent/bust_odds.yml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn log_level_converts_to_filter() {
        let filter: log::LevelFilter = LogLevel::Warn.into();
        assert_eq!(filter, log::LevelFilter::Warn);

        let config = parse_config("log_level: Error\n").unwrap();
        assert_eq!(config.log_level().unwrap(), LogLevel::Error);
        let filter: log::LevelFilter = config.log_level().unwrap().into();
        assert_eq!(filter, log::LevelFilter::Error);
        assert_eq!(LogLevel::Error.to_string(), "Error");
    }
}

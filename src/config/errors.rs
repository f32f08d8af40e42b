use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ReadError(PathBuf, io::Error),
    ParseError(serde_yaml::Error),
    EnvironmentNotFound(String),
    SocksServerMissing,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "failed to locate home directory"),
            ConfigError::ReadError(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::ParseError(err) => write!(f, "failed to parse configuration: {}", err),
            ConfigError::EnvironmentNotFound(name) => {
                write!(f, "environment '{}' not found in config", name)
            }
            ConfigError::SocksServerMissing => write!(f, "socks_server not configured"),
        }
    }
}

impl Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        ConfigError::ParseError(error)
    }
}

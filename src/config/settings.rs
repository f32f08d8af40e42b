use crate::log_warn;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: ProxyEntry, // Proxy settings used when no environment override applies
    #[serde(default)]
    pub environments: HashMap<String, ProxyEntry>, // Named override profiles
}

// A single proxy endpoint entry. Empty server / zero port mean "inherit".
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyEntry {
    #[serde(default)]
    pub socks_server: String,
    #[serde(default)]
    pub port: u16,
}

/// Effective proxy settings after environment overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProxy {
    pub server: String,
    pub port: u16,
}

impl Config {
    /// Resolves the effective proxy settings for an optional environment name.
    ///
    /// Starts from `defaults` and overlays the named environment's non-empty
    /// server and non-zero port. Fails when the environment is unknown or the
    /// resolved server is still empty.
    pub fn resolve(&self, environment: Option<&str>) -> Result<ResolvedProxy, super::ConfigError> {
        let mut resolved = ResolvedProxy {
            server: self.defaults.socks_server.clone(),
            port: self.defaults.port,
        };

        if let Some(name) = environment.filter(|name| !name.is_empty()) {
            let entry = self
                .environments
                .get(name)
                .ok_or_else(|| super::ConfigError::EnvironmentNotFound(name.to_string()))?;

            if entry.socks_server.is_empty() && entry.port == 0 {
                log_warn!("Environment '{}' overrides neither socks_server nor port", name);
            }

            if !entry.socks_server.is_empty() {
                resolved.server = entry.socks_server.clone();
            }
            if entry.port != 0 {
                resolved.port = entry.port;
            }
        }

        if resolved.server.is_empty() {
            return Err(super::ConfigError::SocksServerMissing);
        }

        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "../test/config/settings.rs"]
mod tests;

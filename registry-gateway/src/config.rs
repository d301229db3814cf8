//! Listener configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading the gateway configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `PORT` was not a valid TCP port number.
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    /// `REGISTRY_BIND_HOST` was not an IP address.
    #[error("invalid REGISTRY_BIND_HOST value '{0}'")]
    InvalidHost(String),
}

/// Where the gateway listens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT }
    }
}

impl GatewayConfig {
    /// Read `PORT` and `REGISTRY_BIND_HOST` from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if either variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables both fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if either variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match set("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let host = match set("REGISTRY_BIND_HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };

        Ok(Self { host, port })
    }

    /// Socket address to bind.
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
    }

    #[test]
    fn defaults_listen_on_all_interfaces_port_8080() {
        let config = match GatewayConfig::from_lookup(lookup(&[])) {
            Ok(c) => c,
            Err(e) => panic!("defaults must load: {e}"),
        };
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn empty_port_uses_default() {
        let config = GatewayConfig::from_lookup(lookup(&[("PORT", "")]));
        assert!(matches!(config, Ok(ref c) if c.port == DEFAULT_PORT), "got {config:?}");
    }

    #[test]
    fn port_and_host_are_read() {
        let vars = [("PORT", "9090"), ("REGISTRY_BIND_HOST", "127.0.0.1")];
        let config = match GatewayConfig::from_lookup(lookup(&vars)) {
            Ok(c) => c,
            Err(e) => panic!("valid config rejected: {e}"),
        };
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_port = GatewayConfig::from_lookup(lookup(&[("PORT", "http")]));
        assert!(matches!(bad_port, Err(ConfigError::InvalidPort(ref v)) if v == "http"));

        let bad_host = GatewayConfig::from_lookup(lookup(&[("REGISTRY_BIND_HOST", "localhost")]));
        assert!(matches!(bad_host, Err(ConfigError::InvalidHost(_))));
    }
}

use std::{
    env::var,
    net::{Ipv6Addr, SocketAddr},
    sync::Arc,
    time::Duration,
};

pub type Config = Arc<Configuration>;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for environment variable {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug)]
pub struct Configuration {
    /// The address to listen on.
    pub listen_address: SocketAddr,
    /// The port to listen on.
    pub app_port: u16,
    /// Requests running longer than this are answered with 408.
    pub request_timeout: Duration,
}

impl Configuration {
    /// Reads configuration from the process environment.
    pub fn new() -> Result<Config, ConfigError> {
        Self::from_vars(|key| var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// anything that is unset.
    pub fn from_vars<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        let listen_address = SocketAddr::from((Ipv6Addr::UNSPECIFIED, app_port));

        Ok(Arc::new(Configuration {
            listen_address,
            app_port,
            request_timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            var: key,
            value,
        }),
    }
}

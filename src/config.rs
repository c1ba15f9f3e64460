use clap::Parser;
use piston_client::{PistonConfig, DEFAULT_API_URL};
use std::{
    collections::HashSet,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use crate::error::ServerError;

/// Paths owned by the relay itself; compile routes may not shadow them
const RESERVED_ROUTES: [&str; 2] = ["/health", "/languages"];

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Interface to listen on
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Paths the compile endpoint is mounted on (comma-separated)
    #[arg(
        long = "route",
        env = "RELAY_ROUTES",
        value_delimiter = ',',
        default_value = "/compile"
    )]
    pub routes: Vec<String>,

    /// Base URL of the Piston API
    #[arg(long, env = "PISTON_API_URL", default_value = DEFAULT_API_URL)]
    pub piston_url: String,

    /// Outbound request timeout in seconds
    #[arg(long, env = "PISTON_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
            routes: vec!["/compile".to_string()],
            piston_url: DEFAULT_API_URL.to_string(),
            timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn piston_config(&self) -> PistonConfig {
        PistonConfig::new(self.piston_url.clone()).with_timeout(Duration::from_secs(self.timeout))
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.routes.is_empty() {
            return Err(ServerError::Configuration(
                "at least one compile route is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for route in &self.routes {
            if !route.starts_with('/') {
                return Err(ServerError::Configuration(format!(
                    "route {:?} must start with '/'",
                    route
                )));
            }
            if RESERVED_ROUTES.contains(&route.as_str()) {
                return Err(ServerError::Configuration(format!(
                    "route {:?} is reserved",
                    route
                )));
            }
            if !seen.insert(route.as_str()) {
                return Err(ServerError::Configuration(format!(
                    "route {:?} is listed twice",
                    route
                )));
            }
        }

        if self.timeout == 0 {
            return Err(ServerError::Configuration(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

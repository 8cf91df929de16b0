//! Server configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Interface to bind (from PHYSICS_LESSONS_HOST)
    pub host: IpAddr,
    /// Port to listen on (from PHYSICS_LESSONS_PORT)
    pub port: u16,
    /// Ratings database file (from PHYSICS_LESSONS_DATABASE); `None` uses the
    /// platform data directory
    pub database: Option<PathBuf>,
    /// Directory served under `/static` (from PHYSICS_LESSONS_STATIC_DIR)
    pub static_dir: Option<PathBuf>,
    /// Allowed CORS origins (from PHYSICS_LESSONS_CORS_ORIGINS, comma-separated)
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("PHYSICS_LESSONS_HOST")
            .and_then(|s| match s.trim().parse() {
                Ok(ip) => Some(ip),
                Err(_) => {
                    tracing::warn!("Ignoring invalid PHYSICS_LESSONS_HOST: {}", s);
                    None
                }
            })
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

        let port = lookup("PHYSICS_LESSONS_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database = lookup("PHYSICS_LESSONS_DATABASE").map(PathBuf::from);
        let static_dir = lookup("PHYSICS_LESSONS_STATIC_DIR").map(PathBuf::from);

        let cors_origins = lookup("PHYSICS_LESSONS_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Self {
            host,
            port,
            database,
            static_dir,
            cors_origins,
        }
    }

    /// Defaults with nothing read from the environment (for testing).
    pub fn local() -> Self {
        Self::from_lookup(|_| None)
    }
}

//! Server configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! | --- | --- | --- |
//! | `SUPABASE_URL` | project URL | required unless `ROUTE_MOCK_DATA` is set |
//! | `SUPABASE_KEY` | API key | required unless `ROUTE_MOCK_DATA` is set |
//! | `ROUTE_MOCK_DATA` | JSON seed file for the in-memory store | unset |
//! | `BIND_ADDR` | listen address | `127.0.0.1:3000` |
//! | `NEARBY_RADIUS_KM` | haversine start radius | `3.0` |

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::RouteConfig;
use crate::storage::SupabaseConfig;

/// Listen address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where places and edges are stored.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Hosted PostgREST database.
    Supabase(SupabaseConfig),

    /// In-memory store seeded from a JSON file.
    Mock(PathBuf),
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub backend: Backend,
    pub route: RouteConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })?,
        };

        let mut route = RouteConfig::default();
        if let Some(value) = get("NEARBY_RADIUS_KM") {
            let km: f64 = value
                .trim()
                .parse()
                .ok()
                .filter(|km: &f64| km.is_finite() && *km >= 0.0)
                .ok_or(ConfigError::Invalid {
                    name: "NEARBY_RADIUS_KM",
                    value,
                })?;
            route = route.with_nearby_radius_km(km);
        }

        let backend = match get("ROUTE_MOCK_DATA") {
            Some(path) => Backend::Mock(PathBuf::from(path)),
            None => {
                let url = get("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
                let key = get("SUPABASE_KEY").ok_or(ConfigError::Missing("SUPABASE_KEY"))?;
                Backend::Supabase(SupabaseConfig::new(url, key))
            }
        };

        Ok(Self {
            bind_addr,
            backend,
            route,
        })
    }
}

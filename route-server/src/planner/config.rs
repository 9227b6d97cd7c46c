//! Route planning configuration.

/// Default cutoff for haversine start lookups, in kilometres.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 3.0;

/// Configuration parameters for route requests.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteConfig {
    /// Maximum distance (km) between the caller's coordinates and the
    /// start place when the haversine metric is requested.
    pub nearby_radius_km: f64,
}

impl RouteConfig {
    /// Create a new configuration with the given radius.
    pub fn new(nearby_radius_km: f64) -> Self {
        Self { nearby_radius_km }
    }

    /// Set the haversine start radius.
    pub fn with_nearby_radius_km(mut self, km: f64) -> Self {
        self.nearby_radius_km = km;
        self
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}

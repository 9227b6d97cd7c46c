//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DomainError, Edge, EdgeId, NewPlace, Place, PlaceKey};
use crate::locate::DistanceMetric;
use crate::planner::{RouteError, RouteRequest, StartPoint};
use crate::storage::WireId;

/// Query string of `GET /api/route`.
///
/// Either `startId` or both coordinates pick the start.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    /// Start place id
    pub start_id: Option<String>,

    /// Destination place id
    pub end_id: Option<String>,

    /// Caller's latitude, used when `startId` is absent
    #[serde(alias = "lat")]
    pub latitude: Option<String>,

    /// Caller's longitude
    #[serde(alias = "lon")]
    pub longitude: Option<String>,

    /// `planar` (default) or `haversine`
    pub metric: Option<String>,
}

impl RouteQuery {
    /// Build a route request. `nearby_radius_km` bounds haversine lookups.
    pub fn to_request(&self, nearby_radius_km: f64) -> Result<RouteRequest, RouteError> {
        let end = self
            .end_id
            .as_deref()
            .ok_or(DomainError::MissingField("endId"))?;
        let end = PlaceKey::parse(end)?;

        let start = match (&self.start_id, &self.latitude, &self.longitude) {
            (Some(id), _, _) => StartPoint::ByIdentifier(PlaceKey::parse(id)?),
            (None, Some(lat), Some(lon)) => {
                let at = Coordinate::new(
                    parse_degrees("latitude", lat)?,
                    parse_degrees("longitude", lon)?,
                )?;
                match self.metric.as_deref().and_then(DistanceMetric::parse) {
                    Some(DistanceMetric::Haversine) => StartPoint::ByHaversineNearest {
                        at,
                        max_radius_km: nearby_radius_km,
                    },
                    _ => StartPoint::ByPlanarNearest(at),
                }
            }
            _ => {
                return Err(RouteError::InvalidInput(
                    "startId or latitude and longitude are required".to_string(),
                ));
            }
        };

        Ok(RouteRequest::new(start, end))
    }
}

fn parse_degrees(field: &str, value: &str) -> Result<f64, RouteError> {
    value
        .trim()
        .parse()
        .map_err(|_| RouteError::InvalidInput(format!("{field} must be a number, got {value:?}")))
}

/// Body of `PUT /api/route`.
#[derive(Debug, Deserialize)]
pub struct ToggleEdgeRequest {
    /// Edge id, as a number or numeric string
    pub id: Option<WireId>,

    /// New active flag
    pub status: Option<bool>,
}

impl ToggleEdgeRequest {
    /// The edge and its new flag.
    pub fn parts(&self) -> Result<(EdgeId, bool), RouteError> {
        let (Some(id), Some(status)) = (&self.id, self.status) else {
            return Err(RouteError::InvalidInput(
                "id and status are required".to_string(),
            ));
        };
        let id = id
            .as_i64()
            .ok_or_else(|| RouteError::InvalidInput(format!("invalid edge id: {id:?}")))?;
        Ok((EdgeId(id), status))
    }
}

/// Body of `POST /api/destination`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDestinationRequest {
    pub place_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_nodes: Option<i64>,
}

impl AddDestinationRequest {
    /// Validate into a place ready to store.
    pub fn to_new_place(&self) -> Result<NewPlace, DomainError> {
        let name = self
            .place_name
            .clone()
            .ok_or(DomainError::MissingField("placeName"))?;
        let latitude = self.latitude.ok_or(DomainError::MissingField("latitude"))?;
        let longitude = self
            .longitude
            .ok_or(DomainError::MissingField("longitude"))?;

        NewPlace::new(name, Coordinate::new(latitude, longitude)?, self.total_nodes)
    }
}

/// A place in responses, with the store's field names.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub id: i64,
    pub places_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_nodes: Option<i64>,
}

/// An edge in responses, with the store's field names.
#[derive(Debug, Serialize)]
pub struct EdgeResult {
    pub id: i64,
    pub places1_id: i64,
    pub places2_id: i64,
    pub distance: f64,
    pub status: bool,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<&Place> for PlaceResult {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.0,
            places_name: place.name.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            total_nodes: place.total_nodes,
        }
    }
}

impl From<&Edge> for EdgeResult {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.0,
            places1_id: edge.from.0,
            places2_id: edge.to.0,
            distance: edge.weight,
            status: edge.active,
        }
    }
}

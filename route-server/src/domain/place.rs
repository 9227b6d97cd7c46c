//! Place types.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Identifier of a place.
///
/// # Examples
///
/// ```
/// use route_server::domain::PlaceId;
///
/// let id = PlaceId::parse("42").unwrap();
/// assert_eq!(id, PlaceId(42));
///
/// // Empty and non-numeric input is rejected
/// assert!(PlaceId::parse("").is_err());
/// assert!(PlaceId::parse("north-gate").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub i64);

impl PlaceId {
    /// Parse an identifier from its decimal form.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<i64>()
            .map(PlaceId)
            .map_err(|_| DomainError::InvalidPlaceId(s.to_string()))
    }
}

impl FromStr for PlaceId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A place identifier as a caller supplied it.
///
/// Stored places always have integer ids, so any other non-blank text is
/// accepted but can never match a place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaceKey {
    /// An integer id, which may or may not name a place.
    Id(PlaceId),

    /// Text that is not an integer.
    Unmatched(String),
}

impl PlaceKey {
    /// Parse a caller-supplied identifier. Only blank input is rejected.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPlaceId(s.to_string()));
        }
        Ok(PlaceId::parse(trimmed)
            .map(PlaceKey::Id)
            .unwrap_or_else(|_| PlaceKey::Unmatched(trimmed.to_string())))
    }

    /// The integer id, if there is one.
    pub fn id(&self) -> Option<PlaceId> {
        match self {
            PlaceKey::Id(id) => Some(*id),
            PlaceKey::Unmatched(_) => None,
        }
    }
}

impl From<PlaceId> for PlaceKey {
    fn from(id: PlaceId) -> Self {
        PlaceKey::Id(id)
    }
}

impl fmt::Display for PlaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceKey::Id(id) => write!(f, "{id}"),
            PlaceKey::Unmatched(text) => write!(f, "{text}"),
        }
    }
}

/// A latitude/longitude pair in degrees.
///
/// The planar metric also accepts values in any locally flat frame, so
/// the only check is that both components are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and infinite components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DomainError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A named location node in the routing network.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Metadata carried through to responses; routing never reads it.
    pub total_nodes: Option<i64>,
}

impl Place {
    /// Create a place with no node-count metadata.
    pub fn new(id: PlaceId, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            total_nodes: None,
        }
    }

    /// The place's position.
    pub fn position(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A place that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub name: String,
    pub position: Coordinate,
    pub total_nodes: Option<i64>,
}

impl NewPlace {
    /// Validate and build a new place.
    ///
    /// The name must contain a non-whitespace character.
    pub fn new(
        name: impl Into<String>,
        position: Coordinate,
        total_nodes: Option<i64>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingField("placeName"));
        }
        Ok(Self {
            name,
            position,
            total_nodes,
        })
    }
}

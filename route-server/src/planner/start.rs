//! How the start of a route is chosen.

use crate::domain::{Coordinate, Place, PlaceId, PlaceKey};
use crate::locate::{DistanceMetric, LocateError, resolve_nearest};

/// Start of a route: a known place, or the place nearest to a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum StartPoint {
    /// Start at this place.
    ByIdentifier(PlaceKey),

    /// Start at the place with the smallest planar distance. No cutoff.
    ByPlanarNearest(Coordinate),

    /// Start at the place with the smallest great-circle distance, which
    /// must be within `max_radius_km`.
    ByHaversineNearest { at: Coordinate, max_radius_km: f64 },
}

impl StartPoint {
    /// Pick the start place.
    ///
    /// `ByIdentifier` is returned as-is without checking `places`; an id
    /// that is not in the graph simply yields no route. A key that is not
    /// an integer resolves to `None`.
    pub fn resolve(&self, places: &[Place]) -> Result<Option<PlaceId>, LocateError> {
        match self {
            StartPoint::ByIdentifier(key) => Ok(key.id()),
            StartPoint::ByPlanarNearest(at) => {
                resolve_nearest(places, *at, None, DistanceMetric::Planar).map(|n| Some(n.place))
            }
            StartPoint::ByHaversineNearest { at, max_radius_km } => resolve_nearest(
                places,
                *at,
                Some(*max_radius_km),
                DistanceMetric::Haversine,
            )
            .map(|n| Some(n.place)),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StartPoint::ByIdentifier(_) => "id",
            StartPoint::ByPlanarNearest(_) => "planar",
            StartPoint::ByHaversineNearest { .. } => "haversine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places() -> Vec<Place> {
        vec![
            Place::new(PlaceId(1), "Gate", 0.0, 0.0),
            Place::new(PlaceId(2), "Library", 0.0, 1.0),
        ]
    }

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn by_identifier_skips_lookup() {
        let start = StartPoint::ByIdentifier(PlaceId(77).into());
        assert_eq!(start.resolve(&[]), Ok(Some(PlaceId(77))));
    }

    #[test]
    fn non_numeric_identifier_resolves_to_nothing() {
        let start = StartPoint::ByIdentifier(PlaceKey::Unmatched("gate".into()));
        assert_eq!(start.resolve(&places()), Ok(None));
    }

    #[test]
    fn planar_has_no_cutoff() {
        let start = StartPoint::ByPlanarNearest(at(50.0, 50.0));
        assert_eq!(start.resolve(&places()), Ok(Some(PlaceId(2))));
    }

    #[test]
    fn haversine_respects_radius() {
        let near = StartPoint::ByHaversineNearest {
            at: at(0.0, 0.001),
            max_radius_km: 3.0,
        };
        assert_eq!(near.resolve(&places()), Ok(Some(PlaceId(1))));

        let far = StartPoint::ByHaversineNearest {
            at: at(9.0, 1.0),
            max_radius_km: 3.0,
        };
        assert!(matches!(
            far.resolve(&places()),
            Err(LocateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn nearest_with_no_places() {
        let start = StartPoint::ByPlanarNearest(at(0.0, 0.0));
        assert_eq!(start.resolve(&[]), Err(LocateError::NoCandidates));
    }

    #[test]
    fn kind_names() {
        assert_eq!(StartPoint::ByIdentifier(PlaceId(1).into()).kind(), "id");
        assert_eq!(StartPoint::ByPlanarNearest(at(0.0, 0.0)).kind(), "planar");
    }
}

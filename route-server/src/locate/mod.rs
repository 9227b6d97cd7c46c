//! Nearest-place lookup for callers that supply raw coordinates.
//!
//! Two metrics are supported:
//! - **Planar**: straight-line distance on the raw degree values. Cheap and
//!   fine for a small, locally flat area, but the result has no physical
//!   unit, so it is never used with a radius cutoff by the web layer.
//! - **Haversine**: great-circle distance in kilometres on a sphere of
//!   radius 6371 km. Used whenever a real-world radius must be enforced.

use crate::domain::{Coordinate, Place, PlaceId};

/// Mean Earth radius used by the haversine metric, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How distance between two coordinates is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    #[default]
    Planar,
    Haversine,
}

impl DistanceMetric {
    /// Parse a metric name as used in query strings.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planar" => Some(DistanceMetric::Planar),
            "haversine" => Some(DistanceMetric::Haversine),
            _ => None,
        }
    }

    /// Distance between two coordinates under this metric.
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            DistanceMetric::Planar => planar_distance(a, b),
            DistanceMetric::Haversine => haversine_km(a, b),
        }
    }
}

/// Euclidean distance treating latitude and longitude as flat axes.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = a.latitude - b.latitude;
    let d_lon = a.longitude - b.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

/// Great-circle distance between two coordinates in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Error from nearest-place lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    /// There was nothing to choose from
    #[error("no starting place found: no candidate places")]
    NoCandidates,

    /// The closest place is farther than the allowed radius
    #[error("no starting place found within {max_radius} (nearest is {distance:.3} away)")]
    OutOfRange { distance: f64, max_radius: f64 },
}

/// The place closest to a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    pub place: PlaceId,
    pub distance: f64,
}

/// Find the place closest to `at`.
///
/// Ties keep the place that comes first in `places`; callers should not
/// rely on that order. Places whose distance is NaN are never selected.
/// With `max_radius` set, a best match farther than the radius is an error
/// rather than a distant start.
pub fn resolve_nearest(
    places: &[Place],
    at: Coordinate,
    max_radius: Option<f64>,
    metric: DistanceMetric,
) -> Result<Nearest, LocateError> {
    let mut best: Option<Nearest> = None;

    for place in places {
        let distance = metric.distance(place.position(), at);
        if distance.is_nan() {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Nearest {
                place: place.id,
                distance,
            });
        }
    }

    let best = best.ok_or(LocateError::NoCandidates)?;

    if let Some(max_radius) = max_radius
        && best.distance > max_radius
    {
        return Err(LocateError::OutOfRange {
            distance: best.distance,
            max_radius,
        });
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    fn places() -> Vec<Place> {
        vec![
            Place::new(PlaceId(1), "Gate", 0.0, 0.0),
            Place::new(PlaceId(2), "Library", 0.0, 1.0),
            Place::new(PlaceId(3), "Canteen", 0.0, 2.0),
        ]
    }

    #[test]
    fn planar_distance_is_euclidean() {
        assert_eq!(planar_distance(at(0.0, 0.0), at(3.0, 4.0)), 5.0);
        assert_eq!(planar_distance(at(1.0, 1.0), at(1.0, 1.0)), 0.0);
    }

    #[test]
    fn haversine_one_degree_at_equator() {
        // 1 degree of arc on a 6371 km sphere
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        let d = haversine_km(at(0.0, 0.0), at(0.0, 1.0));
        assert!((d - expected).abs() < 1e-9, "got {d}");
        assert!((d - 111.195).abs() < 0.001);
    }

    #[test]
    fn haversine_is_symmetric_and_zero_on_identity() {
        let a = at(-7.7713, 110.3775);
        let b = at(-7.7656, 110.3721);
        assert_eq!(haversine_km(a, a), 0.0);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-12);
        // Two points on a campus, well under a kilometre apart
        assert!(haversine_km(a, b) < 1.0);
    }

    #[test]
    fn planar_picks_closest() {
        let nearest =
            resolve_nearest(&places(), at(0.1, 1.8), None, DistanceMetric::Planar).unwrap();
        assert_eq!(nearest.place, PlaceId(3));
    }

    #[test]
    fn ties_keep_first_encountered() {
        // Exactly between places 1 and 2
        let nearest =
            resolve_nearest(&places(), at(0.0, 0.5), None, DistanceMetric::Planar).unwrap();
        assert_eq!(nearest.place, PlaceId(1));
    }

    #[test]
    fn haversine_exact_match_within_radius() {
        let nearest =
            resolve_nearest(&places(), at(0.0, 1.0), Some(3.0), DistanceMetric::Haversine)
                .unwrap();
        assert_eq!(nearest.place, PlaceId(2));
        assert_eq!(nearest.distance, 0.0);
    }

    #[test]
    fn haversine_far_away_is_out_of_range() {
        // Nine degrees north of place 2 is roughly 1000 km
        let result = resolve_nearest(&places(), at(9.0, 1.0), Some(3.0), DistanceMetric::Haversine);
        match result {
            Err(LocateError::OutOfRange {
                distance,
                max_radius,
            }) => {
                assert!(distance > 990.0 && distance < 1010.0, "got {distance}");
                assert_eq!(max_radius, 3.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let nearest = resolve_nearest(&places(), at(0.0, 4.0), Some(2.0), DistanceMetric::Planar)
            .unwrap();
        assert_eq!(nearest.place, PlaceId(3));
        assert_eq!(nearest.distance, 2.0);
    }

    #[test]
    fn far_away_without_radius_still_resolves() {
        let nearest =
            resolve_nearest(&places(), at(9.0, 1.0), None, DistanceMetric::Haversine).unwrap();
        assert_eq!(nearest.place, PlaceId(2));
    }

    #[test]
    fn empty_places_is_not_found() {
        let result = resolve_nearest(&[], at(0.0, 0.0), None, DistanceMetric::Planar);
        assert_eq!(result, Err(LocateError::NoCandidates));
    }

    #[test]
    fn nan_positions_are_ignored() {
        let places = vec![
            Place::new(PlaceId(1), "Broken", f64::NAN, 0.0),
            Place::new(PlaceId(2), "Library", 5.0, 5.0),
        ];
        let nearest =
            resolve_nearest(&places, at(0.0, 0.0), None, DistanceMetric::Planar).unwrap();
        assert_eq!(nearest.place, PlaceId(2));
    }

    #[test]
    fn parse_metric() {
        assert_eq!(DistanceMetric::parse("planar"), Some(DistanceMetric::Planar));
        assert_eq!(
            DistanceMetric::parse("Haversine"),
            Some(DistanceMetric::Haversine)
        );
        assert_eq!(DistanceMetric::parse("manhattan"), None);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            LocateError::NoCandidates.to_string(),
            "no starting place found: no candidate places"
        );
        let err = LocateError::OutOfRange {
            distance: 12.5,
            max_radius: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "no starting place found within 3 (nearest is 12.500 away)"
        );
    }
}

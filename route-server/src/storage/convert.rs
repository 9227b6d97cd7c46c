//! Conversion from store rows to domain types.
//!
//! A malformed row is skipped with a warning instead of failing the
//! whole table, so one bad record cannot take routing down.

use tracing::warn;

use crate::domain::{Edge, EdgeId, NewPlace, Place, PlaceId};

use super::types::{EdgeRow, NewPlaceRow, PlaceRow};

/// Error during row to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// An endpoint id was not an integer
    #[error("invalid place id in {field}: {value:?}")]
    InvalidPlaceId { field: &'static str, value: String },

    /// Missing required column
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl TryFrom<EdgeRow> for Edge {
    type Error = ConversionError;

    fn try_from(row: EdgeRow) -> Result<Self, Self::Error> {
        let from = row
            .places1_id
            .as_i64()
            .ok_or_else(|| ConversionError::InvalidPlaceId {
                field: "places1_id",
                value: format!("{:?}", row.places1_id),
            })?;
        let to = row
            .places2_id
            .as_i64()
            .ok_or_else(|| ConversionError::InvalidPlaceId {
                field: "places2_id",
                value: format!("{:?}", row.places2_id),
            })?;
        let weight = row.distance.ok_or(ConversionError::MissingField("distance"))?;

        Ok(Edge {
            id: EdgeId(row.id),
            from: PlaceId(from),
            to: PlaceId(to),
            weight,
            active: row.status.unwrap_or(false),
        })
    }
}

impl TryFrom<PlaceRow> for Place {
    type Error = ConversionError;

    fn try_from(row: PlaceRow) -> Result<Self, Self::Error> {
        let latitude = row.latitude.ok_or(ConversionError::MissingField("latitude"))?;
        let longitude = row
            .longitude
            .ok_or(ConversionError::MissingField("longitude"))?;

        Ok(Place {
            id: PlaceId(row.id),
            name: row.places_name.unwrap_or_default(),
            latitude,
            longitude,
            total_nodes: row.total_nodes,
        })
    }
}

impl From<&Place> for PlaceRow {
    fn from(place: &Place) -> Self {
        PlaceRow {
            id: place.id.0,
            places_name: Some(place.name.clone()),
            latitude: Some(place.latitude),
            longitude: Some(place.longitude),
            total_nodes: place.total_nodes,
        }
    }
}

impl From<&NewPlace> for NewPlaceRow {
    fn from(place: &NewPlace) -> Self {
        NewPlaceRow {
            places_name: place.name.clone(),
            latitude: place.position.latitude,
            longitude: place.position.longitude,
            total_nodes: place.total_nodes,
        }
    }
}

/// Convert `distance` rows, skipping any that are malformed.
pub fn convert_edges(rows: Vec<EdgeRow>) -> Vec<Edge> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            Edge::try_from(row)
                .inspect_err(|e| warn!(edge = id, error = %e, "skipping edge row"))
                .ok()
        })
        .collect()
}

/// Convert `places` rows, skipping any that are malformed.
pub fn convert_places(rows: Vec<PlaceRow>) -> Vec<Place> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            Place::try_from(row)
                .inspect_err(|e| warn!(place = id, error = %e, "skipping place row"))
                .ok()
        })
        .collect()
}

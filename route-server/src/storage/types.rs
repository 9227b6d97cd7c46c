//! Store row DTOs.
//!
//! These types map directly to the PostgREST JSON for the `places` and
//! `distance` tables. Columns that the schema allows to be null are
//! `Option`s; conversion to domain types decides what is required.

use serde::{Deserialize, Serialize};

/// An identifier that may arrive as a JSON number or as a string.
///
/// The `distance` table stores its endpoint ids as text, and request
/// bodies built by browsers often do the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    /// The integer value, if there is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            WireId::Number(n) => Some(*n),
            WireId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for WireId {
    fn from(n: i64) -> Self {
        WireId::Number(n)
    }
}

/// A row of the `distance` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRow {
    pub id: i64,

    /// One endpoint (place id, stored as text).
    pub places1_id: WireId,

    /// The other endpoint.
    pub places2_id: WireId,

    /// Edge weight.
    pub distance: Option<f64>,

    /// Active flag; null counts as inactive.
    pub status: Option<bool>,
}

/// A row of the `places` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRow {
    pub id: i64,
    pub places_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_nodes: Option<i64>,
}

/// Insert payload for the `places` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlaceRow {
    pub places_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub total_nodes: Option<i64>,
}

/// Update payload for an edge's active flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct EdgeStatusPatch {
    pub status: bool,
}

//! Expands a path of identifiers into full place records.

use std::collections::HashMap;

use tracing::warn;

use super::dijkstra::Path;
use crate::domain::{Place, PlaceId};

/// Map each place on `path`, in order, to its record in `places`.
///
/// An absent path yields an empty route. Identifiers with no matching
/// place are skipped. If `places` contains the same id twice, the first
/// record is used.
pub fn assemble_route(path: Option<&Path>, places: &[Place]) -> Vec<Place> {
    let Some(path) = path else {
        return Vec::new();
    };

    let mut by_id: HashMap<PlaceId, &Place> = HashMap::with_capacity(places.len());
    for place in places {
        by_id.entry(place.id).or_insert(place);
    }

    path.nodes
        .iter()
        .filter_map(|id| {
            let place = by_id.get(id).map(|p| (*p).clone());
            if place.is_none() {
                warn!(place = %id, "path references unknown place");
            }
            place
        })
        .collect()
}

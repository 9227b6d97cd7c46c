//! Operations on stored edges and places outside of route search.

use tracing::info;

use crate::domain::{Edge, EdgeId, NewPlace, Place};
use crate::storage::RouteStore;

use super::route::RouteError;

/// Mark an edge active or inactive. Routes planned afterwards see the change.
pub async fn set_edge_status<S: RouteStore>(
    store: &S,
    edge: EdgeId,
    active: bool,
) -> Result<(), RouteError> {
    store.set_edge_active(edge, active).await?;
    info!(%edge, active, "edge status updated");
    Ok(())
}

/// Every edge record, active or not.
pub async fn list_edges<S: RouteStore>(store: &S) -> Result<Vec<Edge>, RouteError> {
    let edges = store.list_edges().await?;
    if edges.is_empty() {
        return Err(RouteError::NotFound("no locations found".to_string()));
    }
    Ok(edges)
}

/// Store a new place and return what the store recorded.
pub async fn add_place<S: RouteStore>(
    store: &S,
    place: NewPlace,
) -> Result<Vec<Place>, RouteError> {
    let inserted = store.insert_place(place).await?;
    for p in &inserted {
        info!(place = %p.id, name = %p.name, "place added");
    }
    Ok(inserted)
}

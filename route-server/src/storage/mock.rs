//! In-memory store for running without database access.
//!
//! Seeds from a JSON file shaped like the two store tables and keeps
//! every change in memory for the lifetime of the process.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::{Edge, EdgeId, NewPlace, Place, PlaceId};

use super::RouteStore;
use super::convert::{convert_edges, convert_places};
use super::error::StoreError;
use super::types::{EdgeRow, PlaceRow};

/// Seed file contents: rows of the `places` and `distance` tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockData {
    #[serde(default)]
    pub places: Vec<PlaceRow>,

    #[serde(default)]
    pub distance: Vec<EdgeRow>,
}

/// Store that serves places and edges from memory.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    places: Arc<RwLock<Vec<Place>>>,
    edges: Arc<RwLock<Vec<Edge>>>,
}

impl MockStore {
    /// Create a store holding the given records.
    pub fn new(places: Vec<Place>, edges: Vec<Edge>) -> Self {
        Self {
            places: Arc::new(RwLock::new(places)),
            edges: Arc::new(RwLock::new(edges)),
        }
    }

    /// Create a store from seed JSON. Malformed rows are skipped.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: MockData = serde_json::from_str(json)
            .map_err(|e| StoreError::MockData(format!("failed to parse seed data: {e}")))?;

        Ok(Self::new(
            convert_places(data.places),
            convert_edges(data.distance),
        ))
    }

    /// Load a store from a seed file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| StoreError::MockData(format!("failed to read {path:?}: {e}")))?;
        Self::from_json(&json)
    }
}

impl RouteStore for MockStore {
    async fn list_edges(&self) -> Result<Vec<Edge>, StoreError> {
        Ok(self.edges.read().await.clone())
    }

    async fn list_places(&self) -> Result<Vec<Place>, StoreError> {
        Ok(self.places.read().await.clone())
    }

    async fn set_edge_active(&self, edge: EdgeId, active: bool) -> Result<(), StoreError> {
        let mut edges = self.edges.write().await;
        for e in edges.iter_mut().filter(|e| e.id == edge) {
            e.active = active;
        }
        Ok(())
    }

    async fn insert_place(&self, place: NewPlace) -> Result<Vec<Place>, StoreError> {
        let mut places = self.places.write().await;
        let id = places
            .iter()
            .map(|p| p.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::MockData("no place id left to assign".to_string()))?;

        let stored = Place {
            id: PlaceId(id),
            name: place.name,
            latitude: place.position.latitude,
            longitude: place.position.longitude,
            total_nodes: place.total_nodes,
        };
        places.push(stored.clone());
        Ok(vec![stored])
    }
}

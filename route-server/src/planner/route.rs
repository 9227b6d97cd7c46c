//! The route pipeline: load, resolve the start, build, search, assemble.

use tracing::{debug, info};

use crate::domain::{DomainError, Place, PlaceId, PlaceKey};
use crate::graph::build_graph;
use crate::locate::LocateError;
use crate::storage::{RouteStore, StoreError};

use super::assemble::assemble_route;
use super::dijkstra::shortest_path;
use super::start::StartPoint;

/// Error from route planning and the record operations around it.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The request itself was malformed
    #[error("invalid request: {0}")]
    InvalidInput(String),

    /// Data the request depends on does not exist
    #[error("{0}")]
    NotFound(String),

    /// The store failed
    #[error(transparent)]
    Upstream(#[from] StoreError),
}

impl From<LocateError> for RouteError {
    fn from(err: LocateError) -> Self {
        RouteError::NotFound(err.to_string())
    }
}

impl From<DomainError> for RouteError {
    fn from(err: DomainError) -> Self {
        RouteError::InvalidInput(err.to_string())
    }
}

/// Request for a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// How the first place is chosen.
    pub start: StartPoint,

    /// The destination place.
    pub end: PlaceKey,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(start: StartPoint, end: impl Into<PlaceKey>) -> Self {
        Self {
            start,
            end: end.into(),
        }
    }

    /// Validate the request before touching the store.
    pub fn validate(&self) -> Result<(), RouteError> {
        if let StartPoint::ByHaversineNearest { max_radius_km, .. } = self.start
            && !(max_radius_km.is_finite() && max_radius_km >= 0.0)
        {
            return Err(RouteError::InvalidInput(format!(
                "search radius must be a non-negative number, got {max_radius_km}"
            )));
        }
        Ok(())
    }
}

/// Result of route planning.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// The resolved start place. `None` when the start key is not an id.
    pub start: Option<PlaceId>,

    /// The destination place. `None` when the end key is not an id.
    pub end: Option<PlaceId>,

    /// Places along the route, start first. Empty when unreachable.
    pub places: Vec<Place>,

    /// Total weight of the route, if there is one.
    pub distance: Option<f64>,
}

impl RouteResult {
    fn unreachable(start: Option<PlaceId>, end: Option<PlaceId>) -> Self {
        Self {
            start,
            end,
            places: Vec::new(),
            distance: None,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        self.distance.is_some()
    }
}

/// Route planner over a store.
pub struct RoutePlanner<'a, S: RouteStore> {
    store: &'a S,
}

impl<'a, S: RouteStore> RoutePlanner<'a, S> {
    /// Create a new planner.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Plan a route.
    ///
    /// An unreachable destination, an end id that no active edge touches,
    /// or an identifier that is not an integer is not an error: the result
    /// simply has no places.
    pub async fn plan(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        request.validate()?;

        let (edges, places) =
            futures::try_join!(self.store.list_edges(), self.store.list_places())?;

        if edges.is_empty() {
            return Err(RouteError::NotFound("no route data found".to_string()));
        }
        if places.is_empty() {
            return Err(RouteError::NotFound("no places data found".to_string()));
        }

        let resolved = request.start.resolve(&places)?;
        let (Some(start), Some(end)) = (resolved, request.end.id()) else {
            info!(start = ?request.start, end = %request.end, "identifier matches no place");
            return Ok(RouteResult::unreachable(resolved, request.end.id()));
        };
        debug!(kind = request.start.kind(), %start, "resolved start place");

        let graph = build_graph(&edges);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph"
        );

        let path = shortest_path(&graph, start, end);
        let route = assemble_route(path.as_ref(), &places);

        match &path {
            Some(p) => info!(
                %start,
                %end,
                hops = p.hop_count(),
                distance = p.distance,
                "route found"
            ),
            None => info!(%start, %end, "no route"),
        }

        Ok(RouteResult {
            start: Some(start),
            end: Some(end),
            places: route,
            distance: path.map(|p| p.distance),
        })
    }
}

//! Shortest-route planning over the place network.
//!
//! Every request loads the current edges and places, picks a start place,
//! builds a fresh graph from the active edges and runs Dijkstra's
//! algorithm over it. The path of place ids is then expanded back into
//! full place records.
//!
//! Nothing is cached between requests, so an edge toggled off is gone
//! from the very next route.

mod assemble;
mod config;
mod dijkstra;
mod frontier;
mod records;
mod route;
mod start;

pub use assemble::assemble_route;
pub use config::{DEFAULT_NEARBY_RADIUS_KM, RouteConfig};
pub use dijkstra::{Path, shortest_path};
pub use frontier::Frontier;
pub use records::{add_place, list_edges, set_edge_status};
pub use route::{RouteError, RoutePlanner, RouteRequest, RouteResult};
pub use start::StartPoint;

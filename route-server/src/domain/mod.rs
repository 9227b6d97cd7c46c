//! Domain types for the route server.
//!
//! Places are the nodes of the routing network and edges ("distance"
//! records) connect them. Both are read fresh from the store on every
//! request and never outlive it.

mod edge;
mod error;
mod place;

pub use edge::{Edge, EdgeId};
pub use error::DomainError;
pub use place::{Coordinate, NewPlace, Place, PlaceId, PlaceKey};

//! Persistence boundary.
//!
//! Places and edges live in a hosted PostgREST (Supabase) database with
//! two tables, `places` and `distance`. The route core only needs the
//! operations on [`RouteStore`], so it can run against the real client or
//! the in-memory [`MockStore`].
//!
//! Store calls are the only suspension points of a request. Nothing here
//! retries: a failed call is reported to the caller as-is.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::{Edge, EdgeId, NewPlace, Place};

pub use client::{SupabaseClient, SupabaseConfig};
pub use convert::{ConversionError, convert_edges, convert_places};
pub use error::StoreError;
pub use mock::{MockData, MockStore};
pub use types::{EdgeRow, NewPlaceRow, PlaceRow, WireId};

/// Operations the route core needs from the data store.
pub trait RouteStore: Send + Sync {
    /// All edge records, active and inactive.
    fn list_edges(&self) -> impl Future<Output = Result<Vec<Edge>, StoreError>> + Send;

    /// All place records.
    fn list_places(&self) -> impl Future<Output = Result<Vec<Place>, StoreError>> + Send;

    /// Set an edge's active flag. Future graph builds see the new value.
    fn set_edge_active(
        &self,
        edge: EdgeId,
        active: bool,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Insert a place and return the stored record(s).
    fn insert_place(
        &self,
        place: NewPlace,
    ) -> impl Future<Output = Result<Vec<Place>, StoreError>> + Send;
}

//! Web layer for the route server.
//!
//! Provides JSON endpoints for planning routes, toggling edges and
//! managing places.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

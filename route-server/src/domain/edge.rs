//! Edge ("distance" record) types.

use std::fmt;

use super::PlaceId;

/// Identifier of an edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub i64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weighted, toggleable connection between two places.
///
/// Edges are undirected: `from` and `to` only record the order the store
/// returned them in. Inactive edges take no part in routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: PlaceId,
    pub to: PlaceId,
    pub weight: f64,
    pub active: bool,
}

impl Edge {
    /// Create an active edge.
    pub fn new(id: EdgeId, from: PlaceId, to: PlaceId, weight: f64) -> Self {
        Self {
            id,
            from,
            to,
            weight,
            active: true,
        }
    }

    /// Return this edge with the given active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether the edge touches `place`.
    #[cfg(test)]
    pub(crate) fn touches(&self, place: PlaceId) -> bool {
        self.from == place || self.to == place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_edge_is_active() {
        let edge = Edge::new(EdgeId(1), PlaceId(1), PlaceId(2), 5.0);
        assert!(edge.active);
        assert!(!edge.with_active(false).active);
    }

    #[test]
    fn touches_either_end() {
        let edge = Edge::new(EdgeId(1), PlaceId(1), PlaceId(2), 5.0);
        assert!(edge.touches(PlaceId(1)));
        assert!(edge.touches(PlaceId(2)));
        assert!(!edge.touches(PlaceId(3)));
    }
}

//! Adjacency graph of the active part of the place network.
//!
//! The graph is rebuilt from the full edge list on every request and is
//! never shared between requests. Neighbours are kept in identifier order
//! so that searches over the same edge list always explore them in the
//! same sequence.

use std::collections::BTreeMap;

use tracing::warn;

use crate::domain::{Edge, PlaceId};

/// Undirected weighted graph keyed by place identifier.
///
/// Connections are symmetric: if B is a neighbour of A with weight w, A is
/// a neighbour of B with weight w.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<PlaceId, BTreeMap<PlaceId, f64>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect two places in both directions.
    ///
    /// An existing connection between the same pair is overwritten.
    pub fn connect(&mut self, a: PlaceId, b: PlaceId, weight: f64) {
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Whether the place is a node of the graph.
    pub fn contains(&self, place: PlaceId) -> bool {
        self.adjacency.contains_key(&place)
    }

    /// Weight of the connection between two places, if any.
    pub fn weight(&self, from: PlaceId, to: PlaceId) -> Option<f64> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    /// Neighbours of a place with their edge weights, in identifier order.
    ///
    /// A place that is not in the graph has no neighbours.
    pub fn neighbours(&self, place: PlaceId) -> impl Iterator<Item = (PlaceId, f64)> + '_ {
        self.adjacency
            .get(&place)
            .into_iter()
            .flat_map(|links| links.iter().map(|(id, weight)| (*id, *weight)))
    }

    /// All nodes, in identifier order.
    #[cfg(test)]
    pub(crate) fn nodes(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections (A-B and B-A count once).
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(node, links)| links.keys().filter(|other| *other >= node).count())
            .sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the routing graph from the store's edge records.
///
/// Only active edges are included. When the same pair appears in more
/// than one active edge, the one processed last wins; weights are never
/// aggregated. Edges with a negative or non-finite weight are skipped
/// because the shortest-path search requires non-negative weights.
pub fn build_graph(edges: &[Edge]) -> Graph {
    let mut graph = Graph::new();

    for edge in edges.iter().filter(|e| e.active) {
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            warn!(
                edge = %edge.id,
                weight = edge.weight,
                "skipping edge with unusable weight"
            );
            continue;
        }

        if let Some(previous) = graph.weight(edge.from, edge.to)
            && previous != edge.weight
        {
            warn!(
                edge = %edge.id,
                from = %edge.from,
                to = %edge.to,
                previous,
                weight = edge.weight,
                "duplicate active edge overrides earlier weight"
            );
        }

        graph.connect(edge.from, edge.to, edge.weight);
    }

    graph
}

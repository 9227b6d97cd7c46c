//! Single-source shortest path (Dijkstra) over the place graph.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::frontier::Frontier;
use crate::domain::PlaceId;
use crate::graph::Graph;

/// A shortest path between two places.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Places from start to end inclusive, no repeats.
    pub nodes: Vec<PlaceId>,

    /// Sum of the edge weights along the path.
    pub distance: f64,
}

impl Path {
    /// First place on the path.
    pub fn start(&self) -> Option<PlaceId> {
        self.nodes.first().copied()
    }

    /// Last place on the path.
    pub fn end(&self) -> Option<PlaceId> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Find the shortest path from `start` to `end`.
///
/// Returns `None` when either place is not a node of the graph or when
/// `end` cannot be reached. All weights in `graph` must be non-negative;
/// [`crate::graph::build_graph`] never admits anything else.
///
/// Runs in O((V + E) log V). The search stops as soon as `end` is settled.
pub fn shortest_path(graph: &Graph, start: PlaceId, end: PlaceId) -> Option<Path> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    let mut distances: HashMap<PlaceId, f64> = HashMap::new();
    let mut previous: HashMap<PlaceId, PlaceId> = HashMap::new();
    let mut settled: HashSet<PlaceId> = HashSet::new();
    let mut frontier = Frontier::new();

    distances.insert(start, 0.0);
    frontier.push(start, 0.0);

    while let Some((current, distance)) = frontier.pop_min() {
        // Nothing left in the frontier can be reached either
        if distance == f64::INFINITY {
            break;
        }

        // Stale entry from an earlier, worse relaxation
        if !settled.insert(current) {
            continue;
        }

        if current == end {
            trace!(settled = settled.len(), queued = frontier.len(), "reached destination");
            return Some(Path {
                nodes: reconstruct(&previous, start, end),
                distance,
            });
        }

        for (neighbour, weight) in graph.neighbours(current) {
            if settled.contains(&neighbour) {
                continue;
            }

            let candidate = distance + weight;
            let best = distances.get(&neighbour).copied().unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(neighbour, candidate);
                previous.insert(neighbour, current);
                frontier.push(neighbour, candidate);
            }
        }
    }

    trace!(settled = settled.len(), queued = frontier.len(), "destination unreachable");
    None
}

/// Walk predecessor links back from `end` to `start`.
///
/// Predecessors only change on a strict improvement, so they never form a
/// cycle and the walk always terminates.
fn reconstruct(previous: &HashMap<PlaceId, PlaceId>, start: PlaceId, end: PlaceId) -> Vec<PlaceId> {
    let mut nodes = vec![end];
    let mut current = end;

    while current != start {
        match previous.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    nodes.reverse();
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, EdgeId};
    use crate::graph::build_graph;

    fn id(n: i64) -> PlaceId {
        PlaceId(n)
    }

    fn edge(n: i64, from: i64, to: i64, weight: f64) -> Edge {
        Edge::new(EdgeId(n), PlaceId(from), PlaceId(to), weight)
    }

    fn ids(nodes: &[i64]) -> Vec<PlaceId> {
        nodes.iter().copied().map(PlaceId).collect()
    }

    #[test]
    fn line_graph() {
        let graph = build_graph(&[edge(1, 1, 2, 5.0), edge(2, 2, 3, 5.0)]);

        let path = shortest_path(&graph, id(1), id(3)).unwrap();
        assert_eq!(path.nodes, ids(&[1, 2, 3]));
        assert_eq!(path.distance, 10.0);
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.start(), Some(id(1)));
        assert_eq!(path.end(), Some(id(3)));
    }

    #[test]
    fn line_graph_reversed_direction() {
        let graph = build_graph(&[edge(1, 1, 2, 5.0), edge(2, 2, 3, 5.0)]);

        let path = shortest_path(&graph, id(3), id(1)).unwrap();
        assert_eq!(path.nodes, ids(&[3, 2, 1]));
        assert_eq!(path.distance, 10.0);
    }

    #[test]
    fn inactive_edge_breaks_path() {
        let graph = build_graph(&[
            edge(1, 1, 2, 5.0),
            edge(2, 2, 3, 5.0).with_active(false),
        ]);

        assert_eq!(shortest_path(&graph, id(1), id(3)), None);
    }

    #[test]
    fn start_equals_end() {
        let graph = build_graph(&[edge(1, 1, 2, 5.0)]);

        let path = shortest_path(&graph, id(2), id(2)).unwrap();
        assert_eq!(path.nodes, ids(&[2]));
        assert_eq!(path.distance, 0.0);
        assert_eq!(path.hop_count(), 0);
    }

    #[test]
    fn unknown_nodes_are_unreachable() {
        let graph = build_graph(&[edge(1, 1, 2, 5.0)]);

        assert_eq!(shortest_path(&graph, id(9), id(1)), None);
        assert_eq!(shortest_path(&graph, id(1), id(9)), None);
        assert_eq!(shortest_path(&graph, id(9), id(9)), None);
    }

    #[test]
    fn empty_graph_is_unreachable() {
        let graph = build_graph(&[]);
        assert_eq!(shortest_path(&graph, id(1), id(2)), None);
    }

    #[test]
    fn disconnected_components() {
        let graph = build_graph(&[edge(1, 1, 2, 1.0), edge(2, 3, 4, 1.0)]);
        assert_eq!(shortest_path(&graph, id(1), id(4)), None);
    }

    #[test]
    fn prefers_cheaper_detour() {
        // Direct 1-3 costs 10, via 2 costs 4
        let graph = build_graph(&[
            edge(1, 1, 3, 10.0),
            edge(2, 1, 2, 2.0),
            edge(3, 2, 3, 2.0),
        ]);

        let path = shortest_path(&graph, id(1), id(3)).unwrap();
        assert_eq!(path.nodes, ids(&[1, 2, 3]));
        assert_eq!(path.distance, 4.0);
    }

    #[test]
    fn relaxation_updates_earlier_estimate() {
        // Node 4 is first reached via 2 (cost 1 + 10), later improved via 3 (cost 2 + 1)
        let graph = build_graph(&[
            edge(1, 1, 2, 1.0),
            edge(2, 1, 3, 2.0),
            edge(3, 2, 4, 10.0),
            edge(4, 3, 4, 1.0),
            edge(5, 4, 5, 1.0),
        ]);

        let path = shortest_path(&graph, id(1), id(5)).unwrap();
        assert_eq!(path.nodes, ids(&[1, 3, 4, 5]));
        assert_eq!(path.distance, 4.0);
    }

    #[test]
    fn zero_weight_edges() {
        let graph = build_graph(&[edge(1, 1, 2, 0.0), edge(2, 2, 3, 0.0)]);

        let path = shortest_path(&graph, id(1), id(3)).unwrap();
        assert_eq!(path.nodes, ids(&[1, 2, 3]));
        assert_eq!(path.distance, 0.0);
    }

    #[test]
    fn duplicate_edge_uses_last_weight() {
        // 1-2 listed with 5 then 3; the alternative via 4 costs 4
        let graph = build_graph(&[
            edge(1, 1, 2, 5.0),
            edge(2, 1, 2, 3.0),
            edge(3, 1, 4, 2.0),
            edge(4, 4, 2, 2.0),
        ]);

        let path = shortest_path(&graph, id(1), id(2)).unwrap();
        assert_eq!(path.nodes, ids(&[1, 2]));
        assert_eq!(path.distance, 3.0);
    }

    #[test]
    fn equal_cost_paths_are_deterministic() {
        // Two routes of cost 2 from 1 to 4: via 2 and via 3
        let edges = [
            edge(1, 1, 3, 1.0),
            edge(2, 1, 2, 1.0),
            edge(3, 3, 4, 1.0),
            edge(4, 2, 4, 1.0),
        ];

        let first = shortest_path(&build_graph(&edges), id(1), id(4)).unwrap();
        for _ in 0..10 {
            let again = shortest_path(&build_graph(&edges), id(1), id(4)).unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(first.distance, 2.0);
        // Neighbours are explored in id order, so 2 settles first and claims 4
        assert_eq!(first.nodes, ids(&[1, 2, 4]));
    }

    #[test]
    fn reconstruct_follows_predecessors() {
        let mut previous = HashMap::new();
        previous.insert(id(3), id(2));
        previous.insert(id(2), id(1));

        assert_eq!(reconstruct(&previous, id(1), id(3)), ids(&[1, 2, 3]));
        assert_eq!(reconstruct(&previous, id(1), id(1)), ids(&[1]));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Edge, EdgeId};
    use crate::graph::build_graph;
    use proptest::prelude::*;

    /// Random graphs over ids 0..10 with integer-valued weights, so that
    /// sums are exact and distance comparisons need no tolerance.
    fn graph_strategy() -> impl Strategy<Value = Graph> {
        prop::collection::vec((0i64..10, 0i64..10, 0u32..50, any::<bool>()), 1..40).prop_map(
            |raw| {
                let edges: Vec<Edge> = raw
                    .into_iter()
                    .enumerate()
                    .map(|(i, (a, b, w, active))| {
                        Edge::new(EdgeId(i as i64), PlaceId(a), PlaceId(b), f64::from(w))
                            .with_active(active)
                    })
                    .collect();
                build_graph(&edges)
            },
        )
    }

    fn distance(graph: &Graph, a: PlaceId, b: PlaceId) -> Option<f64> {
        shortest_path(graph, a, b).map(|p| p.distance)
    }

    proptest! {
        /// A place always reaches itself with an empty walk
        #[test]
        fn start_equals_end_is_trivial(graph in graph_strategy()) {
            for node in graph.nodes() {
                let path = shortest_path(&graph, node, node).unwrap();
                prop_assert_eq!(path.nodes, vec![node]);
                prop_assert_eq!(path.distance, 0.0);
            }
        }

        /// Same graph, same query, same answer
        #[test]
        fn search_is_idempotent(graph in graph_strategy(), a in 0i64..10, b in 0i64..10) {
            let first = shortest_path(&graph, PlaceId(a), PlaceId(b));
            let second = shortest_path(&graph, PlaceId(a), PlaceId(b));
            prop_assert_eq!(first, second);
        }

        /// Paths are well formed: right endpoints, real edges, no repeats, matching distance
        #[test]
        fn paths_are_valid(graph in graph_strategy(), a in 0i64..10, b in 0i64..10) {
            if let Some(path) = shortest_path(&graph, PlaceId(a), PlaceId(b)) {
                prop_assert_eq!(path.start(), Some(PlaceId(a)));
                prop_assert_eq!(path.end(), Some(PlaceId(b)));

                let unique: HashSet<_> = path.nodes.iter().collect();
                prop_assert_eq!(unique.len(), path.nodes.len());

                let mut total = 0.0;
                for pair in path.nodes.windows(2) {
                    let w = graph.weight(pair[0], pair[1]);
                    prop_assert!(w.is_some());
                    total += w.unwrap_or_default();
                }
                prop_assert_eq!(total, path.distance);
            }
        }

        /// d(A, C) <= d(A, B) + d(B, C) whenever all three are connected
        #[test]
        fn triangle_inequality(graph in graph_strategy(), a in 0i64..10, b in 0i64..10, c in 0i64..10) {
            let (a, b, c) = (PlaceId(a), PlaceId(b), PlaceId(c));
            if let (Some(ab), Some(bc)) = (distance(&graph, a, b), distance(&graph, b, c)) {
                let ac = distance(&graph, a, c);
                prop_assert!(ac.is_some());
                prop_assert!(ac.unwrap_or(f64::INFINITY) <= ab + bc);
            }
        }

        /// Undirected graph: the distance is the same both ways
        #[test]
        fn distance_is_symmetric(graph in graph_strategy(), a in 0i64..10, b in 0i64..10) {
            let forward = distance(&graph, PlaceId(a), PlaceId(b));
            let backward = distance(&graph, PlaceId(b), PlaceId(a));
            prop_assert_eq!(forward, backward);
        }
    }
}

//! Pairwise savings scores for route merging.
//!
//! # Algorithm
//!
//! For every pair of delivery nodes `(i, j)` the savings score is the
//! distance saved by serving both on one route instead of two separate
//! depot round-trips:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! The ranked list (largest savings first) is the ordering the classic
//! savings algorithm consumes when merging routes. The default
//! assembler in this crate selects stops by direct nearest distance
//! instead, so the ranking is exposed as an independent artifact for
//! analysis and for merge-based policies.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceGraph;

/// A scored delivery pair, candidate for sharing a route.
///
/// `i < j` always holds; the score is symmetric in the pair and may be
/// negative when the pair lies on opposite sides of the depot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    /// Distance saved by serving `i` and `j` on one route, in km.
    pub score: f64,
    /// Lower delivery node index.
    pub i: usize,
    /// Higher delivery node index.
    pub j: usize,
}

/// Ranks all delivery pairs of the graph by descending savings score.
///
/// Pairs are skipped (not an error) when any of the three required
/// edges — depot to `i`, depot to `j`, or `i` to `j` — is absent. Ties
/// break by ascending `(i, j)` so the ordering is deterministic.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::{DistanceGraph, FreeFlow};
/// use fleet_routing::savings::rank_pairs;
///
/// let depot = Location::depot(0.0, 0.0);
/// let deliveries = vec![
///     Location::delivery(1, 0.0, 1.0),
///     Location::delivery(2, 0.0, 2.0),
/// ];
/// let graph = DistanceGraph::build(&depot, &deliveries, &FreeFlow).unwrap();
///
/// let ranked = rank_pairs(&graph);
/// assert_eq!(ranked.len(), 1);
/// // Both deliveries sit on the same bearing, so merging saves the
/// // whole depot round-trip to the nearer one.
/// assert!(ranked[0].score > 0.0);
/// ```
pub fn rank_pairs(graph: &DistanceGraph) -> Vec<SavingsEntry> {
    let n = graph.size();
    let mut entries = Vec::with_capacity(n.saturating_sub(1) * n.saturating_sub(2) / 2);

    for i in 1..n {
        for j in (i + 1)..n {
            let (Some(depot_i), Some(depot_j), Some(pair)) =
                (graph.get(0, i), graph.get(0, j), graph.get(i, j))
            else {
                continue;
            };
            entries.push(SavingsEntry {
                score: depot_i.distance + depot_j.distance - pair.distance,
                i,
                j,
            });
        }
    }

    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .expect("savings score should not be NaN")
            .then_with(|| (a.i, a.j).cmp(&(b.i, b.j)))
    });

    entries
}

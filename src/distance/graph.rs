//! Dense distance/time graph over depot and delivery nodes.

use crate::models::{Location, ValidationError};

use super::haversine::haversine_km;
use super::traffic::TrafficModel;

/// Assumed average travel speed in km/h, used to derive edge times.
pub const AVG_SPEED_KMH: f64 = 40.0;

/// A single undirected edge between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Traffic-adjusted travel distance in km.
    pub distance: f64,
    /// Travel time in hours at the average speed.
    pub time: f64,
}

/// A dense symmetric graph of travel distances and times.
///
/// Node 0 is the depot; nodes 1..=N are deliveries in request order.
/// The graph is complete after construction, but edges can be removed
/// to model unreachable pairs; consumers treat an absent edge as "no
/// route between these nodes".
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::{DistanceGraph, FreeFlow};
///
/// let depot = Location::depot(0.0, 0.0);
/// let deliveries = vec![Location::delivery(1, 0.0, 1.0)];
/// let graph = DistanceGraph::build(&depot, &deliveries, &FreeFlow).unwrap();
///
/// let edge = graph.get(0, 1).expect("complete graph");
/// assert!((edge.time - edge.distance / 40.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceGraph {
    edges: Vec<Option<Edge>>,
    size: usize,
}

impl DistanceGraph {
    /// Builds the complete graph over `{depot} ∪ deliveries`.
    ///
    /// Every unordered pair gets the great-circle distance scaled by
    /// the traffic model's multiplier, with time derived at
    /// [`AVG_SPEED_KMH`]. Fails if any location carries an invalid
    /// coordinate.
    pub fn build(
        depot: &Location,
        deliveries: &[Location],
        traffic: &impl TrafficModel,
    ) -> Result<Self, ValidationError> {
        depot.validate()?;
        for delivery in deliveries {
            delivery.validate()?;
        }

        let size = deliveries.len() + 1;
        let mut graph = Self {
            edges: vec![None; size * size],
            size,
        };

        let node = |i: usize| -> &Location {
            if i == 0 {
                depot
            } else {
                &deliveries[i - 1]
            }
        };

        for i in 0..size {
            for j in (i + 1)..size {
                let distance = haversine_km(node(i), node(j)) * traffic.multiplier(i, j);
                graph.set(
                    i,
                    j,
                    Edge {
                        distance,
                        time: distance / AVG_SPEED_KMH,
                    },
                );
            }
        }

        Ok(graph)
    }

    /// Returns the edge between `i` and `j`, or `None` if the pair is
    /// unreachable.
    ///
    /// There are no self-edges: `get(i, i)` is always `None`.
    pub fn get(&self, i: usize, j: usize) -> Option<Edge> {
        self.edges[i * self.size + j]
    }

    /// Sets the edge between `i` and `j` in both directions.
    pub fn set(&mut self, i: usize, j: usize, edge: Edge) {
        self.edges[i * self.size + j] = Some(edge);
        self.edges[j * self.size + i] = Some(edge);
    }

    /// Removes the edge between `i` and `j`, making the pair
    /// unreachable in both directions.
    pub fn remove(&mut self, i: usize, j: usize) {
        self.edges[i * self.size + j] = None;
        self.edges[j * self.size + i] = None;
    }

    /// Number of nodes, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of delivery nodes.
    pub fn deliveries(&self) -> usize {
        self.size - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{FreeFlow, SeededTraffic};

    fn sample_deliveries() -> Vec<Location> {
        vec![
            Location::delivery(1, 0.0, 1.0),
            Location::delivery(2, 1.0, 0.0),
            Location::delivery(3, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_build_complete() {
        let depot = Location::depot(0.0, 0.0);
        let graph = DistanceGraph::build(&depot, &sample_deliveries(), &FreeFlow)
            .expect("valid input");
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.deliveries(), 3);
        for i in 0..4 {
            assert!(graph.get(i, i).is_none());
            for j in (i + 1)..4 {
                assert!(graph.get(i, j).is_some(), "missing edge ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_edges_symmetric() {
        let depot = Location::depot(0.0, 0.0);
        let graph = DistanceGraph::build(&depot, &sample_deliveries(), &SeededTraffic::new(5))
            .expect("valid input");
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_eq!(graph.get(i, j), graph.get(j, i));
            }
        }
    }

    #[test]
    fn test_time_from_average_speed() {
        let depot = Location::depot(0.0, 0.0);
        let graph = DistanceGraph::build(&depot, &sample_deliveries(), &SeededTraffic::new(11))
            .expect("valid input");
        let edge = graph.get(0, 2).expect("complete graph");
        assert!((edge.time - edge.distance / AVG_SPEED_KMH).abs() < 1e-12);
    }

    #[test]
    fn test_traffic_inflates_distance() {
        let depot = Location::depot(0.0, 0.0);
        let deliveries = sample_deliveries();
        let free = DistanceGraph::build(&depot, &deliveries, &FreeFlow).expect("valid input");
        let jammed = DistanceGraph::build(&depot, &deliveries, &SeededTraffic::new(1))
            .expect("valid input");
        for i in 0..4 {
            for j in (i + 1)..4 {
                let base = free.get(i, j).expect("edge").distance;
                let adjusted = jammed.get(i, j).expect("edge").distance;
                assert!(adjusted >= base);
                assert!(adjusted < base * 1.2 + 1e-9);
            }
        }
    }

    #[test]
    fn test_build_rejects_bad_coordinate() {
        let depot = Location::depot(0.0, 0.0);
        let deliveries = vec![Location::delivery(1, 95.0, 0.0)];
        let err = DistanceGraph::build(&depot, &deliveries, &FreeFlow)
            .expect_err("latitude out of range");
        assert_eq!(err, ValidationError::InvalidLatitude { id: 1, lat: 95.0 });
    }

    #[test]
    fn test_build_rejects_bad_depot() {
        let depot = Location::depot(0.0, f64::NAN);
        assert!(DistanceGraph::build(&depot, &[], &FreeFlow).is_err());
    }

    #[test]
    fn test_remove_makes_unreachable() {
        let depot = Location::depot(0.0, 0.0);
        let mut graph = DistanceGraph::build(&depot, &sample_deliveries(), &FreeFlow)
            .expect("valid input");
        graph.remove(1, 2);
        assert!(graph.get(1, 2).is_none());
        assert!(graph.get(2, 1).is_none());
        assert!(graph.get(1, 3).is_some());
    }

    #[test]
    fn test_depot_only_graph() {
        let depot = Location::depot(0.0, 0.0);
        let graph = DistanceGraph::build(&depot, &[], &FreeFlow).expect("valid input");
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.deliveries(), 0);
        assert!(graph.get(0, 0).is_none());
    }
}

//! Closeness centrality with reachability correction

use crate::graph::algorithms::{bfs_distances, map_sources};
use crate::graph::CompressedGraph;

/// Compute closeness centrality for every node.
///
/// For a node reaching `r` nodes (itself included) with total distance
/// `d`, closeness is `((r - 1) / d) * ((r - 1) / (N - 1))`. The second
/// factor scales down nodes stuck in small components of a disconnected
/// graph. Isolated nodes score 0.
pub fn closeness_centrality(graph: &CompressedGraph, parallel: bool) -> Vec<f64> {
    map_sources(graph, parallel, |source| closeness_of(graph, source))
}

fn closeness_of(graph: &CompressedGraph, source: usize) -> f64 {
    let node_count = graph.node_count();

    let (reachable, total_distance) = bfs_distances(graph, source)
        .into_iter()
        .flatten()
        .fold((0usize, 0u64), |(reachable, total), dist| {
            (reachable + 1, total + u64::from(dist))
        });

    if total_distance == 0 || node_count <= 1 {
        return 0.0;
    }

    let others = (reachable - 1) as f64;
    (others / total_distance as f64) * (others / (node_count - 1) as f64)
}

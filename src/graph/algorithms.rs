//! Traversal and shortest-path algorithms on the unweighted topology

use crate::graph::CompressedGraph;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Run `f` once per node as a BFS source, in parallel when requested.
///
/// Results are returned in node order either way.
pub fn map_sources<T, F>(graph: &CompressedGraph, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if parallel {
        (0..graph.node_count()).into_par_iter().map(f).collect()
    } else {
        (0..graph.node_count()).map(f).collect()
    }
}

/// Unweighted shortest-path distance from `source` to every node.
///
/// Unreachable nodes are `None`; the source itself is `Some(0)`.
pub fn bfs_distances(graph: &CompressedGraph, source: usize) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    distances[source] = Some(0);
    queue.push_back((source, 0u32));

    while let Some((node, dist)) = queue.pop_front() {
        for &next in graph.neighbors(node) {
            let next = next as usize;
            if distances[next].is_none() {
                distances[next] = Some(dist + 1);
                queue.push_back((next, dist + 1));
            }
        }
    }

    distances
}

/// Distribution summary of all strictly positive shortest-path lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStatistics {
    /// Longest shortest path between reachable pairs, 0 when there are none
    pub diameter: u32,

    /// Mean shortest-path length over reachable ordered pairs, 0 when there are none
    pub average_path_length: f64,

    /// Number of reachable ordered pairs (u, v) with u != v
    pub path_count: u64,
}

/// Collect shortest-path lengths for every ordered reachable pair.
///
/// Unreachable pairs are excluded rather than counted as infinite.
pub fn path_statistics(graph: &CompressedGraph, parallel: bool) -> PathStatistics {
    let per_source = map_sources(graph, parallel, |source| {
        bfs_distances(graph, source)
            .into_iter()
            .flatten()
            .filter(|&dist| dist > 0)
            .fold((0u32, 0u64, 0u64), |(max, sum, count), dist| {
                (max.max(dist), sum + u64::from(dist), count + 1)
            })
    });

    let (diameter, total, path_count) = per_source
        .into_iter()
        .fold((0u32, 0u64, 0u64), |(max, sum, count), (m, s, c)| {
            (max.max(m), sum + s, count + c)
        });

    let average_path_length = if path_count == 0 {
        0.0
    } else {
        total as f64 / path_count as f64
    };

    PathStatistics {
        diameter,
        average_path_length,
        path_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Segment;
    use crate::graph::build_graph;

    fn graph_of(segments: &[&[&str]]) -> CompressedGraph {
        let segments: Vec<Segment> = segments.iter().map(|s| Segment::new(s.iter().copied())).collect();
        build_graph(&segments)
    }

    #[test]
    fn bfs_on_path() {
        let g = graph_of(&[&["A", "B"], &["B", "C"]]);
        assert_eq!(bfs_distances(&g, 0), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(bfs_distances(&g, 1), vec![Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn bfs_leaves_other_components_unreached() {
        let g = graph_of(&[&["A", "B"], &["C", "D"]]);
        assert_eq!(bfs_distances(&g, 0), vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn path_graph_statistics() {
        let g = graph_of(&[&["A", "B"], &["B", "C"]]);
        let stats = path_statistics(&g, false);
        assert_eq!(stats.diameter, 2);
        assert_eq!(stats.path_count, 6);
        assert!((stats.average_path_length - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn disconnected_pairs_are_excluded() {
        let g = graph_of(&[&["A", "B"], &["C", "D"], &["E"]]);
        let stats = path_statistics(&g, false);
        assert_eq!(stats.diameter, 1);
        assert_eq!(stats.path_count, 4);
        assert!((stats.average_path_length - 1.0).abs() < 1e-12);
    }

    #[test]
    fn no_edges_gives_zero() {
        let g = graph_of(&[&["A"], &["B"]]);
        let stats = path_statistics(&g, true);
        assert_eq!(stats.diameter, 0);
        assert_eq!(stats.average_path_length, 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let g = graph_of(&[&["A", "B", "C"], &["C", "D"], &["D", "E", "F"], &["G", "H"]]);
        assert_eq!(path_statistics(&g, true), path_statistics(&g, false));
    }
}

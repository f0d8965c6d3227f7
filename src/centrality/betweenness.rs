//! Betweenness centrality via Brandes' algorithm.
//!
//! # Algorithm
//!
//! For unweighted undirected graphs (Brandes, 2001):
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E).
//!
//! Every unordered pair is reached from both of its endpoints, so the raw
//! accumulation counts each pair twice. Dividing by `(N-1)(N-2)` therefore
//! equals dividing the pairwise sum by `(N-1)(N-2)/2`.

use crate::graph::CompressedGraph;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Sources handled per work unit; partial sums are merged in chunk order
const SOURCE_CHUNK: usize = 32;

/// Reusable buffers for one single-source pass
struct BrandesWorkspace {
    /// Nodes in order of discovery (farthest popped first)
    stack: Vec<usize>,

    /// predecessors[w] = nodes immediately preceding w on shortest paths from s
    predecessors: Vec<Vec<usize>>,

    /// Number of shortest paths from s
    sigma: Vec<f64>,

    /// Distance from s, -1 = unvisited
    dist: Vec<i64>,

    delta: Vec<f64>,
    queue: VecDeque<usize>,
}

impl BrandesWorkspace {
    fn new(node_count: usize) -> Self {
        Self {
            stack: Vec::with_capacity(node_count),
            predecessors: vec![Vec::new(); node_count],
            sigma: vec![0.0; node_count],
            dist: vec![-1; node_count],
            delta: vec![0.0; node_count],
            queue: VecDeque::with_capacity(node_count),
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.queue.clear();
        for preds in &mut self.predecessors {
            preds.clear();
        }
        self.sigma.fill(0.0);
        self.dist.fill(-1);
        self.delta.fill(0.0);
    }
}

/// Compute normalized betweenness centrality for every node.
///
/// Graphs with fewer than three nodes have no intermediate nodes, so every
/// score is 0.
pub fn betweenness_centrality(graph: &CompressedGraph, parallel: bool) -> Vec<f64> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let sources: Vec<usize> = (0..node_count).collect();
    let accumulate_chunk = |chunk: &[usize]| {
        let mut workspace = BrandesWorkspace::new(node_count);
        let mut partial = vec![0.0; node_count];
        for &source in chunk {
            accumulate_source(graph, source, &mut workspace, &mut partial);
        }
        partial
    };

    let partials: Vec<Vec<f64>> = if parallel {
        sources.par_chunks(SOURCE_CHUNK).map(accumulate_chunk).collect()
    } else {
        sources.chunks(SOURCE_CHUNK).map(accumulate_chunk).collect()
    };

    let mut scores = vec![0.0; node_count];
    for partial in partials {
        for (score, value) in scores.iter_mut().zip(partial) {
            *score += value;
        }
    }

    let scale = if node_count > 2 {
        1.0 / ((node_count - 1) * (node_count - 2)) as f64
    } else {
        1.0
    };
    for score in &mut scores {
        *score *= scale;
    }

    scores
}

/// Add the dependencies of one source to `scores`
fn accumulate_source(
    graph: &CompressedGraph,
    source: usize,
    ws: &mut BrandesWorkspace,
    scores: &mut [f64],
) {
    ws.reset();
    ws.sigma[source] = 1.0;
    ws.dist[source] = 0;
    ws.queue.push_back(source);

    while let Some(v) = ws.queue.pop_front() {
        ws.stack.push(v);

        for &w in graph.neighbors(v) {
            let w = w as usize;

            // First visit to w?
            if ws.dist[w] < 0 {
                ws.dist[w] = ws.dist[v] + 1;
                ws.queue.push_back(w);
            }

            // Shortest path to w via v?
            if ws.dist[w] == ws.dist[v] + 1 {
                ws.sigma[w] += ws.sigma[v];
                ws.predecessors[w].push(v);
            }
        }
    }

    while let Some(w) = ws.stack.pop() {
        let coefficient = (1.0 + ws.delta[w]) / ws.sigma[w];
        for i in 0..ws.predecessors[w].len() {
            let v = ws.predecessors[w][i];
            ws.delta[v] += ws.sigma[v] * coefficient;
        }

        if w != source {
            scores[w] += ws.delta[w];
        }
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
    fn path_middle_node_has_betweenness() {
        // A - B - C: B lies on the only A-C path
        let g = graph_of(&[&["A", "B"], &["B", "C"]]);
        let bc = betweenness_centrality(&g, false);
        assert!((bc[0] - 0.0).abs() < 1e-12);
        assert!((bc[1] - 1.0).abs() < 1e-12);
        assert!((bc[2] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn star_center_carries_every_path() {
        let g = graph_of(&[&["hub", "a"], &["hub", "b"], &["hub", "c"]]);
        let bc = betweenness_centrality(&g, false);
        let hub = g.index_of("hub").expect("hub present");
        assert!((bc[hub] - 1.0).abs() < 1e-12);
        for id in ["a", "b", "c"] {
            let leaf = g.index_of(id).expect("leaf present");
            assert_eq!(bc[leaf], 0.0);
        }
    }

    #[test]
    fn square_splits_paths_evenly() {
        // A-B, B-D, D-C, C-A: each node is on half of one opposite pair's paths
        let g = graph_of(&[&["A", "B"], &["B", "D"], &["D", "C"], &["C", "A"]]);
        let bc = betweenness_centrality(&g, false);
        for score in bc {
            assert!((score - 0.5 / 3.0).abs() < 1e-12, "got {score}");
        }
    }

    #[test]
    fn chain_of_four() {
        // A - B - C - D: B on A-C and A-D, C on A-D and B-D; scale 1/3
        let g = graph_of(&[&["A", "B"], &["B", "C"], &["C", "D"]]);
        let bc = betweenness_centrality(&g, false);
        assert!((bc[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((bc[2] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(bc[0], 0.0);
        assert_eq!(bc[3], 0.0);
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        let g = graph_of(&[&["A", "B"], &["C", "D"]]);
        let bc = betweenness_centrality(&g, false);
        assert!(bc.iter().all(|&score| score == 0.0));
    }

    #[test]
    fn two_nodes_are_zero() {
        let g = graph_of(&[&["A", "B"]]);
        assert_eq!(betweenness_centrality(&g, false), vec![0.0, 0.0]);
    }

    #[test]
    fn parallel_matches_sequential_exactly() {
        let names: Vec<String> = (0..80).map(|i| format!("n{i:02}")).collect();
        let segments: Vec<Segment> = names
            .windows(3)
            .step_by(2)
            .map(|w| Segment::new(w.iter().cloned()))
            .collect();
        let g = build_graph(&segments);
        assert_eq!(betweenness_centrality(&g, true), betweenness_centrality(&g, false));
    }
}

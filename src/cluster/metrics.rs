//! Degree and clustering statistics

use crate::graph::algorithms::map_sources;
use crate::graph::CompressedGraph;
use itertools::Itertools;

/// Per-node degree and clustering values plus their graph-wide summaries
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStatistics {
    /// Distinct neighbors per node
    pub degrees: Vec<usize>,

    /// Sum of incident co-occurrence weights per node
    pub weighted_degrees: Vec<u64>,

    /// Local clustering coefficient per node
    pub clustering: Vec<f64>,

    /// Mean of the local clustering coefficients
    pub average_clustering: f64,

    /// Largest unweighted degree
    pub max_degree: usize,

    /// Ids of every node attaining `max_degree`, sorted
    pub max_degree_ids: Vec<String>,
}

/// Calculate degree, weighted degree and clustering for every node
pub fn calculate_degree_statistics(graph: &CompressedGraph, parallel: bool) -> DegreeStatistics {
    let node_count = graph.node_count();

    let degrees: Vec<usize> = (0..node_count).map(|n| graph.degree(n)).collect();
    let weighted_degrees: Vec<u64> = (0..node_count).map(|n| graph.weighted_degree(n)).collect();
    let clustering = map_sources(graph, parallel, |n| local_clustering(graph, n));

    let average_clustering = mean(&clustering);
    let (max_degree, max_degree_ids) = max_degree_nodes(graph, &degrees);

    DegreeStatistics {
        degrees,
        weighted_degrees,
        clustering,
        average_clustering,
        max_degree,
        max_degree_ids,
    }
}

/// Fraction of a node's neighbor pairs that are themselves adjacent.
///
/// Nodes with fewer than two neighbors have coefficient 0.
pub fn local_clustering(graph: &CompressedGraph, node: usize) -> f64 {
    let neighbors = graph.neighbors(node);
    let degree = neighbors.len();
    if degree < 2 {
        return 0.0;
    }

    let links = neighbors
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| graph.has_edge(a as usize, b as usize))
        .count();

    let possible = degree * (degree - 1) / 2;
    links as f64 / possible as f64
}

/// Maximum degree and all ids reaching it, lexicographically sorted
pub fn max_degree_nodes(graph: &CompressedGraph, degrees: &[usize]) -> (usize, Vec<String>) {
    let max_degree = degrees.iter().copied().max().unwrap_or(0);

    let ids = degrees
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == max_degree)
        .map(|(node, _)| graph.node_id(node).to_string())
        .sorted()
        .collect();

    (max_degree, ids)
}

/// Density: actual edges / potential edges of an undirected simple graph
pub fn calculate_density(graph: &CompressedGraph) -> f64 {
    let n = graph.node_count();
    if n <= 1 {
        return 0.0;
    }

    let potential_edges = n * (n - 1);
    (2 * graph.edge_count()) as f64 / potential_edges as f64
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

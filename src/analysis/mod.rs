//! Metrics aggregation over a built graph

pub mod result;

pub use result::{MetricsResult, NodeMetrics};

use crate::centrality::{calculate_centrality, CentralityScores};
use crate::cluster::detection::count_connected_components;
use crate::cluster::metrics::{calculate_degree_statistics, calculate_density, DegreeStatistics};
use crate::config::MetricsConfig;
use crate::data::Segment;
use crate::error::{MetricsError, Result};
use crate::graph::algorithms::{path_statistics, PathStatistics};
use crate::graph::{build_graph, CompressedGraph};

/// Build the co-occurrence graph for `segments` and compute all metrics
pub fn compute_metrics(segments: &[Segment], config: &MetricsConfig) -> Result<MetricsResult> {
    config.validate()?;

    let graph = build_graph(segments);
    analyze_graph(&graph, config)
}

/// Compute all metrics for an already built graph.
///
/// Fails with [`MetricsError::EmptyGraph`] when the graph has no nodes.
pub fn analyze_graph(graph: &CompressedGraph, config: &MetricsConfig) -> Result<MetricsResult> {
    if graph.is_empty() {
        return Err(MetricsError::EmptyGraph);
    }

    log::info!(
        "Computing metrics for graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let paths = || (count_connected_components(graph), path_statistics(graph, config.parallel));
    let centrality = || calculate_centrality(graph, config);
    let degrees = || calculate_degree_statistics(graph, config.parallel);

    let ((components, path_stats), (centrality, degree_stats)) = if config.parallel {
        rayon::join(paths, || rayon::join(centrality, degrees))
    } else {
        (paths(), (centrality(), degrees()))
    };

    let result = aggregate(graph, components, path_stats, centrality, degree_stats);

    log::info!(
        "Metrics complete: {} nodes, {} edges, {} components, diameter {}",
        result.size,
        result.num_edges,
        result.num_connected_components,
        result.diameter
    );

    Ok(result)
}

fn aggregate(
    graph: &CompressedGraph,
    num_connected_components: usize,
    paths: PathStatistics,
    centrality: CentralityScores,
    degrees: DegreeStatistics,
) -> MetricsResult {
    let size = graph.node_count();
    let eigenvector = centrality.eigenvector.scores();

    let nodes = (0..size)
        .map(|node| {
            let metrics = NodeMetrics {
                degree: degrees.degrees[node],
                weighted_degree: degrees.weighted_degrees[node],
                betweenness: centrality.betweenness[node],
                closeness: centrality.closeness[node],
                eigenvector: eigenvector.map(|scores| scores[node]),
            };
            (graph.node_id(node).to_string(), metrics)
        })
        .collect();

    let degree_sum: usize = degrees.degrees.iter().sum();

    MetricsResult {
        size,
        density: calculate_density(graph),
        diameter: paths.diameter,
        average_path_length: paths.average_path_length,
        average_degree: degree_sum as f64 / size as f64,
        average_clustering: degrees.average_clustering,
        max_degree: degrees.max_degree,
        max_degree_ids: degrees.max_degree_ids,
        num_connected_components,
        num_edges: graph.edge_count(),
        nodes,
    }
}

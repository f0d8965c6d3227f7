//! Centrality measures on the unweighted co-occurrence topology.
//!
//! Edge weights only feed weighted degree; every centrality here treats the
//! graph as a simple unweighted graph.
//!
//! - **Closeness** (`closeness`): reachability-corrected inverse mean distance.
//! - **Betweenness** (`betweenness`): Brandes' algorithm, normalized for
//!   undirected graphs.
//! - **Eigenvector** (`eigenvector`): power iteration with an explicit
//!   converged / not-converged outcome.

pub mod betweenness;
pub mod closeness;
pub mod eigenvector;

pub use eigenvector::EigenvectorOutcome;

use crate::config::MetricsConfig;
use crate::graph::CompressedGraph;

/// All centrality scores for one graph, indexed by node
#[derive(Debug, Clone, PartialEq)]
pub struct CentralityScores {
    pub closeness: Vec<f64>,
    pub betweenness: Vec<f64>,
    pub eigenvector: EigenvectorOutcome,
}

/// Compute closeness, betweenness and eigenvector centrality
pub fn calculate_centrality(graph: &CompressedGraph, config: &MetricsConfig) -> CentralityScores {
    let closeness = closeness::closeness_centrality(graph, config.parallel);
    let betweenness = betweenness::betweenness_centrality(graph, config.parallel);
    let eigenvector = eigenvector::eigenvector_centrality(
        graph,
        config.eigenvector_max_iter,
        config.eigenvector_tolerance,
    );

    CentralityScores {
        closeness,
        betweenness,
        eigenvector,
    }
}

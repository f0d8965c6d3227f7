//! Output records of a metrics computation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metrics of a single character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetrics {
    pub degree: usize,
    pub weighted_degree: u64,
    pub betweenness: f64,
    pub closeness: f64,

    /// Present only when the power iteration converged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eigenvector: Option<f64>,
}

/// Network metrics of a whole play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResult {
    pub size: usize,
    pub density: f64,
    pub diameter: u32,
    pub average_path_length: f64,
    pub average_degree: f64,
    pub average_clustering: f64,
    pub max_degree: usize,
    pub max_degree_ids: Vec<String>,
    pub num_connected_components: usize,
    pub num_edges: usize,

    /// Per-character metrics keyed by speaker id
    pub nodes: BTreeMap<String, NodeMetrics>,
}

impl MetricsResult {
    /// Metrics of one character
    pub fn node(&self, id: &str) -> Option<&NodeMetrics> {
        self.nodes.get(id)
    }

    /// Whether eigenvector centrality is reported
    pub fn has_eigenvector(&self) -> bool {
        self.nodes.values().any(|node| node.eigenvector.is_some())
    }
}

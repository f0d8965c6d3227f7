//! Graph construction module

use crate::data::Segment;
use crate::graph::CompressedGraph;
use itertools::Itertools;
use std::collections::HashMap;

/// Builder for incrementally constructing a CompressedGraph from co-occurrences
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from speaker ids to provisional node indices
    id_to_index: HashMap<String, u32>,

    /// Speaker ids in order of first appearance
    node_ids: Vec<String>,

    /// Co-occurrence weights keyed by (smaller, larger) provisional index
    weights: HashMap<(u32, u32), u32>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            weights: HashMap::new(),
        }
    }

    /// Number of nodes registered so far
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Get or create a node index for the given speaker id
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());

        idx
    }

    /// Record one co-occurrence of two speakers.
    ///
    /// Returns `false` when both ids are equal: the speaker is registered as a
    /// node but no self-loop is stored.
    pub fn add_cooccurrence(&mut self, a: &str, b: &str) -> bool {
        let a_idx = self.get_or_create_node(a);
        let b_idx = self.get_or_create_node(b);

        if a_idx == b_idx {
            log::debug!("Skipping self co-occurrence of {}", a);
            return false;
        }

        let key = (a_idx.min(b_idx), a_idx.max(b_idx));
        *self.weights.entry(key).or_insert(0) += 1;

        true
    }

    /// Add one segment's speaker list.
    ///
    /// A lone speaker becomes a node even without co-occurrences; every pair
    /// of positions i < j counts once, so repeated ids inflate the weight.
    pub fn add_segment(&mut self, speakers: &[String]) {
        if speakers.len() == 1 {
            self.get_or_create_node(&speakers[0]);
        }

        for (source, target) in speakers.iter().tuple_combinations() {
            self.add_cooccurrence(source, target);
        }
    }

    /// Build the compressed graph
    pub fn build(self) -> CompressedGraph {
        let node_count = self.node_ids.len();

        // Final indices follow the lexicographic order of the ids
        let order: Vec<usize> = (0..node_count)
            .sorted_by(|&a, &b| self.node_ids[a].cmp(&self.node_ids[b]))
            .collect();

        let mut remap = vec![0u32; node_count];
        for (new_idx, &old_idx) in order.iter().enumerate() {
            remap[old_idx] = new_idx as u32;
        }

        let mut adjacency: Vec<Vec<(u32, u32)>> = vec![Vec::new(); node_count];
        for (&(a, b), &weight) in &self.weights {
            let a = remap[a as usize];
            let b = remap[b as usize];
            adjacency[a as usize].push((b, weight));
            adjacency[b as usize].push((a, weight));
        }

        let mut node_ids = self.node_ids;
        let sorted_ids = order
            .iter()
            .map(|&old_idx| std::mem::take(&mut node_ids[old_idx]))
            .collect();

        CompressedGraph::from_adjacency(sorted_ids, adjacency)
    }
}

/// Build the co-occurrence graph for a sequence of segments
pub fn build_graph(segments: &[Segment]) -> CompressedGraph {
    let mut builder = GraphBuilder::new();

    for segment in segments {
        builder.add_segment(&segment.speakers);
    }

    let graph = builder.build();
    log::debug!(
        "Built graph with {} nodes and {} edges from {} segments",
        graph.node_count(),
        graph.edge_count(),
        segments.len()
    );

    graph
}

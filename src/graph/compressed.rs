//! Memory-efficient undirected weighted graph representation

use std::collections::HashMap;

/// Compressed sparse representation of an undirected co-occurrence graph.
///
/// Every edge is stored twice, once in each endpoint's adjacency list, and
/// each list is sorted by neighbor index. Node indices follow the
/// lexicographic order of the speaker ids, so two graphs built from the same
/// co-occurrences are identical regardless of segment order.
///
/// The graph is immutable once built; only [`GraphBuilder`](super::GraphBuilder)
/// constructs it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedGraph {
    /// Offset array: offsets[i] to offsets[i+1] defines the adjacency range for node i
    offsets: Vec<u32>,

    /// Concatenated neighbor lists
    neighbors: Vec<u32>,

    /// Co-occurrence weight of each entry in `neighbors`
    weights: Vec<u32>,

    /// Original speaker ids, indexed by node
    node_ids: Vec<String>,

    /// Reverse mapping from speaker id to node index
    id_to_index: HashMap<String, u32>,

    /// Number of undirected edges
    edge_count: usize,
}

impl CompressedGraph {
    /// Assemble a graph from sorted node ids and per-node adjacency lists.
    ///
    /// `adjacency[i]` must hold `(neighbor, weight)` pairs for node `i`, each
    /// undirected edge appearing in both endpoints' lists.
    pub(crate) fn from_adjacency(node_ids: Vec<String>, mut adjacency: Vec<Vec<(u32, u32)>>) -> Self {
        let total: usize = adjacency.iter().map(Vec::len).sum();

        let mut offsets = Vec::with_capacity(node_ids.len() + 1);
        let mut neighbors = Vec::with_capacity(total);
        let mut weights = Vec::with_capacity(total);
        offsets.push(0);

        for list in &mut adjacency {
            // Sorted for binary search in has_edge/weight
            list.sort_unstable_by_key(|&(neighbor, _)| neighbor);
            for &(neighbor, weight) in list.iter() {
                neighbors.push(neighbor);
                weights.push(weight);
            }
            offsets.push(neighbors.len() as u32);
        }

        let id_to_index = node_ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx as u32))
            .collect();

        Self {
            offsets,
            neighbors,
            weights,
            node_ids,
            id_to_index,
            edge_count: total / 2,
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Speaker id of a node
    pub fn node_id(&self, node: usize) -> &str {
        &self.node_ids[node]
    }

    /// All speaker ids in node index order (lexicographic)
    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    /// Node index of a speaker id, if present
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).map(|&idx| idx as usize)
    }

    /// Neighbors of a node, sorted by index
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Neighbors of a node paired with the co-occurrence weight of the edge
    pub fn weighted_neighbors(&self, node: usize) -> impl Iterator<Item = (u32, u32)> + '_ {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        self.neighbors[start..end]
            .iter()
            .copied()
            .zip(self.weights[start..end].iter().copied())
    }

    /// Number of distinct neighbors
    pub fn degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Sum of the weights of all incident edges
    pub fn weighted_degree(&self, node: usize) -> u64 {
        self.weighted_neighbors(node)
            .map(|(_, weight)| u64::from(weight))
            .sum()
    }

    /// Check if `a` and `b` are adjacent
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&(b as u32)).is_ok()
    }

    /// Co-occurrence weight of the edge between `a` and `b`
    pub fn weight(&self, a: usize, b: usize) -> Option<u32> {
        let start = self.offsets[a] as usize;
        self.neighbors(a)
            .binary_search(&(b as u32))
            .ok()
            .map(|pos| self.weights[start + pos])
    }

    /// Iterate each undirected edge once as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.node_count()).flat_map(move |a| {
            self.weighted_neighbors(a)
                .filter(move |&(b, _)| (b as usize) > a)
                .map(move |(b, weight)| (a, b as usize, weight))
        })
    }
}

//! Connected component detection

use crate::cluster::Component;
use crate::graph::CompressedGraph;
use petgraph::unionfind::UnionFind;
use std::collections::HashMap;

/// Partition the nodes into connected components using union-find.
///
/// Components are ordered by their smallest node index, and members are
/// listed in ascending order.
pub fn find_connected_components(graph: &CompressedGraph) -> Vec<Component> {
    let node_count = graph.node_count();
    let mut sets = UnionFind::<u32>::new(node_count);
    
    for (a, b, _) in graph.edges() {
        sets.union(a as u32, b as u32);
    }
    
    // Nodes are visited in ascending order, so each root is first seen at its smallest member
    let mut position: HashMap<u32, usize> = HashMap::new();
    let mut components: Vec<Component> = Vec::new();
    
    for (node, root) in sets.into_labeling().into_iter().enumerate() {
        let pos = *position.entry(root).or_insert_with(|| {
            components.push(Component {
                id: components.len() as u32,
                members: Vec::new(),
            });
            components.len() - 1
        });
        components[pos].members.push(node as u32);
    }
    
    log::debug!(
        "Found {} connected components among {} nodes",
        components.len(),
        node_count
    );
    
    components
}

/// Number of connected components
pub fn count_connected_components(graph: &CompressedGraph) -> usize {
    find_connected_components(graph).len()
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
    fn connected_graph_has_one_component() {
        let g = graph_of(&[&["A", "B"], &["B", "C"]]);
        let components = find_connected_components(&g);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].members, vec![0, 1, 2]);
    }
    
    #[test]
    fn disjoint_pairs_and_isolated_node() {
        // Indices: A=0, B=1, C=2, D=3, E=4
        let g = graph_of(&[&["A", "C"], &["B", "D"], &["E"]]);
        let components = find_connected_components(&g);
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].members, vec![0, 2]);
        assert_eq!(components[1].members, vec![1, 3]);
        assert_eq!(components[2].members, vec![4]);
        assert_eq!(components[2].size(), 1);
        assert_eq!(count_connected_components(&g), 3);
    }
    
    #[test]
    fn empty_graph_has_no_components() {
        let g = graph_of(&[]);
        assert!(find_connected_components(&g).is_empty());
    }
}

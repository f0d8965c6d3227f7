//! Connectivity and local structure analysis module

pub mod detection;
pub mod metrics;

use serde::{Serialize, Deserialize};

/// Represents a connected component in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Position of this component, ordered by smallest member
    pub id: u32,
    
    /// Members of this component (node indices, ascending)
    pub members: Vec<u32>,
}

impl Component {
    /// Number of nodes in the component
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

//! Eigenvector centrality via power iteration.
//!
//! Iterates `x <- (A + I) x`, L2-normalizing after every step. The identity
//! shift keeps the eigenvectors of `A` but stops the oscillation that plain
//! `A` shows on bipartite graphs (paths, stars, even cycles).
//!
//! Convergence is declared when the L1 change between successive iterates
//! drops below `N * tolerance`. Running out of iterations is reported as
//! [`EigenvectorOutcome::NotConverged`] rather than partial scores.

use crate::graph::CompressedGraph;

/// Result of the power iteration
#[derive(Debug, Clone, PartialEq)]
pub enum EigenvectorOutcome {
    /// Scores indexed by node
    Converged(Vec<f64>),

    /// The iteration cap was reached first
    NotConverged { iterations: usize },
}

impl EigenvectorOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }

    /// Converged scores, if any
    pub fn scores(&self) -> Option<&[f64]> {
        match self {
            Self::Converged(scores) => Some(scores),
            Self::NotConverged { .. } => None,
        }
    }
}

/// Compute eigenvector centrality on the unweighted adjacency matrix
pub fn eigenvector_centrality(
    graph: &CompressedGraph,
    max_iter: usize,
    tolerance: f64,
) -> EigenvectorOutcome {
    let node_count = graph.node_count();
    if node_count == 0 {
        return EigenvectorOutcome::Converged(Vec::new());
    }

    let mut scores = vec![1.0 / node_count as f64; node_count];
    let threshold = node_count as f64 * tolerance;

    for iteration in 1..=max_iter {
        let mut next: Vec<f64> = (0..node_count)
            .map(|v| {
                scores[v]
                    + graph
                        .neighbors(v)
                        .iter()
                        .map(|&u| scores[u as usize])
                        .sum::<f64>()
            })
            .collect();

        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let change: f64 = scores
            .iter()
            .zip(&next)
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = next;

        if change < threshold {
            log::debug!("Eigenvector centrality converged after {} iterations", iteration);
            return EigenvectorOutcome::Converged(scores);
        }
    }

    log::warn!(
        "Eigenvector centrality did not converge within {} iterations; omitting scores",
        max_iter
    );
    EigenvectorOutcome::NotConverged {
        iterations: max_iter,
    }
}

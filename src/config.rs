//! Configuration management for the metrics engine

use crate::error::{MetricsError, Result};

/// Tuning knobs for one metrics computation
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    /// Iteration cap for eigenvector power iteration
    pub eigenvector_max_iter: usize,
    
    /// Per-node convergence tolerance; the iteration stops once the L1
    /// change drops below `node_count * tolerance`
    pub eigenvector_tolerance: f64,
    
    /// Run independent analyses and per-source traversals on the rayon pool
    pub parallel: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            eigenvector_max_iter: 100,
            eigenvector_tolerance: 1.0e-6,
            parallel: true,
        }
    }
}

impl MetricsConfig {
    /// Create a new configuration with custom values
    pub fn new(
        eigenvector_max_iter: usize,
        eigenvector_tolerance: f64,
        parallel: bool,
    ) -> Self {
        Self {
            eigenvector_max_iter,
            eigenvector_tolerance,
            parallel,
        }
    }
    
    /// Reject values the power iteration cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.eigenvector_max_iter == 0 {
            return Err(MetricsError::InvalidConfig(
                "eigenvector_max_iter must be at least 1".to_string(),
            ));
        }
        
        if !self.eigenvector_tolerance.is_finite() || self.eigenvector_tolerance <= 0.0 {
            return Err(MetricsError::InvalidConfig(format!(
                "eigenvector_tolerance must be a positive finite number, got {}",
                self.eigenvector_tolerance
            )));
        }
        
        Ok(())
    }
}
